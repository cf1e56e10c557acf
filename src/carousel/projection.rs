//! Visible window projection: which cards are drawn, where, and in which
//! stacking order.

use super::order::StackOrder;

/// Per-position styling curve for stacked cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackStyle {
    /// Vertical offset added per position, in logical pixels.
    pub card_spacing: f32,
    /// Scale lost per position.
    pub scale_step: f32,
    /// Opacity lost per position.
    pub fade_step: f32,
}

impl Default for StackStyle {
    fn default() -> Self {
        Self {
            card_spacing: 56.0,
            scale_step: 0.04,
            fade_step: 0.12,
        }
    }
}

/// One card of the visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackCard {
    /// Index into the item list.
    pub item: usize,
    /// 0 = top of the stack.
    pub position: usize,
    /// Paint order; higher draws in front.
    pub depth: usize,
    pub offset_y: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl StackCard {
    pub fn is_top(&self) -> bool {
        self.position == 0
    }
}

/// Project the first `visible` slots of `order` into positioned cards,
/// top card first.
pub fn project(order: &StackOrder, visible: usize, style: &StackStyle) -> Vec<StackCard> {
    let window_len = visible.min(order.len());
    order
        .window(window_len)
        .enumerate()
        .map(|(position, item)| {
            let p = position as f32;
            StackCard {
                item,
                position,
                depth: window_len - position - 1,
                offset_y: p * style.card_spacing,
                scale: (1.0 - p * style.scale_step).max(0.0),
                opacity: (1.0 - p * style.fade_step).clamp(0.0, 1.0),
            }
        })
        .collect()
}

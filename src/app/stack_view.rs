//! Recommendation stack rendering for `SiteApp`.
//!
//! Input is resolved before painting so the cards drawn in a frame always
//! reflect every rotation that frame produced. Hit areas are registered in
//! back-to-front order (stack background, top card, Prev, Next) so egui
//! routes a click to the innermost control.

use std::time::Instant;

use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use brand_site::carousel::projection::StackCard;
use brand_site::content::copy;
use brand_site::content::Recommendation;

use super::SiteApp;
use crate::ui;

const STACK_MAX_WIDTH: f32 = 448.0;
const STACK_HEIGHT: f32 = 560.0;
const CARD_HEIGHT: f32 = 340.0;
const CARD_PADDING: f32 = 28.0;
const AVATAR_SIZE: f32 = 72.0;
const FOOTER_HEIGHT: f32 = 34.0;
const BUTTON_WIDTH: f32 = 64.0;

/// Frame-to-frame pointer bookkeeping for the stack.
#[derive(Debug, Default)]
pub struct StackViewState {
    /// Last known pointer y while a gesture is in flight. Touch releases
    /// can arrive after egui has already dropped the pointer position.
    last_pointer_y: Option<f32>,
}

/// Geometry of the top card, which does not depend on which item is on top.
struct TopCardLayout {
    card: Rect,
    prev: Rect,
    next: Rect,
    dots: Rect,
}

impl TopCardLayout {
    fn new(stack_rect: Rect) -> Self {
        let card = Rect::from_min_size(stack_rect.min, Vec2::new(stack_rect.width(), CARD_HEIGHT));
        let footer_top = card.bottom() - CARD_PADDING - FOOTER_HEIGHT;
        let prev = Rect::from_min_size(
            Pos2::new(card.left() + CARD_PADDING, footer_top),
            Vec2::new(BUTTON_WIDTH, FOOTER_HEIGHT),
        );
        let next = Rect::from_min_size(
            Pos2::new(card.right() - CARD_PADDING - BUTTON_WIDTH, footer_top),
            Vec2::new(BUTTON_WIDTH, FOOTER_HEIGHT),
        );
        let dots = Rect::from_min_max(
            Pos2::new(prev.right() + 8.0, footer_top),
            Pos2::new(next.left() - 8.0, footer_top + FOOTER_HEIGHT),
        );
        Self {
            card,
            prev,
            next,
            dots,
        }
    }
}

impl SiteApp {
    /// Draw the card stack, status line and hint, and feed this frame's
    /// pointer and wheel input into the controller.
    pub fn draw_stack(&mut self, ui: &mut egui::Ui, now: Instant) {
        let width = ui.available_width().min(STACK_MAX_WIDTH);
        let (stack_rect, _) = ui.allocate_exact_size(Vec2::new(width, STACK_HEIGHT), Sense::hover());
        let layout = TopCardLayout::new(stack_rect);

        // Hit areas, back to front.
        let background = ui.interact(stack_rect, ui.id().with("stack_bg"), Sense::click_and_drag());
        let top_card = ui.interact(layout.card, ui.id().with("stack_top"), Sense::click());
        let prev = ui.interact(layout.prev, ui.id().with("stack_prev"), Sense::click());
        let next = ui.interact(layout.next, ui.id().with("stack_next"), Sense::click());

        let changed = self.handle_stack_input(ui, stack_rect, now, &top_card, &prev, &next);
        if changed {
            ui.ctx().request_repaint();
        }

        let painter = ui.painter_at(stack_rect.expand(12.0));
        let cards = self.stack.visible_cards();
        // Paint from the back of the stack so nearer cards occlude.
        let mut back_to_front = cards.clone();
        back_to_front.sort_by_key(|card| card.depth);
        for card in &back_to_front {
            let Some(rec) = self.stack.items().get(card.item) else {
                continue;
            };
            let rect = card_rect(stack_rect, card);
            self.paint_card(&painter, rect, card, rec, top_card.hovered());
        }

        if !cards.is_empty() {
            self.paint_footer(&painter, &layout, prev.hovered(), next.hovered());
        }

        if background.hovered() || top_card.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(copy::STACK_HINT.to_uppercase())
                    .size(10.0)
                    .color(ui::TEXT_FAINT),
            );
            if let Some(status) = self.stack.announcement() {
                ui.label(egui::RichText::new(status).size(11.0).color(ui::TEXT_MUTED));
            }
        });
    }

    /// Returns true when the stack rotated.
    fn handle_stack_input(
        &mut self,
        ui: &mut egui::Ui,
        stack_rect: Rect,
        now: Instant,
        top_card: &egui::Response,
        prev: &egui::Response,
        next: &egui::Response,
    ) -> bool {
        let before = self.stack.current();
        let hovered = ui.rect_contains_pointer(stack_rect);
        self.stack.set_hovered(hovered, now);

        let (pressed, released, pointer_y, wheel_y) = ui.input(|i| {
            (
                i.pointer.any_pressed(),
                i.pointer.any_released(),
                i.pointer.latest_pos().or(i.pointer.interact_pos()).map(|p| p.y),
                i.raw_scroll_delta.y,
            )
        });

        if pressed && hovered {
            if let Some(y) = pointer_y {
                self.stack.pointer_down(y, now);
                self.stack_view.last_pointer_y = Some(y);
            }
        } else if self.stack.pointer_move() {
            if let Some(y) = pointer_y {
                self.stack_view.last_pointer_y = Some(y);
            }
        }

        // The page must not scroll while the stack owns the pointer.
        if hovered || self.stack.pointer_move() {
            if hovered && wheel_y != 0.0 {
                // egui reports wheel-down as negative y; the stack expects
                // page-style deltas where positive means down.
                self.stack.wheel(-wheel_y, now);
            }
            ui.ctx().input_mut(|i| {
                i.raw_scroll_delta = Vec2::ZERO;
                i.smooth_scroll_delta = Vec2::ZERO;
            });
        }

        if released && self.stack.pointer_move() {
            match pointer_y.or(self.stack_view.last_pointer_y) {
                Some(y) => {
                    self.stack.pointer_up(y, now);
                }
                None => self.stack.pointer_cancel(),
            }
            self.stack_view.last_pointer_y = None;
        }

        // Click paths run after the swipe has resolved so the latch applies.
        if prev.clicked() {
            self.stack.backward();
        } else if next.clicked() {
            self.stack.forward();
        } else if top_card.clicked() {
            self.stack.tap();
        }

        self.stack.current() != before
    }

    fn paint_card(
        &self,
        painter: &egui::Painter,
        rect: Rect,
        card: &StackCard,
        rec: &Recommendation,
        top_hovered: bool,
    ) {
        let opacity = card.opacity;
        let is_top = card.is_top();
        let rect = if is_top && top_hovered {
            rect.translate(Vec2::new(0.0, -6.0))
        } else {
            rect
        };
        let rounding = Rounding::same(24.0 * card.scale);

        // Shadow
        painter.rect_filled(
            rect.translate(Vec2::new(0.0, 10.0)).expand(2.0),
            rounding,
            Color32::from_black_alpha(90),
        );

        if is_top {
            // Gradient ring around the top card.
            let ring = rect.expand(2.0);
            ui::paint_accent_rect(painter, ring, 1.0);
            painter.rect_filled(rect, rounding, ui::CARD_TOP);
        } else {
            let fill = ui::mix(ui::BACKGROUND, ui::CARD, opacity);
            painter.rect_filled(rect, rounding, fill);
            painter.rect_stroke(rect, rounding, Stroke::new(1.0, ui::mix(fill, ui::TEXT, 0.06)));
        }

        let pad = CARD_PADDING * card.scale;
        let avatar = Rect::from_min_size(
            rect.min + Vec2::splat(pad),
            Vec2::splat(AVATAR_SIZE * card.scale),
        );
        match self.textures.get(&rec.image.key()) {
            Some(tex) => {
                painter.image(
                    tex.id(),
                    avatar,
                    Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                    Color32::WHITE.gamma_multiply(opacity),
                );
            }
            None => ui::paint_initials(painter, avatar, &rec.initials(), opacity),
        }
        // Accent badge on the avatar corner.
        painter.circle_filled(
            avatar.right_bottom() - Vec2::splat(4.0 * card.scale),
            9.0 * card.scale,
            ui::accent_at(0.8).gamma_multiply(opacity),
        );

        let text_color = ui::mix(ui::BACKGROUND, ui::TEXT, opacity);
        let muted = ui::mix(ui::BACKGROUND, ui::TEXT_MUTED, opacity);
        let name_x = avatar.right() + 20.0 * card.scale;
        painter.text(
            Pos2::new(name_x, avatar.top() + 10.0 * card.scale),
            Align2::LEFT_TOP,
            &rec.name,
            FontId::proportional(20.0 * card.scale),
            text_color,
        );
        painter.text(
            Pos2::new(name_x, avatar.top() + 40.0 * card.scale),
            Align2::LEFT_TOP,
            rec.title.to_uppercase(),
            FontId::proportional(11.0 * card.scale),
            muted,
        );

        let quote = painter.layout(
            format!("\u{201C}{}\u{201D}", rec.text),
            FontId::proportional(16.0 * card.scale),
            ui::mix(ui::BACKGROUND, ui::TEXT, 0.85 * opacity),
            rect.width() - pad * 2.0,
        );
        painter.galley(
            Pos2::new(rect.left() + pad, avatar.bottom() + 22.0 * card.scale),
            quote,
            text_color,
        );
    }

    /// Prev / progress dots / Next row on the top card.
    fn paint_footer(
        &self,
        painter: &egui::Painter,
        layout: &TopCardLayout,
        prev_hovered: bool,
        next_hovered: bool,
    ) {
        for (rect, label, hovered) in [
            (layout.prev, "PREV", prev_hovered),
            (layout.next, "NEXT", next_hovered),
        ] {
            let fill = if hovered {
                ui::mix(ui::CARD_TOP, ui::TEXT, 0.12)
            } else {
                ui::mix(ui::CARD_TOP, ui::TEXT, 0.05)
            };
            painter.rect_filled(rect, Rounding::same(999.0), fill);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(11.0),
                if hovered { ui::TEXT } else { ui::TEXT_MUTED },
            );
        }

        let indicators = self.stack.indicators();
        let spacing = 16.0;
        let total = spacing * indicators.len().saturating_sub(1) as f32;
        let start_x = layout.dots.center().x - total / 2.0;
        for (i, active) in indicators.iter().enumerate() {
            let center = Pos2::new(start_x + i as f32 * spacing, layout.dots.center().y);
            if *active {
                painter.circle_filled(center, 6.0, Color32::from_white_alpha(90));
                painter.circle_filled(center, 4.0, ui::accent_at(i as f32 / indicators.len() as f32));
            } else {
                painter.circle_filled(center, 4.0, Color32::from_white_alpha(50));
            }
        }
    }
}

/// Card rectangle for a stack position: shifted down and shrunk around the
/// top edge's centre.
fn card_rect(stack_rect: Rect, card: &StackCard) -> Rect {
    let width = stack_rect.width() * card.scale;
    let height = CARD_HEIGHT * card.scale;
    let top = stack_rect.top() + card.offset_y;
    Rect::from_min_size(
        Pos2::new(stack_rect.center().x - width / 2.0, top),
        Vec2::new(width, height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use brand_site::config::{CarouselConfig, SiteConfig};

    /// Drives `draw_stack` headlessly, one egui frame per call.
    struct Harness {
        ctx: egui::Context,
        app: SiteApp,
        t0: Instant,
    }

    impl Harness {
        fn new() -> Self {
            let config = SiteConfig {
                carousel: CarouselConfig::default().with_interval(Duration::from_secs(3600)),
                asset_dir: std::env::temp_dir().join("brand_site_stack_view_no_assets"),
            };
            Self {
                ctx: egui::Context::default(),
                app: SiteApp::new(config),
                t0: Instant::now(),
            }
        }

        /// Runs one frame at `at_ms` and returns the page scroll left over
        /// after the stack has seen the input.
        fn frame(&mut self, at_ms: u64, events: Vec<egui::Event>) -> Vec2 {
            let raw = egui::RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::splat(900.0))),
                time: Some(at_ms as f64 / 1000.0),
                events,
                ..Default::default()
            };
            let now = self.t0 + Duration::from_millis(at_ms);
            let app = &mut self.app;
            let mut leftover = Vec2::ZERO;
            let _ = self.ctx.run(raw, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    app.draw_stack(ui, now);
                    leftover = ui.input(|i| i.smooth_scroll_delta + i.raw_scroll_delta);
                });
            });
            leftover
        }
    }

    fn moved(x: f32, y: f32) -> egui::Event {
        egui::Event::PointerMoved(Pos2::new(x, y))
    }

    fn button(x: f32, y: f32, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: Pos2::new(x, y),
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn wheel_down() -> egui::Event {
        egui::Event::MouseWheel {
            unit: egui::MouseWheelUnit::Line,
            delta: Vec2::new(0.0, -1.0),
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn hover_pauses_and_leaving_resumes() {
        let mut h = Harness::new();
        assert!(!h.app.stack.is_paused());

        h.frame(0, vec![moved(200.0, 150.0)]);
        assert!(h.app.stack.is_paused());

        h.frame(100, vec![moved(700.0, 800.0)]);
        assert!(!h.app.stack.is_paused());
    }

    #[test]
    fn wheel_down_over_stack_advances_without_scrolling_page() {
        let mut h = Harness::new();
        h.frame(0, vec![moved(200.0, 150.0)]);

        let leftover = h.frame(16, vec![wheel_down()]);
        assert_eq!(h.app.stack.current(), Some(1));
        assert_eq!(leftover, Vec2::ZERO);

        // Still inside the throttle window.
        h.frame(100, vec![wheel_down()]);
        assert_eq!(h.app.stack.current(), Some(1));
    }

    #[test]
    fn upward_swipe_rotates_once_then_tap_advances() {
        let mut h = Harness::new();
        h.frame(0, vec![moved(200.0, 200.0)]);

        h.frame(400, vec![button(200.0, 200.0, true)]);
        h.frame(450, vec![moved(200.0, 130.0)]);
        h.frame(500, vec![button(200.0, 130.0, false)]);
        assert_eq!(h.app.stack.current(), Some(1));

        h.frame(1200, vec![moved(200.0, 150.0), button(200.0, 150.0, true)]);
        h.frame(1250, vec![button(200.0, 150.0, false)]);
        assert_eq!(h.app.stack.current(), Some(2));
    }

    fn card(position: usize, offset_y: f32, scale: f32) -> StackCard {
        StackCard {
            item: position,
            position,
            depth: 3 - position,
            offset_y,
            scale,
            opacity: 1.0,
        }
    }

    #[test]
    fn top_card_fills_stack_width() {
        let stack = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(400.0, STACK_HEIGHT));
        let rect = card_rect(stack, &card(0, 0.0, 1.0));
        assert_eq!(rect, TopCardLayout::new(stack).card);
    }

    #[test]
    fn deeper_cards_are_narrower_and_lower() {
        let stack = Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, STACK_HEIGHT));
        let front = card_rect(stack, &card(0, 0.0, 1.0));
        let back = card_rect(stack, &card(2, 112.0, 0.92));
        assert!(back.width() < front.width());
        assert!(back.top() > front.top());
        assert!((back.center().x - front.center().x).abs() < 1e-3);
    }

    #[test]
    fn footer_buttons_sit_inside_card() {
        let stack = Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, STACK_HEIGHT));
        let layout = TopCardLayout::new(stack);
        assert!(layout.card.contains_rect(layout.prev));
        assert!(layout.card.contains_rect(layout.next));
        assert!(layout.dots.left() > layout.prev.right());
        assert!(layout.dots.right() < layout.next.left());
    }
}

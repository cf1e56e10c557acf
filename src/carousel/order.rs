//! Stack Order
//!
//! The rotation permutation behind the card stack. Slot 0 is the card on
//! top; rotating never adds or drops an index, it only moves one end of the
//! deque to the other.

use std::collections::VecDeque;

/// Permutation of item indices `0..len`, front = topmost card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOrder {
    slots: VecDeque<usize>,
}

impl StackOrder {
    /// Identity permutation `[0, 1, ..., len - 1]`.
    pub fn identity(len: usize) -> Self {
        Self {
            slots: (0..len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Item index currently on top.
    pub fn first(&self) -> Option<usize> {
        self.slots.front().copied()
    }

    /// First element moves to the end, everything else shifts up one slot.
    pub fn rotate_forward(&mut self) {
        if let Some(first) = self.slots.pop_front() {
            self.slots.push_back(first);
        }
    }

    /// Last element moves to the front.
    pub fn rotate_backward(&mut self) {
        if let Some(last) = self.slots.pop_back() {
            self.slots.push_front(last);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().copied()
    }

    /// The first `n` slots (fewer if the order is shorter).
    pub fn window(&self, n: usize) -> impl Iterator<Item = usize> + '_ {
        self.iter().take(n)
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_sorted() {
        assert_eq!(StackOrder::identity(4).to_vec(), vec![0, 1, 2, 3]);
        assert!(StackOrder::identity(0).is_empty());
    }

    #[test]
    fn rotations_move_one_end() {
        let mut order = StackOrder::identity(4);
        order.rotate_forward();
        assert_eq!(order.to_vec(), vec![1, 2, 3, 0]);
        order.rotate_backward();
        order.rotate_backward();
        assert_eq!(order.to_vec(), vec![3, 0, 1, 2]);
    }

    #[test]
    fn empty_and_single_are_stable() {
        let mut empty = StackOrder::identity(0);
        empty.rotate_forward();
        empty.rotate_backward();
        assert_eq!(empty.first(), None);

        let mut single = StackOrder::identity(1);
        single.rotate_forward();
        single.rotate_backward();
        assert_eq!(single.to_vec(), vec![0]);
    }

    #[test]
    fn window_is_a_prefix() {
        let mut order = StackOrder::identity(6);
        order.rotate_forward();
        assert_eq!(order.window(3).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(order.window(10).count(), 6);
        assert_eq!(order.iter().last(), Some(0));
    }
}

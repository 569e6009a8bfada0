use crate::Hand;
use std::collections::VecDeque;

/// Player hands waiting for a decision. Front pushes give a hand the next
/// turn; back pushes let other hands go first.
#[derive(Debug, Default, Clone)]
pub struct HandQueue {
    hands: VecDeque<Hand>,
}

impl HandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_front(&mut self, hand: Hand) {
        self.hands.push_front(hand);
    }

    pub fn push_back(&mut self, hand: Hand) {
        self.hands.push_back(hand);
    }

    pub fn pop_front(&mut self) -> Option<Hand> {
        self.hands.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<Hand> {
        self.hands.pop_back()
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// True for an empty queue as well.
    pub fn all_closed(&self) -> bool {
        self.hands.iter().all(|hand| hand.closed)
    }

    pub fn active_count(&self) -> usize {
        self.hands.iter().filter(|hand| !hand.closed).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hand> {
        self.hands.iter()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Hand> + '_ {
        self.hands.drain(..)
    }
}

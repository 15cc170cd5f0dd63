//! Glow color assignment
//!
//! Exactly 3 of the 5 cards carry a glow, each a distinct color. The
//! assignment is a one-time random permutation fixed at construction;
//! a seed makes it deterministic for tests.

use crate::card::CARD_COUNT;

/// Number of glowing cards per pack
pub const GLOWING_CARDS: usize = 3;

/// Glow color tag for a card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlowColor {
    Gold,
    Purple,
    Blue,
}

impl GlowColor {
    /// CSS class toggle consumed by the render layer
    pub fn class_name(&self) -> &'static str {
        match self {
            GlowColor::Gold => "glow-gold",
            GlowColor::Purple => "glow-purple",
            GlowColor::Blue => "glow-blue",
        }
    }
}

/// Immutable card-index-to-glow mapping
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlowAssignment {
    slots: [Option<GlowColor>; CARD_COUNT],
}

impl GlowAssignment {
    /// Random assignment, fresh entropy
    pub fn random() -> Self {
        Self::from_rng(&mut fastrand::Rng::new())
    }

    /// Deterministic assignment for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(&mut fastrand::Rng::with_seed(seed))
    }

    fn from_rng(rng: &mut fastrand::Rng) -> Self {
        let mut indices = [0usize, 1, 2, 3, 4];
        rng.shuffle(&mut indices);

        let mut colors = [GlowColor::Gold, GlowColor::Purple, GlowColor::Blue];
        rng.shuffle(&mut colors);

        let mut slots = [None; CARD_COUNT];
        for (slot, color) in indices.iter().take(GLOWING_CARDS).zip(colors) {
            slots[*slot] = Some(color);
        }
        Self { slots }
    }

    pub fn color(&self, index: usize) -> Option<GlowColor> {
        self.slots.get(index).copied().flatten()
    }

    pub fn class_name(&self, index: usize) -> Option<&'static str> {
        self.color(index).map(|c| c.class_name())
    }

    pub fn glowing_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_three_glowing() {
        for seed in 0..50 {
            let assignment = GlowAssignment::seeded(seed);
            assert_eq!(assignment.glowing_count(), GLOWING_CARDS);
        }
    }

    #[test]
    fn test_colors_are_distinct() {
        for seed in 0..50 {
            let assignment = GlowAssignment::seeded(seed);
            let mut colors: Vec<GlowColor> =
                (0..CARD_COUNT).filter_map(|i| assignment.color(i)).collect();
            colors.sort_by_key(|c| *c as u8);
            colors.dedup();
            assert_eq!(colors.len(), GLOWING_CARDS);
        }
    }

    #[test]
    fn test_seed_is_stable() {
        let a = GlowAssignment::seeded(42);
        let b = GlowAssignment::seeded(42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_range_index() {
        let assignment = GlowAssignment::seeded(1);
        assert_eq!(assignment.color(CARD_COUNT), None);
        assert_eq!(assignment.class_name(99), None);
    }
}

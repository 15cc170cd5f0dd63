//! Card flip controller, fan layout, and foil hover
//!
//! Flips are single-shot: a card moves `flipping -> flipped` once and stays
//! there; repeated flips of the same card are ignored. The fan layout and
//! foil tilt are pure transform math consumed by the render layer.

use foilpack_paint::{Length, Point, Rect, Transform};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Cards per pack
pub const CARD_COUNT: usize = 5;

/// Hover transition while the pointer is over a card
pub const HOVER_ENTER_TRANSITION_MS: u32 = 150;
/// Hover transition when the pointer leaves a card
pub const HOVER_LEAVE_TRANSITION_MS: u32 = 500;

// Fan layout once the pack has opened
const OPENED_TRANSLATE_X: [f32; CARD_COUNT] = [-280.0, -165.0, -50.0, 65.0, 180.0];
const OPENED_TRANSLATE_Y: [f32; CARD_COUNT] = [5.0, 33.0, 50.0, 30.0, 3.0];
const OPENED_ROTATE: [f32; CARD_COUNT] = [-8.0, -6.0, 0.0, 5.0, 7.0];

/// Transform for a card in the stack (closed) or the fan (opened)
pub fn card_transform(index: usize, opened: bool) -> Transform {
    let index = index.min(CARD_COUNT - 1);
    if opened {
        Transform::new()
            .translate_x(Length::Percent(OPENED_TRANSLATE_X[index]))
            .translate_y(Length::Px(50.0 - OPENED_TRANSLATE_Y[index]))
            .rotate(OPENED_ROTATE[index])
    } else {
        Transform::new()
            .translate_x(Length::Calc {
                percent: -50.0,
                px: index as f32 * 2.0,
            })
            .translate_y(Length::Px(50.0 - index as f32 * 3.0))
            .rotate((index as f32 - 2.0) * 0.5)
    }
}

/// Stacking order: earlier cards render on top
pub fn card_z_index(index: usize) -> i32 {
    50 - index as i32
}

/// Foil hover tilt derived from the pointer position over a card
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FoilTilt {
    /// Degrees around the x axis
    pub rotate_x: f32,
    /// Degrees around the y axis
    pub rotate_y: f32,
}

impl FoilTilt {
    /// Sample the tilt for a pointer (client coordinates) over a card rect.
    /// +/-10 degrees at the card edges, 0 at the center.
    pub fn sample(card_rect: Rect, pointer: Point) -> Self {
        let local = card_rect.to_local(pointer);
        let mid_x = card_rect.width / 2.0;
        let mid_y = card_rect.height / 2.0;
        if mid_x == 0.0 || mid_y == 0.0 {
            return Self::default();
        }
        Self {
            rotate_x: -((local.y - mid_y) / mid_y) * 10.0,
            rotate_y: ((local.x - mid_x) / mid_x) * 10.0,
        }
    }

    /// Foil overlay background position, percent
    pub fn foil_position(&self) -> (f32, f32) {
        (50.0 + self.rotate_y * 5.0, 50.0 + self.rotate_x * 5.0)
    }

    /// Compose the card's base transform with this tilt
    pub fn apply_to(&self, base: Transform) -> Transform {
        base.rotate_x(self.rotate_x).rotate_y(self.rotate_y)
    }
}

/// Tracks which cards are mid-flip and which have landed face up
#[derive(Clone, Debug)]
pub struct CardFlipController {
    flip_duration_ms: u32,
    /// index -> elapsed flip time
    flipping: FxHashMap<usize, f32>,
    flipped: FxHashSet<usize>,
}

impl CardFlipController {
    pub fn new(flip_duration_ms: u32) -> Self {
        Self {
            flip_duration_ms,
            flipping: FxHashMap::default(),
            flipped: FxHashSet::default(),
        }
    }

    /// Start flipping a card. No-op (returns false) for an out-of-range
    /// index or a card already flipping or flipped.
    pub fn flip(&mut self, index: usize) -> bool {
        if index >= CARD_COUNT || self.flipped.contains(&index) || self.flipping.contains_key(&index)
        {
            return false;
        }
        self.flipping.insert(index, 0.0);
        debug!(index, "card flip started");
        true
    }

    /// Flip the lowest-index card not yet flipped or flipping. Returns the
    /// index, or `None` once every card is done.
    pub fn flip_next(&mut self) -> Option<usize> {
        (0..CARD_COUNT).find(|&index| self.flip(index))
    }

    /// Advance flip timers; cards whose animation has elapsed move to the
    /// terminal flipped set.
    pub fn tick(&mut self, dt_ms: f32) {
        let duration = self.flip_duration_ms as f32;
        let mut landed = Vec::new();
        for (index, elapsed) in self.flipping.iter_mut() {
            *elapsed += dt_ms;
            if *elapsed >= duration {
                landed.push(*index);
            }
        }
        for index in landed {
            self.flipping.remove(&index);
            self.flipped.insert(index);
            debug!(index, "card flip landed");
        }
    }

    pub fn is_flipping(&self, index: usize) -> bool {
        self.flipping.contains_key(&index)
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.contains(&index)
    }

    pub fn any_flipping(&self) -> bool {
        !self.flipping.is_empty()
    }

    pub fn flipped_count(&self) -> usize {
        self.flipped.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_is_idempotent() {
        let mut cards = CardFlipController::new(600);
        assert!(cards.flip(2));
        assert!(!cards.flip(2));
        assert!(cards.is_flipping(2));

        cards.tick(600.0);
        assert!(cards.is_flipped(2));
        assert!(!cards.is_flipping(2));

        // Flipping a landed card is still a no-op
        assert!(!cards.flip(2));
        assert_eq!(cards.flipped_count(), 1);
    }

    #[test]
    fn test_flip_next_scans_in_order() {
        let mut cards = CardFlipController::new(600);
        for expected in 0..CARD_COUNT {
            assert_eq!(cards.flip_next(), Some(expected));
            cards.tick(600.0);
        }
        assert_eq!(cards.flip_next(), None);
        assert_eq!(cards.flipped_count(), CARD_COUNT);
    }

    #[test]
    fn test_flip_next_skips_cards_in_flight() {
        let mut cards = CardFlipController::new(600);
        cards.flip(0);
        // Card 0 still mid-flip: next goes to 1
        assert_eq!(cards.flip_next(), Some(1));
    }

    #[test]
    fn test_out_of_range_flip() {
        let mut cards = CardFlipController::new(600);
        assert!(!cards.flip(CARD_COUNT));
        assert!(!cards.any_flipping());
    }

    #[test]
    fn test_timer_accumulates_across_ticks() {
        let mut cards = CardFlipController::new(600);
        cards.flip(1);
        for _ in 0..37 {
            cards.tick(16.0);
        }
        // 592ms elapsed: still flipping
        assert!(cards.is_flipping(1));
        cards.tick(16.0);
        assert!(cards.is_flipped(1));
    }

    #[test]
    fn test_closed_stack_transform() {
        let transform = card_transform(2, false);
        assert_eq!(
            transform.to_string(),
            "translateX(calc(-50% + 4px)) translateY(44px) rotate(0deg)"
        );
    }

    #[test]
    fn test_opened_fan_transform() {
        let transform = card_transform(0, true);
        assert_eq!(
            transform.to_string(),
            "translateX(-280%) translateY(45px) rotate(-8deg)"
        );
    }

    #[test]
    fn test_z_order() {
        assert_eq!(card_z_index(0), 50);
        assert_eq!(card_z_index(4), 46);
    }

    #[test]
    fn test_foil_tilt_center_is_flat() {
        let rect = Rect::new(0.0, 0.0, 200.0, 300.0);
        let tilt = FoilTilt::sample(rect, Point::new(100.0, 150.0));
        assert_eq!(tilt, FoilTilt::default());
        assert_eq!(tilt.foil_position(), (50.0, 50.0));
    }

    #[test]
    fn test_foil_tilt_edges() {
        let rect = Rect::new(0.0, 0.0, 200.0, 300.0);
        // Right edge, top edge
        let tilt = FoilTilt::sample(rect, Point::new(200.0, 0.0));
        assert_eq!(tilt.rotate_y, 10.0);
        assert_eq!(tilt.rotate_x, 10.0);
        assert_eq!(tilt.foil_position(), (100.0, 100.0));
    }

    #[test]
    fn test_degenerate_card_rect() {
        let rect = Rect::new(0.0, 0.0, 0.0, 0.0);
        let tilt = FoilTilt::sample(rect, Point::new(10.0, 10.0));
        assert_eq!(tilt, FoilTilt::default());
    }
}

//! Style synthesis
//!
//! Pure derivations from interaction state to the style parameters the
//! render layer consumes: tear gradient, flap clip path, glow-rays opacity,
//! and tilt-wrapper parameters. Recomputed from state on demand, never
//! cached.

use foilpack_core::tear::{TEAR_MAX, TEAR_MIN};
use foilpack_paint::{
    ClipPath, ClipVertex, Color, Length, LinearGradient, Transform,
};

/// Foil stop colors, darkest last
fn foil_colors() -> [Color; 5] {
    [
        Color::rgb8_alpha(155, 156, 152, 0.5),
        Color::rgb8_alpha(255, 250, 250, 0.6),
        Color::rgb8_alpha(176, 174, 174, 0.5),
        Color::rgb8_alpha(153, 153, 153, 0.6),
        Color::rgb8_alpha(115, 112, 112, 0.7),
    ]
}

/// Gradient of the untorn pack
fn base_gradient() -> LinearGradient {
    let [c0, c1, c2, c3, c4] = foil_colors();
    LinearGradient::new(135.0)
        .stop(50.0, c0)
        .stop(60.0, c1)
        .stop(73.0, c2)
        .stop(88.0, c3)
        .stop(100.0, c4)
}

/// Gradient used while layout geometry is not available yet
fn fallback_gradient() -> LinearGradient {
    LinearGradient::new(135.0)
        .stop_auto(Color::rgb8_alpha(255, 255, 255, 0.7))
        .stop(45.0, Color::rgb8_alpha(243, 243, 243, 0.6))
        .stop(50.0, Color::rgb8_alpha(221, 221, 221, 0.5))
        .stop(50.0, Color::rgb8_alpha(170, 170, 170, 0.4))
        .stop(56.0, Color::rgb8_alpha(187, 187, 187, 0.5))
        .stop(62.0, Color::rgb8_alpha(204, 204, 204, 0.6))
        .stop(80.0, Color::rgb8_alpha(243, 243, 243, 0.6))
        .stop(100.0, Color::rgb8_alpha(255, 255, 255, 0.7))
}

/// Rendered height of the torn flap container
pub fn flap_height(tear_distance: f32) -> f32 {
    (tear_distance - TEAR_MIN).max(TEAR_MIN)
}

/// Tear gradient for the current tear state.
///
/// Below the tear threshold the base gradient applies unchanged; past it
/// the stop offsets track the flap height and the axis follows half the
/// flap rotation.
pub fn tear_gradient(
    progress_x: f32,
    tear_distance: f32,
    rotation_deg: f32,
    layout_ready: bool,
) -> LinearGradient {
    if progress_x <= TEAR_MIN {
        return base_gradient();
    }
    if !layout_ready {
        return fallback_gradient();
    }

    let height = flap_height(tear_distance);
    let start = 100.0 - (height - 16.0) / height * 100.0;
    let angle = 135.0 - rotation_deg * 0.5;

    let [c0, c1, c2, c3, c4] = foil_colors();
    LinearGradient::new(angle)
        .stop(start, c0)
        .stop(start + 10.0, c1)
        .stop(start + 23.0, c2)
        .stop(88.0, c3)
        .stop(100.0, c4)
}

/// Clip path of the torn flap edge; neutral until the drag has started and
/// progress has reached the threshold.
pub fn tear_clip(drag_started: bool, progress_x: f32, rotation_deg: f32) -> ClipPath {
    use Length::{Percent, Px};

    if !drag_started || progress_x < TEAR_MIN {
        return ClipPath::Neutral;
    }
    ClipPath::polygon([
        ClipVertex::new(Px(0.0), Px(TEAR_MIN + rotation_deg * 0.4)),
        ClipVertex::new(Percent(100.0), Percent(0.0)),
        ClipVertex::new(Percent(100.0), Percent(100.0)),
        ClipVertex::new(Percent(0.0), Percent(100.0)),
    ])
}

/// Glow rays fade in linearly with the tear distance
pub fn glow_rays_opacity(tear_distance: f32) -> f32 {
    ((tear_distance - TEAR_MIN) / (TEAR_MAX - TEAR_MIN)).clamp(0.0, 1.0)
}

/// Parameters for the tilt wrapper around the unopened pack
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltParams {
    pub enabled: bool,
    pub max_angle_x: f32,
    pub max_angle_y: f32,
    pub glare_enabled: bool,
    pub scale: f32,
    pub perspective: f32,
    pub transition_ms: u32,
}

/// Tilt locks flat once the drag begins and disables entirely after the
/// pack opens.
pub fn tilt_params(drag_started: bool, pack_opened: bool) -> TiltParams {
    let max_angle = if drag_started { 0.0 } else { 10.0 };
    TiltParams {
        enabled: !pack_opened,
        max_angle_x: max_angle,
        max_angle_y: max_angle,
        glare_enabled: !drag_started,
        scale: if drag_started { 1.0 } else { 1.02 },
        perspective: 1000.0,
        transition_ms: 1000,
    }
}

/// Per-frame style parameters of the pack itself
#[derive(Clone, Debug)]
pub struct PackStyles {
    pub gradient: LinearGradient,
    pub clip_path: ClipPath,
    /// Width of the untorn top flap: `calc(100% - {tear_distance}px)`
    pub top_width: Length,
    pub flap_height: f32,
    pub flap_transform: Transform,
    pub glow_rays_opacity: f32,
    pub tilt: TiltParams,
    pub drag_started: bool,
    pub pack_opened: bool,
}

/// Per-frame style parameters of a single card
#[derive(Clone, Debug)]
pub struct CardStyles {
    pub transform: Transform,
    pub z_index: i32,
    pub glow_class: Option<&'static str>,
    pub flipping: bool,
    pub flipped: bool,
    /// Card has fallen out of the opened pack
    pub fallen: bool,
    /// Flipped cards stop reacting to the pointer
    pub pointer_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_gradient_below_threshold() {
        let gradient = tear_gradient(TEAR_MIN, TEAR_MIN, 0.0, true);
        assert_eq!(gradient.angle, 135.0);
        assert_eq!(gradient.stops.len(), 5);
        assert_eq!(gradient.stops[0].offset, Some(50.0));
        assert_eq!(gradient.stops[4].offset, Some(100.0));
    }

    #[test]
    fn test_fallback_gradient_without_layout() {
        let gradient = tear_gradient(200.0, 240.0, -30.0, false);
        assert_eq!(gradient.stops.len(), 8);
        assert_eq!(gradient.stops[0].offset, None);
    }

    #[test]
    fn test_torn_gradient_tracks_height_and_rotation() {
        let distance = 236.0;
        let gradient = tear_gradient(300.0, distance, -40.0, true);

        // axis: 135 - (-40 * 0.5) = 155
        assert_eq!(gradient.angle, 155.0);

        let height = flap_height(distance); // 200
        let start = 100.0 - (height - 16.0) / height * 100.0; // 8
        assert_eq!(gradient.stops[0].offset, Some(start));
        assert_eq!(gradient.stops[1].offset, Some(start + 10.0));
        assert_eq!(gradient.stops[2].offset, Some(start + 23.0));
        assert_eq!(gradient.stops[3].offset, Some(88.0));
    }

    #[test]
    fn test_flap_height_floors_at_minimum() {
        assert_eq!(flap_height(TEAR_MIN), TEAR_MIN);
        assert_eq!(flap_height(100.0), 64.0);
        assert_eq!(flap_height(473.0), 437.0);
    }

    #[test]
    fn test_clip_neutral_before_drag() {
        assert!(tear_clip(false, 300.0, -20.0).is_neutral());
        assert!(tear_clip(true, 35.0, -20.0).is_neutral());
    }

    #[test]
    fn test_clip_polygon_while_tearing() {
        let clip = tear_clip(true, 300.0, -50.0);
        // top-left vertex: 36 + (-50 * 0.4) = 16
        assert_eq!(
            clip.to_string(),
            "polygon(0px 16px, 100% 0%, 100% 100%, 0% 100%)"
        );
    }

    #[test]
    fn test_glow_rays_opacity_range() {
        assert_eq!(glow_rays_opacity(TEAR_MIN), 0.0);
        assert_eq!(glow_rays_opacity(TEAR_MAX), 1.0);
        let mid = glow_rays_opacity(254.5);
        assert!(mid > 0.49 && mid < 0.51);
        // Clamped outside the tear range
        assert_eq!(glow_rays_opacity(0.0), 0.0);
        assert_eq!(glow_rays_opacity(1000.0), 1.0);
    }

    #[test]
    fn test_tilt_locks_when_dragging() {
        let idle = tilt_params(false, false);
        assert_eq!(idle.max_angle_x, 10.0);
        assert!(idle.glare_enabled);
        assert_eq!(idle.scale, 1.02);
        assert!(idle.enabled);

        let dragging = tilt_params(true, false);
        assert_eq!(dragging.max_angle_x, 0.0);
        assert!(!dragging.glare_enabled);
        assert_eq!(dragging.scale, 1.0);
        assert!(dragging.enabled);

        let opened = tilt_params(true, true);
        assert!(!opened.enabled);
    }
}

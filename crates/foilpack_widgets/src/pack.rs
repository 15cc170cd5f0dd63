//! Pack interaction controller
//!
//! Owns pointer/touch/keyboard input for the pack, derives tear geometry
//! and the flap rotation angle, drives the phase machine and the release
//! reveal, and emits style parameters for the render layer.
//!
//! Lifecycle is construct/tick/dispose: input arrives through
//! [`PackController::handle_event`], frames advance through
//! [`PackController::tick`], and [`PackController::dispose`] cancels any
//! pending frame work. Pointer-move events are coalesced so at most one
//! geometry recomputation happens per frame.

use crate::card::CardFlipController;
use crate::config::PackConfig;
use crate::glow::GlowAssignment;
use crate::style::{self, CardStyles, PackStyles};
use foilpack_animation::{FrameSlot, RevealAnimation, OFF_CARD_POINTER_X};
use foilpack_core::events::{InputEvent, KeyCode, KeyInput, PointerInput};
use foilpack_core::phase::{PackPhase, PhaseEvent, PhaseMachine};
use foilpack_core::tear::{TearSample, TEAR_MAX, TEAR_MIN};
use foilpack_paint::{Length, Point, Rect, Transform};
use tracing::debug;

/// Mutable interaction state of the pack; the tear values hold the
/// `[TEAR_MIN, TEAR_MAX]` clamping invariant at all times.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionState {
    pub is_dragging: bool,
    pub drag_started: bool,
    pub pack_opened: bool,
    /// Pointer position relative to the pack rect
    pub pointer: Point,
    pub tear_distance: f32,
    pub tear_progress_x: f32,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            is_dragging: false,
            drag_started: false,
            pack_opened: false,
            pointer: Point::ZERO,
            tear_distance: TEAR_MIN,
            tear_progress_x: TEAR_MIN,
        }
    }
}

/// Layout geometry reported by the render layer. Absent layout degrades
/// every derived computation to its safe default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackLayout {
    /// Pack bounding rect in client coordinates
    pub pack_rect: Rect,
    /// Top-flap anchor (the top element's top-left corner) relative to the
    /// pack rect
    pub flap_anchor: Point,
}

/// The pack interaction controller
pub struct PackController {
    config: PackConfig,
    phase: PhaseMachine,
    state: InteractionState,
    layout: Option<PackLayout>,
    glow: GlowAssignment,
    cards: CardFlipController,
    reveal: RevealAnimation,
    /// Coalesced pointer-move frame request
    move_frame: FrameSlot,
    /// Reveal rescheduling frame request
    reveal_frame: FrameSlot,
    pending_move: Option<PointerInput>,
    space_held: bool,
}

impl PackController {
    pub fn new(config: PackConfig) -> Self {
        let glow = match config.glow_seed {
            Some(seed) => GlowAssignment::seeded(seed),
            None => GlowAssignment::random(),
        };
        let reveal = RevealAnimation::new(config.reveal_duration_ms);
        let cards = CardFlipController::new(config.flip_duration_ms);
        Self {
            config,
            phase: PhaseMachine::new(),
            state: InteractionState::default(),
            layout: None,
            glow,
            cards,
            reveal,
            move_frame: FrameSlot::new(),
            reveal_frame: FrameSlot::new(),
            pending_move: None,
            space_held: false,
        }
    }

    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn phase(&self) -> PackPhase {
        self.phase.current()
    }

    /// Phase transition history, oldest first
    pub fn phase_history(&self) -> &[(PackPhase, PhaseEvent, PackPhase)] {
        self.phase.history()
    }

    pub fn glow(&self) -> &GlowAssignment {
        &self.glow
    }

    pub fn cards(&self) -> &CardFlipController {
        &self.cards
    }

    /// Render layer reports (or updates) the pack geometry
    pub fn set_layout(&mut self, layout: PackLayout) {
        self.layout = Some(layout);
    }

    pub fn layout(&self) -> Option<PackLayout> {
        self.layout
    }

    /// Ingest one normalized input event
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown(p) => self.on_pointer_down(*p),
            InputEvent::PointerMove(p) => self.on_pointer_move(*p),
            InputEvent::PointerUp(_) => self.on_pointer_up(),
            InputEvent::KeyDown(k) => self.on_key_down(*k),
            InputEvent::KeyUp(k) => self.on_key_up(*k),
        }
    }

    fn on_pointer_down(&mut self, pointer: PointerInput) {
        if self.state.pack_opened {
            return;
        }

        // A fresh drag supersedes a reveal in flight
        if self.reveal.is_running() {
            self.reveal.cancel();
            self.reveal_frame.cancel();
        }

        self.phase.send(PhaseEvent::DragStart);
        self.state.is_dragging = true;
        self.state.drag_started = true;

        if let Some(layout) = self.layout {
            self.state.pointer = layout.pack_rect.to_local(Point::new(pointer.x, pointer.y));
        }
        debug!("pack drag started");
    }

    fn on_pointer_move(&mut self, pointer: PointerInput) {
        if !self.state.is_dragging {
            return;
        }
        // Coalesce: the newest move supersedes whatever was pending
        self.pending_move = Some(pointer);
        self.move_frame.request();
    }

    fn on_pointer_up(&mut self) {
        if !self.state.is_dragging {
            return;
        }
        self.state.is_dragging = false;
        self.move_frame.cancel();
        self.pending_move = None;

        self.phase.send(PhaseEvent::Release);
        self.start_reveal();
    }

    fn on_key_down(&mut self, key: KeyInput) {
        if key.key != KeyCode::SPACE {
            return;
        }
        // One action per physical press: auto-repeat and held keys are
        // ignored until the matching key-up
        if key.repeat || self.space_held {
            return;
        }
        self.space_held = true;

        if self.state.pack_opened {
            if let Some(index) = self.cards.flip_next() {
                debug!(index, "card flipped via keyboard");
            }
        } else if !self.reveal.is_running() {
            self.keyboard_open();
        }
    }

    fn on_key_up(&mut self, key: KeyInput) {
        if key.key == KeyCode::SPACE {
            self.space_held = false;
        }
    }

    /// Space short-circuits the drag: the pack's own bounding rect stands
    /// in as the pointer position, equivalent to a full-drag release.
    fn keyboard_open(&mut self) {
        let synthetic = match self.layout {
            Some(layout) => Point::new(layout.pack_rect.width, layout.pack_rect.height),
            None => Point::new(TEAR_MAX, TEAR_MAX),
        };

        self.state.drag_started = true;
        self.state.is_dragging = false;
        self.move_frame.cancel();
        self.pending_move = None;

        let sample = TearSample::compute(synthetic.x, synthetic.y);
        self.apply_sample(synthetic, sample);

        self.phase.send(PhaseEvent::OpenRequested);
        self.start_reveal();
    }

    fn start_reveal(&mut self) {
        debug!(
            progress = self.state.tear_progress_x,
            distance = self.state.tear_distance,
            "reveal started"
        );
        self.reveal
            .start(self.state.tear_progress_x, self.state.tear_distance);
        self.reveal_frame.request();
    }

    fn apply_move(&mut self, pointer: PointerInput) {
        // Layout not reported yet: degrade to no movement
        let Some(layout) = self.layout else {
            return;
        };
        let local = layout.pack_rect.to_local(Point::new(pointer.x, pointer.y));
        let sample = TearSample::compute(local.x, local.y);
        self.apply_sample(local, sample);
    }

    fn apply_sample(&mut self, pointer: Point, sample: TearSample) {
        self.state.pointer = pointer;
        self.state.tear_progress_x = sample.progress_x;
        self.state.tear_distance = sample.distance;
    }

    /// Advance one frame
    pub fn tick(&mut self, dt_ms: f32) {
        // At most one geometry recomputation per frame
        if self.move_frame.fire() {
            if let Some(pointer) = self.pending_move.take() {
                self.apply_move(pointer);
            }
        }

        if self.reveal_frame.fire() {
            self.reveal.tick(dt_ms);
            let sample = self.reveal.sample();
            self.state.tear_progress_x = sample.progress_x;
            self.state.tear_distance = sample.distance;
            // Force the angle input off the card so the flap reads fully
            // torn for the remainder of the run
            self.state.pointer.x = OFF_CARD_POINTER_X;

            if self.reveal.is_complete() {
                if !self.state.pack_opened {
                    self.state.pack_opened = true;
                    self.phase.send(PhaseEvent::OpenFinished);
                    debug!("pack opened");
                }
            } else {
                self.reveal_frame.request();
            }
        }

        self.cards.tick(dt_ms);
    }

    /// Flip a card by index (pointer click path). Only valid once the pack
    /// has opened; re-flips are idempotent no-ops.
    pub fn flip_card(&mut self, index: usize) -> bool {
        if !self.state.pack_opened {
            return false;
        }
        self.cards.flip(index)
    }

    /// Rotation of the torn flap toward the pointer, degrees in `[-90, 0]`.
    /// Zero before the drag starts or while layout is unavailable.
    pub fn rotation_angle(&self) -> f32 {
        if !self.state.drag_started {
            return 0.0;
        }
        let Some(layout) = self.layout else {
            return 0.0;
        };

        let dx = self.state.pointer.x - layout.flap_anchor.x;
        let dy = self.state.pointer.y - layout.flap_anchor.y;
        let angle = dy.atan2(dx).to_degrees() - 90.0;
        angle.clamp(-90.0, 0.0)
    }

    /// Style parameters for the pack surfaces this frame
    pub fn pack_styles(&self) -> PackStyles {
        let rotation = self.rotation_angle();
        let flap_rotation = if self.state.drag_started { rotation } else { 0.0 };
        PackStyles {
            gradient: style::tear_gradient(
                self.state.tear_progress_x,
                self.state.tear_distance,
                rotation,
                self.layout.is_some(),
            ),
            clip_path: style::tear_clip(
                self.state.drag_started,
                self.state.tear_progress_x,
                rotation,
            ),
            top_width: Length::Calc {
                percent: 100.0,
                px: -self.state.tear_distance,
            },
            flap_height: style::flap_height(self.state.tear_distance),
            flap_transform: Transform::new()
                .translate_x(Length::Percent(-100.0))
                .rotate_z(flap_rotation),
            glow_rays_opacity: style::glow_rays_opacity(self.state.tear_distance),
            tilt: style::tilt_params(self.state.drag_started, self.state.pack_opened),
            drag_started: self.state.drag_started,
            pack_opened: self.state.pack_opened,
        }
    }

    /// Style parameters for one card this frame
    pub fn card_styles(&self, index: usize) -> CardStyles {
        CardStyles {
            transform: crate::card::card_transform(index, self.state.pack_opened),
            z_index: crate::card::card_z_index(index),
            glow_class: self.glow.class_name(index),
            flipping: self.cards.is_flipping(index),
            flipped: self.cards.is_flipped(index),
            fallen: self.state.pack_opened,
            pointer_enabled: !self.cards.is_flipped(index),
        }
    }

    /// Whether another frame tick is needed (pending input, reveal in
    /// flight, or card flips running)
    pub fn needs_frame(&self) -> bool {
        self.move_frame.is_pending() || self.reveal_frame.is_pending() || self.cards.any_flipping()
    }

    /// Cancel all pending frame work. Safe to call repeatedly; terminal
    /// state (an opened pack, landed flips) is preserved.
    pub fn dispose(&mut self) {
        self.move_frame.cancel();
        self.reveal_frame.cancel();
        self.pending_move = None;
        if self.reveal.is_running() {
            self.reveal.cancel();
        }
    }
}

impl Default for PackController {
    fn default() -> Self {
        Self::new(PackConfig::default())
    }
}

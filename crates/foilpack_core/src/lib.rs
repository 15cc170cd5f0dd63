//! Foilpack Core
//!
//! Foundational primitives for the pack-opening interaction:
//!
//! - **Input events**: pointer/touch/keyboard input normalized to a single
//!   event vocabulary, with key-repeat flagging
//! - **Tear geometry**: the pointer-to-tear mapping with its clamping
//!   invariants
//! - **Phase machine**: the `Closed -> Dragging -> Opening -> Opened`
//!   interaction state machine

pub mod events;
pub mod phase;
pub mod tear;

pub use events::{InputEvent, KeyCode, KeyInput, Modifiers, PointerInput, PointerSource};
pub use phase::{PackPhase, PhaseEvent, PhaseMachine};
pub use tear::{TearSample, TEAR_MAX, TEAR_MIN};

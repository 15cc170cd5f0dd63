//! Foilpack Animation System
//!
//! Timed easing animation for the release-to-open reveal plus the frame
//! scheduling primitives the interaction controller uses:
//!
//! - **Easing**: the usual cubic family, applied to normalized progress
//! - **Reveal**: the 400ms ease-out run from the release point to the
//!   fully-torn pack
//! - **Frame slots**: at-most-one pending frame request, superseded by
//!   newer requests (input coalescing, reveal rescheduling)

pub mod easing;
pub mod reveal;
pub mod scheduler;

pub use easing::Easing;
pub use reveal::{RevealAnimation, RevealSample, RevealState, OFF_CARD_POINTER_X};
pub use scheduler::{FrameClock, FrameSlot};

//! Foilpack Widgets
//!
//! The pack interaction controller and its satellites:
//!
//! - **Pack**: drag/keyboard driven tear interaction, reveal scheduling,
//!   derived style parameters for the render layer
//! - **Card**: flip controller, fan layout transforms, foil hover tilt
//! - **Glow**: one-time random glow color assignment
//! - **Config**: asset paths and animation durations, loadable from TOML
//!
//! The render layer consumes [`style::PackStyles`] and [`style::CardStyles`]
//! per frame; nothing in this crate touches presentation directly.

pub mod card;
pub mod config;
pub mod glow;
pub mod pack;
pub mod style;

pub use card::{CardFlipController, FoilTilt, CARD_COUNT};
pub use config::{ConfigError, PackConfig};
pub use glow::{GlowAssignment, GlowColor};
pub use pack::{InteractionState, PackController, PackLayout};
pub use style::{CardStyles, PackStyles, TiltParams};

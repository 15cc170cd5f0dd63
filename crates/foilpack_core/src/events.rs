//! Input event normalization
//!
//! Mouse and touch input collapse into a single pointer vocabulary; the
//! keyboard path carries the platform repeat flag so held keys can be
//! suppressed downstream.

/// Where a pointer sample originated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
}

/// A pointer sample in client coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerInput {
    pub x: f32,
    pub y: f32,
    pub source: PointerSource,
}

impl PointerInput {
    pub fn mouse(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            source: PointerSource::Mouse,
        }
    }

    /// Normalize a touch list to a single pointer; the first touch wins.
    /// Returns `None` for an empty touch list (touch-end with no contacts).
    pub fn from_touches(touches: &[(f32, f32)]) -> Option<Self> {
        touches.first().map(|&(x, y)| Self {
            x,
            y,
            source: PointerSource::Touch,
        })
    }
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);
    pub const UNKNOWN: KeyCode = KeyCode(0);
}

/// Keyboard modifier flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { bits: 0 };
    pub const SHIFT: u8 = 0b0001;
    pub const CTRL: u8 = 0b0010;
    pub const ALT: u8 = 0b0100;
    pub const META: u8 = 0b1000;

    pub const fn new(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0;
        if shift {
            bits |= Self::SHIFT;
        }
        if ctrl {
            bits |= Self::CTRL;
        }
        if alt {
            bits |= Self::ALT;
        }
        if meta {
            bits |= Self::META;
        }
        Self { bits }
    }

    pub const fn shift(&self) -> bool {
        self.bits & Self::SHIFT != 0
    }

    pub const fn ctrl(&self) -> bool {
        self.bits & Self::CTRL != 0
    }

    pub const fn alt(&self) -> bool {
        self.bits & Self::ALT != 0
    }

    pub const fn meta(&self) -> bool {
        self.bits & Self::META != 0
    }

    pub const fn any(&self) -> bool {
        self.bits != 0
    }
}

/// A keyboard event
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KeyInput {
    pub key: KeyCode,
    pub modifiers: Modifiers,
    /// Whether this event was synthesized by key auto-repeat
    pub repeat: bool,
}

impl KeyInput {
    pub fn press(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
            repeat: false,
        }
    }

    pub fn repeat(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
            repeat: true,
        }
    }
}

/// A normalized input event delivered to the pack controller
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown(PointerInput),
    PointerMove(PointerInput),
    PointerUp(PointerInput),
    KeyDown(KeyInput),
    KeyUp(KeyInput),
}

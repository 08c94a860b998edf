use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Frames a body stays highlighted after taking part in a collision.
pub const FLASH_FRAMES: u32 = 5;

/// Stand-in distance used when two centers coincide exactly.
pub const MIN_DISTANCE: f32 = 0.1;

/// Stable handle for a body, assigned at spawn and never reused by a simulation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub u32);

/// 8-bit RGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Presentation-only state consumed by the renderer. Has no physical effect.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualState {
    pub color: Color,
    /// Optional text drawn on the body (ball number on the billiard table).
    pub label: Option<String>,
    /// Frames remaining in the highlight state.
    pub flash: u32,
    pub striped: bool,
}

impl VisualState {
    pub fn plain(color: Color) -> Self {
        Self { color, label: None, flash: 0, striped: false }
    }

    /// Count the highlight down by one frame, saturating at zero.
    pub fn tick_flash(&mut self) {
        self.flash = self.flash.saturating_sub(1);
    }

    pub fn is_flashing(&self) -> bool {
        self.flash > 0
    }
}

/// One simulated circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub position: Vec2,
    /// Displacement per frame.
    pub velocity: Vec2,
    pub radius: f32,
    pub visual: VisualState,
}

impl Body {
    pub fn new(id: BodyId, position: Vec2, velocity: Vec2, radius: f32, color: Color) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self { id, position, velocity, radius, visual: VisualState::plain(color) }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.visual.label = Some(label.into());
        self
    }

    pub fn with_stripe(mut self, striped: bool) -> Self {
        self.visual.striped = striped;
        self
    }

    /// Color the renderer should use this frame.
    pub fn display_color(&self, highlight: Color) -> Color {
        if self.visual.is_flashing() { highlight } else { self.visual.color }
    }
}

/// Fixed rectangular arena with its origin at the top-left corner (+y down).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// How bodies move each frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Integrate velocity and reflect off all four walls.
    #[default]
    Bounce,
    /// Fall straight down and respawn above the top edge after leaving the bottom.
    Fall,
}

/// Outcome of resolving one colliding pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from B into A (zero for coincident centers).
    pub normal: Vec2,
    /// Penetration depth before correction (≥ 0).
    pub depth: f32,
}

/// Contact emitted by a frame step, addressed by body id.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactEvent {
    pub a: BodyId,
    pub b: BodyId,
    pub contact: Contact,
}

/// Counters for the last completed step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub bodies: usize,
    pub spawned: usize,
    pub respawned: usize,
    /// Pairs handed to the narrowphase by the broadphase.
    pub candidate_pairs: usize,
    /// Pairs that actually collided and were resolved.
    pub contacts: usize,
}

/// Timing breakdown for the last step (only filled when timing is enabled).
#[derive(Copy, Clone, Debug, Default)]
pub struct FrameTiming {
    pub step_ms: f64,
    pub motion_ms: f64,
    pub broadphase_ms: f64,
    pub narrowphase_ms: f64,

    pub events_emitted: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        let c = Color::from_hex("#1E90FF").unwrap();
        assert_eq!(c, Color::rgb(0x1E, 0x90, 0xFF));
        assert_eq!(c.to_hex(), "#1E90FF");
        assert_eq!(Color::from_hex("00fa9a"), Some(Color::rgb(0x00, 0xFA, 0x9A)));
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#GG0000").is_none());
    }

    #[test]
    fn test_flash_saturates() {
        let mut v = VisualState::plain(Color::WHITE);
        v.flash = 2;
        v.tick_flash();
        v.tick_flash();
        assert!(!v.is_flashing());
        v.tick_flash();
        assert_eq!(v.flash, 0);
    }

    #[test]
    fn test_display_color_follows_flash() {
        let red = Color::rgb(0xDC, 0x14, 0x3C);
        let mut b = Body::new(BodyId(3), Vec2::ZERO, Vec2::ZERO, 1.0, red).with_label("3");
        assert_eq!(b.display_color(Color::WHITE), red);
        b.visual.flash = 1;
        assert_eq!(b.display_color(Color::WHITE), Color::WHITE);
        assert_eq!(b.visual.label.as_deref(), Some("3"));
    }
}

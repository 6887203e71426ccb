//! Coin Climber - a coin-collecting platformer
//!
//! Core modules:
//! - `sim`: Frame loop (physics, landing, pickups, level generation)
//! - `renderer`: WebGPU rendering pipeline
//! - `backdrop`: Decorative glyph rain behind the game canvas
//! - `audio`: Sample-based sound cues (browser only)
//! - `settings`: Tuning, key bindings and audio preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod backdrop;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{KeyBindings, Settings, Tuning};

/// Game configuration constants
///
/// All values are per display frame: the loop has no fixed timestep, so speeds and
/// accelerations are tuned for whatever cadence `requestAnimationFrame` provides.
pub mod consts {
    /// Player box edge length (pixels)
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Horizontal speed while a move key is held
    pub const PLAYER_SPEED: f32 = 7.0;
    /// Downward acceleration added to dy every frame
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity applied on jump (negative is up)
    pub const JUMP_IMPULSE: f32 = -20.0;

    /// Platforms per level
    pub const PLATFORM_COUNT: usize = 30;
    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 10.0;
    /// Vertical distance between consecutive platforms
    pub const PLATFORM_GAP: f32 = 60.0;

    /// Coins per level
    pub const COIN_COUNT: usize = 15;
    pub const COIN_SIZE: f32 = 10.0;
    /// Coins never spawn in the rightmost strip of this width
    pub const COIN_MARGIN_X: f32 = 20.0;
    /// Coins never spawn in the bottom band of this height
    pub const COIN_MARGIN_BOTTOM: f32 = 200.0;
    /// Coin rotation per frame (radians)
    pub const COIN_SPIN: f32 = 0.1;

    /// Coins to collect before the next level
    pub const COINS_NEEDED: u32 = 10;

    /// Backdrop glyph cell size (pixels)
    pub const GLYPH_SIZE: f32 = 16.0;
}

/// A span that might be negative on a tiny canvas, floored at zero
#[inline]
pub fn non_negative_span(extent: f32, reserved: f32) -> f32 {
    (extent - reserved).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_span() {
        assert_eq!(non_negative_span(800.0, 100.0), 700.0);
        assert_eq!(non_negative_span(50.0, 100.0), 0.0);
    }
}

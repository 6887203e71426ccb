//! Game settings and preferences
//!
//! Read once at startup from LocalStorage. The game itself never writes them back;
//! players edit the stored JSON to rebind keys or retune the physics.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and level layout constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player_size: f32,
    pub player_speed: f32,
    pub gravity: f32,
    pub jump_impulse: f32,

    pub platform_count: usize,
    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_gap: f32,

    pub coin_count: usize,
    pub coin_size: f32,
    pub coin_margin_x: f32,
    pub coin_margin_bottom: f32,
    pub coin_spin: f32,

    pub coins_needed: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            platform_count: PLATFORM_COUNT,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_gap: PLATFORM_GAP,

            coin_count: COIN_COUNT,
            coin_size: COIN_SIZE,
            coin_margin_x: COIN_MARGIN_X,
            coin_margin_bottom: COIN_MARGIN_BOTTOM,
            coin_spin: COIN_SPIN,

            coins_needed: COINS_NEEDED,
        }
    }
}

/// What a bound key does on press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Jump,
    Left,
    Right,
}

/// Key identifiers (as reported by `KeyboardEvent.key`) per action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub jump: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = |ks: &[&str]| -> Vec<String> { ks.iter().map(|k| k.to_string()).collect() };
        Self {
            jump: keys(&["z", "ArrowUp", " "]),
            left: keys(&["q", "ArrowLeft"]),
            right: keys(&["d", "ArrowRight"]),
        }
    }
}

impl KeyBindings {
    /// Resolve a key identifier to its action
    ///
    /// Single letters match case-insensitively so Caps Lock does not break controls.
    pub fn action_for(&self, key: &str) -> Option<KeyAction> {
        let matches = |bound: &[String]| {
            bound.iter().any(|b| {
                b == key || (b.chars().count() == 1 && b.eq_ignore_ascii_case(key))
            })
        };

        if matches(&self.jump) {
            Some(KeyAction::Jump)
        } else if matches(&self.left) {
            Some(KeyAction::Left)
        } else if matches(&self.right) {
            Some(KeyAction::Right)
        } else {
            None
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Physics and layout
    pub tuning: Tuning,
    /// Controls
    pub keys: KeyBindings,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all cues
    pub muted: bool,

    // === Visual ===
    /// Draw the glyph rain behind the game
    pub backdrop: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            keys: KeyBindings::default(),

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            backdrop: true,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "coin_climber_settings";

    /// Parse settings JSON, filling anything missing with defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Effective cue volume (0.0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action_for("z"), Some(KeyAction::Jump));
        assert_eq!(keys.action_for(" "), Some(KeyAction::Jump));
        assert_eq!(keys.action_for("q"), Some(KeyAction::Left));
        assert_eq!(keys.action_for("ArrowRight"), Some(KeyAction::Right));
        assert_eq!(keys.action_for("x"), None);
    }

    #[test]
    fn test_single_letter_bindings_ignore_case() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action_for("Z"), Some(KeyAction::Jump));
        assert_eq!(keys.action_for("D"), Some(KeyAction::Right));
        // Named keys still need an exact match
        assert_eq!(keys.action_for("arrowleft"), None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "muted": true, "tuning": { "gravity": 0.5 } }"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.tuning.gravity, 0.5);
        assert_eq!(settings.tuning.platform_count, PLATFORM_COUNT);
        assert_eq!(settings.keys, KeyBindings::default());
        assert!(settings.backdrop);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.keys.jump = vec!["w".to_string()];
        settings.tuning.coins_needed = 3;

        let json = serde_json::to_string(&settings).unwrap();
        let loaded = Settings::from_json(&json).unwrap();
        assert_eq!(loaded.keys.action_for("w"), Some(KeyAction::Jump));
        assert_eq!(loaded.keys.action_for("z"), None);
        assert_eq!(loaded.tuning, settings.tuning);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_effective_volume() {
        let mut settings = Settings::default();
        assert!((settings.effective_volume() - 0.8).abs() < 1e-6);
        settings.muted = true;
        assert_eq!(settings.effective_volume(), 0.0);
    }
}

//! Sound cue capability
//!
//! The simulation only announces that something audible happened. Whoever owns
//! the world decides what that sounds like, if anything.

use serde::{Deserialize, Serialize};

/// Fire-and-forget sound triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// Player left the ground
    Jump,
    /// Coin collected
    Coin,
    /// Player fell below the canvas
    Fall,
}

impl Cue {
    pub const ALL: [Cue; 3] = [Cue::Jump, Cue::Coin, Cue::Fall];

    /// Asset name of the sample played for this cue
    pub fn asset(&self) -> &'static str {
        match self {
            Cue::Jump => "jump.mp3",
            Cue::Coin => "coin.mp3",
            Cue::Fall => "fall.mp3",
        }
    }
}

/// Something that can play cues. Playback must not block and may silently fail.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Records cues in order (headless runs and tests)
impl CuePlayer for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        self.push(cue);
    }
}

/// Discards every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play(&mut self, _cue: Cue) {}
}

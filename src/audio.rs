//! Audio cues backed by sample files
//!
//! Each cue owns one `<audio>` element loaded from its asset. Playback is
//! fire-and-forget: a missing file or a rejected `play()` is logged at debug level
//! and otherwise ignored.

use std::collections::HashMap;

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::settings::Settings;
use crate::sim::{Cue, CuePlayer};

/// Audio manager for the game
pub struct AudioManager {
    samples: HashMap<Cue, HtmlAudioElement>,
    volume: f32,
}

impl AudioManager {
    /// Load every cue's sample; cues whose element cannot be created stay silent
    pub fn new(settings: &Settings) -> Self {
        let mut samples = HashMap::new();
        for cue in Cue::ALL {
            match HtmlAudioElement::new_with_src(cue.asset()) {
                Ok(el) => {
                    el.set_preload("auto");
                    samples.insert(cue, el);
                }
                Err(e) => log::warn!("Failed to create audio element for {:?}: {:?}", cue, e),
            }
        }

        Self {
            samples,
            volume: settings.effective_volume(),
        }
    }
}

impl CuePlayer for AudioManager {
    fn play(&mut self, cue: Cue) {
        if self.volume <= 0.0 {
            return;
        }
        let Some(el) = self.samples.get(&cue) else { return };

        // Restart so rapid repeats are each heard
        el.set_current_time(0.0);
        el.set_volume(self.volume as f64);

        match el.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("{:?} cue not played: {:?}", cue, e);
                }
            }),
            Err(e) => log::debug!("{:?} cue not played: {:?}", cue, e),
        }
    }
}

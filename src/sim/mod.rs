//! Game simulation module
//!
//! All gameplay logic lives here, with no rendering or platform dependencies:
//! - World state is an explicit value passed into each step
//! - Sound goes through the `CuePlayer` capability
//! - Level layout comes from a seedable RNG so runs can be replayed in tests

pub mod collision;
pub mod cue;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{Aabb, lands_on};
pub use cue::{Cue, CuePlayer, Silent};
pub use level::generate_level;
pub use state::{Coin, Platform, Player, World};
pub use tick::{
    Command, FrameReport, Regeneration, advance_coin_spin, apply_command, step_physics,
    step_pickups, tick,
};

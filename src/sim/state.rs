//! World state and core simulation types
//!
//! Everything the frame loop reads or mutates lives in [`World`]. The controller
//! owns one and hands `&mut World` to each step.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::settings::Tuning;

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// (dx, dy) per frame; positive y is down
    pub vel: Vec2,
    /// Horizontal speed applied by move commands
    pub speed: f32,
    /// Added to dy every frame
    pub gravity: f32,
    /// dy applied by a jump
    pub jump: f32,
    /// Supported by a platform this frame (recomputed every step)
    pub on_ground: bool,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::splat(tuning.player_size),
            vel: Vec2::ZERO,
            speed: tuning.player_speed,
            gravity: tuning.gravity,
            jump: tuning.jump_impulse,
            on_ground: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// y of the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A static platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Platform {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }
}

/// A spinning coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Centre of the coin
    pub pos: Vec2,
    /// Edge length of its square
    pub size: f32,
    /// Visual rotation (radians), no gameplay effect
    pub angle: f32,
}

impl Coin {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            size,
            angle: 0.0,
        }
    }

    /// Pickup box: the unrotated square centred on `pos`
    pub fn bounds(&self) -> Aabb {
        Aabb::centered(self.pos, Vec2::splat(self.size))
    }
}

/// Complete world state for one running game
#[derive(Debug, Clone, Serialize)]
pub struct World {
    /// Canvas dimensions in pixels
    pub bounds: Vec2,
    pub tuning: Tuning,
    pub player: Player,
    /// Stacked bottom to top; the player spawns on the first
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    /// Coins collected since the last regeneration
    pub score: u32,
    /// Current level (1-based, cosmetic)
    pub level: u32,
    /// Score that advances the level
    pub coins_needed: u32,
    /// Frames advanced since startup
    pub frame: u64,
    /// Level layout RNG
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl World {
    /// Create an empty world (no platforms, no coins) with the given RNG seed
    ///
    /// Call [`super::generate_level`] to lay out the first level.
    pub fn new(width: f32, height: f32, tuning: Tuning, seed: u64) -> Self {
        Self {
            bounds: Vec2::new(width, height),
            player: Player::new(&tuning),
            coins_needed: tuning.coins_needed,
            tuning,
            platforms: Vec::new(),
            coins: Vec::new(),
            score: 0,
            level: 1,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.bounds.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bounds.y
    }
}

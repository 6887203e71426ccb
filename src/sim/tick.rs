//! Per-frame simulation step
//!
//! One call to [`tick`] per animation frame, after the frame has been drawn:
//! coins spin, then physics and landing, then pickups and level progression.
//! There is no fixed timestep; every constant is "per frame".

use super::collision::lands_on;
use super::cue::{Cue, CuePlayer};
use super::level::generate_level;
use super::state::World;

/// Player commands produced by key presses and releases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Jump if standing on a platform
    Jump,
    /// Start moving left
    MoveLeft,
    /// Start moving right
    MoveRight,
    /// Stop horizontal movement
    Stop,
}

/// Why a level was regenerated during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regeneration {
    /// Player dropped below the canvas; same level, fresh layout
    FellOut,
    /// Coin quota reached; level advanced
    LevelCleared,
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Coins picked up this frame
    pub coins_collected: u32,
    /// Regenerations this frame, in order
    pub regenerations: Vec<Regeneration>,
}

/// Apply a command between frames
///
/// Commands write velocity directly; the next physics step integrates it. A jump
/// while airborne is ignored.
pub fn apply_command(world: &mut World, command: Command, cues: &mut impl CuePlayer) {
    let player = &mut world.player;
    match command {
        Command::Jump => {
            if player.on_ground {
                player.vel.y = player.jump;
                cues.play(Cue::Jump);
                log::trace!("Jump at ({:.1}, {:.1})", player.pos.x, player.pos.y);
            }
        }
        Command::MoveLeft => player.vel.x = -player.speed,
        Command::MoveRight => player.vel.x = player.speed,
        Command::Stop => player.vel.x = 0.0,
    }
}

/// Advance the world by one frame
pub fn tick(world: &mut World, cues: &mut impl CuePlayer) -> FrameReport {
    let mut report = FrameReport::default();

    world.frame += 1;
    advance_coin_spin(world);

    if let Some(regen) = step_physics(world, cues) {
        report.regenerations.push(regen);
    }

    let (collected, regen) = step_pickups(world, cues);
    report.coins_collected = collected;
    if let Some(regen) = regen {
        report.regenerations.push(regen);
    }

    report
}

/// Rotate every coin by the spin delta (independent of game state)
pub fn advance_coin_spin(world: &mut World) {
    let spin = world.tuning.coin_spin;
    for coin in &mut world.coins {
        coin.angle += spin;
    }
}

/// Gravity, integration, fall-out, horizontal clamp and landing
///
/// On fall-out the level is regenerated in place and the rest of the step runs on
/// the fresh layout, which lands the player on the first platform immediately.
pub fn step_physics(world: &mut World, cues: &mut impl CuePlayer) -> Option<Regeneration> {
    let mut regenerated = None;

    {
        let player = &mut world.player;
        player.vel.y += player.gravity;
        player.pos += player.vel;
    }

    if world.player.bottom() > world.height() {
        cues.play(Cue::Fall);
        log::info!("Fell out on level {}, regenerating", world.level);
        generate_level(world);
        regenerated = Some(Regeneration::FellOut);
    }

    let max_x = (world.width() - world.player.size.x).max(0.0);
    let player = &mut world.player;
    player.pos.x = player.pos.x.clamp(0.0, max_x);

    // Every match overrides the last, and sees the dy/y the previous one left behind
    player.on_ground = false;
    for platform in &world.platforms {
        if lands_on(&player.bounds(), player.vel.y, &platform.bounds()) {
            player.on_ground = true;
            player.vel.y = 0.0;
            player.pos.y = platform.top() - player.size.y;
        }
    }

    regenerated
}

/// Collect overlapping coins and advance the level once the quota is met
///
/// Returns the number of coins collected and whether the level was cleared.
pub fn step_pickups(world: &mut World, cues: &mut impl CuePlayer) -> (u32, Option<Regeneration>) {
    let player_box = world.player.bounds();

    let before = world.coins.len();
    world.coins.retain(|coin| !player_box.overlaps(&coin.bounds()));
    let collected = (before - world.coins.len()) as u32;

    for _ in 0..collected {
        world.score += 1;
        cues.play(Cue::Coin);
    }
    if collected > 0 {
        log::debug!("Collected {} coin(s), score {}/{}", collected, world.score, world.coins_needed);
    }

    if world.score >= world.coins_needed {
        world.level += 1;
        log::info!("Quota met, advancing to level {}", world.level);
        generate_level(world);
        return (collected, Some(Regeneration::LevelCleared));
    }

    (collected, None)
}

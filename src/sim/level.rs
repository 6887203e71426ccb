//! Level generation
//!
//! Platforms are stacked upward from the bottom of the canvas at a fixed gap with a
//! random horizontal offset; coins are scattered over the canvas minus a strip on
//! the right and a band at the bottom. With a tall stack, the upper platforms lie
//! above the visible canvas.

use glam::Vec2;
use rand::Rng;

use super::state::{Coin, Platform, World};
use crate::non_negative_span;

/// Replace platforms and coins, put the player on the first platform, reset score
///
/// Level number is left alone; the caller decides whether this is a new level or a
/// retry of the current one.
pub fn generate_level(world: &mut World) {
    let t = &world.tuning;
    let (width, height) = (world.width(), world.height());

    let platform_size = Vec2::new(t.platform_width, t.platform_height);
    let platform_span = non_negative_span(width, t.platform_width);
    let platforms: Vec<Platform> = (0..t.platform_count)
        .map(|i| {
            let x = world.rng.random::<f32>() * platform_span;
            let y = height - (i + 1) as f32 * t.platform_gap;
            Platform::new(Vec2::new(x, y), platform_size)
        })
        .collect();

    let coin_span = Vec2::new(
        non_negative_span(width, t.coin_margin_x),
        non_negative_span(height, t.coin_margin_bottom),
    );
    let coin_size = t.coin_size;
    let coins: Vec<Coin> = (0..t.coin_count)
        .map(|_| {
            let x = world.rng.random::<f32>() * coin_span.x;
            let y = world.rng.random::<f32>() * coin_span.y;
            Coin::new(Vec2::new(x, y), coin_size)
        })
        .collect();

    world.platforms = platforms;
    world.coins = coins;
    world.score = 0;
    place_player(world);

    log::debug!(
        "Level {} laid out: {} platforms, {} coins",
        world.level,
        world.platforms.len(),
        world.coins.len()
    );
}

/// Centre the player on top of the first platform with zero velocity
fn place_player(world: &mut World) {
    let player = &mut world.player;
    player.vel = Vec2::ZERO;
    player.on_ground = false;

    // Zero platforms only happens with a hand-edited tuning; drop in from the top
    let Some(first) = world.platforms.first() else {
        player.pos = Vec2::new((world.bounds.x - player.size.x).max(0.0) / 2.0, 0.0);
        return;
    };

    player.pos = Vec2::new(
        first.pos.x + first.size.x / 2.0 - player.size.x / 2.0,
        first.top() - player.size.y,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tuning;

    fn fresh(width: f32, height: f32, seed: u64) -> World {
        let mut world = World::new(width, height, Tuning::default(), seed);
        generate_level(&mut world);
        world
    }

    #[test]
    fn test_counts() {
        let world = fresh(800.0, 600.0, 7);
        assert_eq!(world.platforms.len(), 30);
        assert_eq!(world.coins.len(), 15);
    }

    #[test]
    fn test_platforms_are_stacked() {
        let world = fresh(800.0, 600.0, 7);
        for (i, p) in world.platforms.iter().enumerate() {
            assert_eq!(p.pos.y, 600.0 - (i + 1) as f32 * 60.0);
            assert!(p.pos.x >= 0.0 && p.pos.x < 700.0);
            assert_eq!(p.size, Vec2::new(100.0, 10.0));
        }
    }

    #[test]
    fn test_coins_stay_inside_margins() {
        let world = fresh(1024.0, 768.0, 99);
        for c in &world.coins {
            assert!(c.pos.x >= 0.0 && c.pos.x < 1004.0);
            assert!(c.pos.y >= 0.0 && c.pos.y < 568.0);
            assert_eq!(c.angle, 0.0);
        }
    }

    #[test]
    fn test_player_sits_on_first_platform() {
        let world = fresh(800.0, 600.0, 3);
        let first = world.platforms[0];
        let p = &world.player;
        assert_eq!(p.bottom(), first.top());
        let centre_offset = (p.pos.x + p.size.x / 2.0) - (first.pos.x + first.size.x / 2.0);
        assert!(centre_offset.abs() < 1e-3);
        assert_eq!(p.vel, Vec2::ZERO);
        assert!(p.bottom() <= 600.0);
    }

    #[test]
    fn test_resets_score_not_level() {
        let mut world = fresh(800.0, 600.0, 3);
        world.score = 4;
        world.level = 3;
        world.coins.clear();
        generate_level(&mut world);
        assert_eq!(world.score, 0);
        assert_eq!(world.level, 3);
        assert_eq!(world.coins.len(), 15);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = fresh(800.0, 600.0, 42);
        let b = fresh(800.0, 600.0, 42);
        assert_eq!(a.platforms, b.platforms);
        assert_eq!(a.coins, b.coins);
    }

    #[test]
    fn test_tiny_canvas_stays_non_negative() {
        let world = fresh(50.0, 120.0, 5);
        assert!(world.platforms.iter().all(|p| p.pos.x == 0.0));
        assert!(world.coins.iter().all(|c| c.pos.x >= 0.0 && c.pos.y == 0.0));
    }

    #[test]
    fn test_no_platforms_drops_player_from_top() {
        let tuning = Tuning {
            platform_count: 0,
            ..Default::default()
        };
        let mut world = World::new(800.0, 600.0, tuning, 1);
        generate_level(&mut world);
        assert!(world.platforms.is_empty());
        assert_eq!(world.player.pos, Vec2::new(390.0, 0.0));
    }
}

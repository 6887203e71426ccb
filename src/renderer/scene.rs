//! Frame assembly: world state to triangle list
//!
//! Draw order is platforms, then coins, then the player, so later shapes cover
//! earlier ones where they overlap.

use super::shapes::{rect, rotated_square};
use super::vertex::{Vertex, colors};
use crate::sim::World;

/// Build the vertex list for one frame
pub fn build(world: &World) -> Vec<Vertex> {
    let quads = world.platforms.len() + world.coins.len() + 1;
    let mut vertices = Vec::with_capacity(quads * 6);

    for platform in &world.platforms {
        vertices.extend(rect(platform.pos, platform.size, colors::PLATFORM));
    }

    for coin in &world.coins {
        vertices.extend(rotated_square(coin.pos, coin.size, coin.angle, colors::COIN));
    }

    let player = &world.player;
    vertices.extend(rect(player.pos, player.size, colors::PLAYER));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tuning;
    use crate::sim::generate_level;
    use glam::Vec2;

    #[test]
    fn test_draw_order() {
        let mut world = World::new(800.0, 600.0, Tuning::default(), 5);
        generate_level(&mut world);
        world.coins.truncate(2);

        let vs = build(&world);
        assert_eq!(vs.len(), (30 + 2 + 1) * 6);

        // Player comes last
        let last = &vs[vs.len() - 6..];
        let expected = rect(world.player.pos, world.player.size, colors::PLAYER);
        assert_eq!(last, &expected[..]);

        // First quad is the first platform
        let first = rect(world.platforms[0].pos, world.platforms[0].size, colors::PLATFORM);
        assert_eq!(&vs[..6], &first[..]);

        // Coins sit between platforms and the player
        let coin = world.coins[0];
        let coin_quad = &vs[30 * 6..31 * 6];
        for v in coin_quad {
            assert!(Vec2::from(v.position).distance(coin.pos) < coin.size);
        }
    }

    #[test]
    fn test_empty_world_draws_only_player() {
        let world = World::new(800.0, 600.0, Tuning::default(), 5);
        assert_eq!(build(&world).len(), 6);
    }
}

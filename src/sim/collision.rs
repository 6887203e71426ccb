//! Axis-aligned collision tests
//!
//! Everything in the world is a box: the player, platforms, and coins (whose
//! rotation is purely visual). Overlap tests use strict inequalities, so boxes that
//! only share an edge do not touch.

use glam::Vec2;

/// Axis-aligned box given by its top-left corner and size (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Box of `size` centred on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Horizontal extents overlap (strictly)
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.min.x < other.max().x && self.max().x > other.min.x
    }

    /// Vertical extents overlap (strictly)
    #[inline]
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.min.y < other.max().y && self.max().y > other.min.y
    }

    /// Both extents overlap (strictly)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }
}

/// Check whether a falling box lands on a platform this frame
///
/// The box must overlap the platform horizontally, and its bottom edge must lie in
/// `[platform_top, platform_top + platform_height + dy]`. Widening the band by the
/// current vertical speed catches fast falls that would otherwise skip through the
/// platform between two frames. With `dy` strongly negative the band is empty, so
/// rising boxes pass through from below.
pub fn lands_on(body: &Aabb, dy: f32, platform: &Aabb) -> bool {
    let bottom = body.max().y;
    let top = platform.min.y;
    body.overlaps_x(platform) && bottom >= top && bottom <= top + platform.size.y + dy
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Aabb {
        Aabb::new(Vec2::new(100.0, 300.0), Vec2::new(100.0, 10.0))
    }

    fn body_with_bottom(x: f32, bottom: f32) -> Aabb {
        Aabb::new(Vec2::new(x, bottom - 20.0), Vec2::new(20.0, 20.0))
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Aabb::new(Vec2::ZERO, Vec2::splat(10.0));
        let touching = Aabb::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        let inside = Aabb::new(Vec2::new(9.0, 9.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
    }

    #[test]
    fn test_lands_exactly_on_top() {
        assert!(lands_on(&body_with_bottom(120.0, 300.0), 0.0, &platform()));
    }

    #[test]
    fn test_lands_within_platform_thickness() {
        assert!(lands_on(&body_with_bottom(120.0, 308.0), 0.8, &platform()));
    }

    #[test]
    fn test_fast_fall_widens_band() {
        // 25px below the top: outside the 10px slab, inside it once dy=16 is added
        let body = body_with_bottom(120.0, 325.0);
        assert!(!lands_on(&body, 0.0, &platform()));
        assert!(lands_on(&body, 16.0, &platform()));
    }

    #[test]
    fn test_above_platform_misses() {
        assert!(!lands_on(&body_with_bottom(120.0, 299.0), 5.0, &platform()));
    }

    #[test]
    fn test_rising_body_passes_through() {
        // Jumping up through the slab: dy=-19 makes the band empty
        assert!(!lands_on(&body_with_bottom(120.0, 305.0), -19.0, &platform()));
    }

    #[test]
    fn test_horizontal_miss() {
        // Right edge at x=100 only touches the platform's left edge
        assert!(!lands_on(&body_with_bottom(80.0, 300.0), 0.0, &platform()));
        assert!(!lands_on(&body_with_bottom(200.0, 300.0), 0.0, &platform()));
        assert!(lands_on(&body_with_bottom(81.0, 300.0), 0.0, &platform()));
    }
}

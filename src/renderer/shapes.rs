//! Shape generation for 2D primitives
//!
//! Positions are in canvas pixels (origin top-left, y down). Each quad is two
//! triangles, counter-clockwise in pixel space.

use glam::Vec2;

use super::vertex::Vertex;

/// Two triangles covering the quad `a b c d` (corners in order around the edge)
fn quad(a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
        Vertex::new(a.x, a.y, color),
    ]
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let max = min + size;
    quad(
        min,
        Vec2::new(min.x, max.y),
        max,
        Vec2::new(max.x, min.y),
        color,
    )
}

/// Generate vertices for a filled square rotated by `angle` around its centre
pub fn rotated_square(center: Vec2, size: f32, angle: f32, color: [f32; 4]) -> [Vertex; 6] {
    let h = size / 2.0;
    let rot = Vec2::from_angle(angle);
    let corner = |x: f32, y: f32| center + rot.rotate(Vec2::new(x, y));
    quad(
        corner(-h, -h),
        corner(-h, h),
        corner(h, h),
        corner(h, -h),
        color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(vs: &[Vertex]) -> Vec<Vec2> {
        vs.iter().map(|v| Vec2::from(v.position)).collect()
    }

    #[test]
    fn test_rect_corners() {
        let vs = rect(Vec2::new(10.0, 20.0), Vec2::new(100.0, 10.0), [1.0; 4]);
        let ps = positions(&vs);
        assert!(ps.contains(&Vec2::new(10.0, 20.0)));
        assert!(ps.contains(&Vec2::new(110.0, 30.0)));
        assert!(ps.iter().all(|p| p.x >= 10.0 && p.x <= 110.0 && p.y >= 20.0 && p.y <= 30.0));
    }

    #[test]
    fn test_unrotated_square_matches_rect() {
        let square = rotated_square(Vec2::new(50.0, 50.0), 10.0, 0.0, [1.0; 4]);
        let r = rect(Vec2::new(45.0, 45.0), Vec2::splat(10.0), [1.0; 4]);
        for (a, b) in positions(&square).iter().zip(positions(&r)) {
            assert!(a.distance(b) < 1e-4);
        }
    }

    #[test]
    fn test_rotated_square_keeps_centre_and_radius() {
        let center = Vec2::new(50.0, 50.0);
        let vs = rotated_square(center, 10.0, 0.7, [1.0; 4]);
        let half_diagonal = 5.0 * std::f32::consts::SQRT_2;
        for p in positions(&vs) {
            assert!((p.distance(center) - half_diagonal).abs() < 1e-4);
        }
        // A quarter turn maps the square onto itself
        let quarter = rotated_square(center, 10.0, std::f32::consts::FRAC_PI_2, [1.0; 4]);
        let ps = positions(&quarter);
        assert!(ps.iter().any(|p| p.distance(Vec2::new(45.0, 45.0)) < 1e-4));
    }
}

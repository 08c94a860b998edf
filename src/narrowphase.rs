use glam::Vec2;

use crate::api::ContactApi;
use crate::types::*;

/// Circle-circle and point-circle primitives.
pub struct Narrowphase;

impl ContactApi for Narrowphase {
    fn check_collision(a: &Body, b: &Body) -> bool {
        Self::overlap_circle_circle(a.position, a.radius, b.position, b.radius)
    }

    fn resolve_collision(a: &mut Body, b: &mut Body, flash_frames: u32) -> Contact {
        let delta = a.position - b.position;
        let mut dist = delta.length();
        if dist == 0.0 {
            // Coincident centers: delta is zero, so the normal collapses to zero too.
            dist = MIN_DISTANCE;
        }
        let normal = delta / dist; // from B into A

        let depth = (a.radius + b.radius) - dist;
        if depth > 0.0 {
            let half = normal * (depth * 0.5);
            a.position += half;
            b.position -= half;
        }

        // Equal-mass exchange of the normal component; tangential part untouched.
        let along = (a.velocity - b.velocity).dot(normal);
        a.velocity -= normal * along;
        b.velocity += normal * along;

        a.visual.flash = flash_frames;
        b.visual.flash = flash_frames;

        Contact { normal, depth: depth.max(0.0) }
    }

    fn is_clicked(body: &Body, x: f32, y: f32) -> bool {
        Self::overlap_point_circle(Vec2::new(x, y), body.position, body.radius)
    }

    fn overlap_circle_circle(c0: Vec2, r0: f32, c1: Vec2, r1: f32) -> bool {
        let rsum = r0 + r1;
        // Touching circles do not collide.
        (c0 - c1).length_squared() < rsum * rsum
    }

    fn overlap_point_circle(p: Vec2, c: Vec2, r: f32) -> bool {
        (p - c).length_squared() < r * r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: f32, y: f32, vx: f32, vy: f32, r: f32) -> Body {
        Body::new(BodyId(0), Vec2::new(x, y), Vec2::new(vx, vy), r, Color::WHITE)
    }

    // --- Detection --------------------------------------------------------

    #[test]
    fn test_check_collision_overlapping() {
        let a = body(0.0, 0.0, 0.0, 0.0, 1.0);
        let b = body(1.5, 0.0, 0.0, 0.0, 1.0);
        assert!(Narrowphase::check_collision(&a, &b));
        assert!(Narrowphase::check_collision(&b, &a));
    }

    #[test]
    fn test_check_collision_separated() {
        let a = body(0.0, 0.0, 0.0, 0.0, 1.0);
        let b = body(2.1, 0.0, 0.0, 0.0, 1.0);
        assert!(!Narrowphase::check_collision(&a, &b));
    }

    #[test]
    fn test_check_collision_tangent_is_not_a_hit() {
        let a = body(0.0, 0.0, 0.0, 0.0, 25.0);
        let b = body(30.0, 40.0, 0.0, 0.0, 25.0);
        assert!(!Narrowphase::check_collision(&a, &b));
        let c = body(29.0, 40.0, 0.0, 0.0, 25.0);
        assert!(Narrowphase::check_collision(&a, &c));
    }

    #[test]
    fn test_is_clicked_strict() {
        let b = body(10.0, 10.0, 0.0, 0.0, 5.0);
        assert!(Narrowphase::is_clicked(&b, 10.0, 10.0));
        assert!(Narrowphase::is_clicked(&b, 14.9, 10.0));
        assert!(!Narrowphase::is_clicked(&b, 15.0, 10.0));
        assert!(!Narrowphase::is_clicked(&b, 13.0, 14.0));
    }

    // --- Resolution -------------------------------------------------------

    #[test]
    fn test_resolve_separates_isolated_pair() {
        let mut a = body(0.0, 0.0, 0.0, 0.0, 1.0);
        let mut b = body(1.0, 0.5, 0.0, 0.0, 1.5);
        let c = Narrowphase::resolve_collision(&mut a, &mut b, FLASH_FRAMES);
        assert!(c.depth > 0.0);
        let dist = (a.position - b.position).length();
        assert!(dist >= 2.5 - 1e-5);
    }

    #[test]
    fn test_resolve_head_on_exchanges_normal_velocity() {
        let mut a = body(0.0, 0.0, 1.0, 0.0, 20.0);
        let mut b = body(30.0, 0.0, -1.0, 0.0, 20.0);
        let c = Narrowphase::resolve_collision(&mut a, &mut b, FLASH_FRAMES);
        assert!((c.normal.x + 1.0).abs() < 1e-6);
        assert!((c.depth - 10.0).abs() < 1e-5);
        assert!((a.position.x + 5.0).abs() < 1e-5);
        assert!((b.position.x - 35.0).abs() < 1e-5);
        assert!((a.velocity.x + 1.0).abs() < 1e-6);
        assert!((b.velocity.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_resolve_reflects_relative_normal_velocity() {
        let mut a = body(0.0, 0.0, 2.0, 1.0, 1.0);
        let mut b = body(1.2, 0.9, -0.5, 0.25, 1.0);
        let n = (a.position - b.position).normalize();
        let before = (a.velocity - b.velocity).dot(n);
        Narrowphase::resolve_collision(&mut a, &mut b, FLASH_FRAMES);
        let after = (a.velocity - b.velocity).dot(n);
        assert!((after + before).abs() < 1e-5);
    }

    #[test]
    fn test_resolve_keeps_tangential_velocity() {
        let mut a = body(0.0, 0.0, 0.0, 3.0, 1.0);
        let mut b = body(1.0, 0.0, 0.0, -2.0, 1.0);
        Narrowphase::resolve_collision(&mut a, &mut b, FLASH_FRAMES);
        assert!((a.velocity.y - 3.0).abs() < 1e-6);
        assert!((b.velocity.y + 2.0).abs() < 1e-6);
        assert!(a.velocity.x.abs() < 1e-6);
    }

    #[test]
    fn test_resolve_conserves_total_velocity() {
        let mut a = body(0.0, 0.0, 1.5, -0.5, 2.0);
        let mut b = body(2.0, 1.0, -1.0, 0.75, 2.0);
        let total = a.velocity + b.velocity;
        Narrowphase::resolve_collision(&mut a, &mut b, FLASH_FRAMES);
        assert!((a.velocity + b.velocity - total).length() < 1e-5);
    }

    #[test]
    fn test_resolve_coincident_centers_is_finite() {
        let mut a = body(5.0, 5.0, 1.0, 0.0, 1.0);
        let mut b = body(5.0, 5.0, -1.0, 0.0, 1.0);
        let c = Narrowphase::resolve_collision(&mut a, &mut b, FLASH_FRAMES);
        assert_eq!(c.normal, Vec2::ZERO);
        assert!(a.position.is_finite() && b.position.is_finite());
        assert!(a.velocity.is_finite() && b.velocity.is_finite());
        assert_eq!(a.visual.flash, FLASH_FRAMES);
        assert_eq!(b.visual.flash, FLASH_FRAMES);
    }

    #[test]
    fn test_resolve_sets_flash() {
        let mut a = body(0.0, 0.0, 0.0, 0.0, 1.0);
        let mut b = body(1.0, 0.0, 0.0, 0.0, 1.0);
        Narrowphase::resolve_collision(&mut a, &mut b, 7);
        assert_eq!(a.visual.flash, 7);
        assert_eq!(b.visual.flash, 7);
    }
}

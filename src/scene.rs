//! Body generators for the two demos.

use glam::Vec2;
use rand::Rng;

use crate::motion::spawn_x;
use crate::types::{Arena, Body, BodyId, Color};

/// Palette the falling circles draw from.
pub const FALLING_PALETTE: [Color; 10] = [
    Color::rgb(0xFF, 0xD7, 0x00), // gold
    Color::rgb(0xFF, 0x45, 0x00), // orange red
    Color::rgb(0x1E, 0x90, 0xFF), // dodger blue
    Color::rgb(0x32, 0xCD, 0x32), // lime green
    Color::rgb(0x8A, 0x2B, 0xE2), // blue violet
    Color::rgb(0xDC, 0x14, 0x3C), // crimson
    Color::rgb(0xFF, 0x8C, 0x00), // dark orange
    Color::rgb(0x00, 0xCE, 0xD1), // dark turquoise
    Color::rgb(0xFF, 0x14, 0x93), // deep pink
    Color::rgb(0x00, 0xFA, 0x9A), // spring green
];

/// Solid ball colors 1-8; stripes 9-15 reuse 1-7.
pub const POOL_PALETTE: [Color; 8] = [
    Color::rgb(0xFF, 0xD6, 0x00), // yellow
    Color::rgb(0x00, 0x00, 0xB3), // blue
    Color::rgb(0xDB, 0x00, 0x00), // red
    Color::rgb(0x63, 0x00, 0x8C), // purple
    Color::rgb(0xFF, 0x63, 0x00), // orange
    Color::rgb(0x00, 0x78, 0x00), // green
    Color::rgb(0x82, 0x1F, 0x1F), // maroon
    Color::rgb(0x0A, 0x0A, 0x0A), // black
];

pub const FALLING_RADIUS: (f32, f32) = (20.0, 40.0);
pub const FALLING_SPEED: (f32, f32) = (1.0, 3.0);
pub const BILLIARD_RADIUS: (f32, f32) = (15.0, 25.0);
pub const BILLIARD_MAX_SPEED: f32 = 3.0;

fn uniform<R: Rng>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    rng.random::<f32>() * (hi - lo) + lo
}

/// A circle entering from just above the top edge, falling straight down.
pub fn falling_circle<R: Rng>(rng: &mut R, arena: Arena, id: BodyId) -> Body {
    let radius = uniform(rng, FALLING_RADIUS);
    let x = spawn_x(rng, arena.width, radius);
    let color = FALLING_PALETTE[rng.random_range(0..FALLING_PALETTE.len())];
    let speed = uniform(rng, FALLING_SPEED);
    let striped = rng.random_bool(0.5);
    Body::new(id, Vec2::new(x, -radius), Vec2::new(0.0, speed), radius, color).with_stripe(striped)
}

/// Pool ball color and stripe flag for a ball number (1-based).
pub fn pool_ball_look(number: u32) -> (Color, bool) {
    let striped = number >= 9;
    let slot = if striped { number - 9 } else { number.saturating_sub(1) };
    (POOL_PALETTE[slot as usize % POOL_PALETTE.len()], striped)
}

/// `count` numbered balls scattered over the table with random velocities.
/// Ids run from `first_id` upward.
pub fn billiard_rack<R: Rng>(rng: &mut R, arena: Arena, count: usize, first_id: BodyId) -> Vec<Body> {
    (0..count)
        .map(|i| {
            let number = i as u32 + 1;
            let radius = uniform(rng, BILLIARD_RADIUS);
            let position = Vec2::new(
                spawn_x(rng, arena.width, radius),
                spawn_x(rng, arena.height, radius),
            );
            let velocity = Vec2::new(
                uniform(rng, (-BILLIARD_MAX_SPEED, BILLIARD_MAX_SPEED)),
                uniform(rng, (-BILLIARD_MAX_SPEED, BILLIARD_MAX_SPEED)),
            );
            let (color, striped) = pool_ball_look(number);
            Body::new(BodyId(first_id.0 + i as u32), position, velocity, radius, color)
                .with_label(number.to_string())
                .with_stripe(striped)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn falling_circle_ranges() {
        let mut rng = SmallRng::seed_from_u64(3);
        let arena = Arena::new(400.0, 300.0);
        for i in 0..500 {
            let b = falling_circle(&mut rng, arena, BodyId(i));
            assert!(b.radius >= 20.0 && b.radius < 40.0);
            assert_eq!(b.position.y, -b.radius);
            assert!(b.position.x >= b.radius && b.position.x <= arena.width - b.radius);
            assert_eq!(b.velocity.x, 0.0);
            assert!(b.velocity.y >= 1.0 && b.velocity.y < 3.0);
            assert!(FALLING_PALETTE.contains(&b.visual.color));
            assert_eq!(b.visual.flash, 0);
        }
    }

    #[test]
    fn falling_circles_mix_stripes() {
        let mut rng = SmallRng::seed_from_u64(11);
        let arena = Arena::new(400.0, 300.0);
        let striped = (0..200)
            .filter(|&i| falling_circle(&mut rng, arena, BodyId(i)).visual.striped)
            .count();
        assert!(striped > 0 && striped < 200);
    }

    #[test]
    fn billiard_rack_numbers_and_stripes() {
        let mut rng = SmallRng::seed_from_u64(5);
        let arena = Arena::new(1000.0, 500.0);
        let balls = billiard_rack(&mut rng, arena, 15, BodyId(10));
        assert_eq!(balls.len(), 15);
        for (i, b) in balls.iter().enumerate() {
            assert_eq!(b.id, BodyId(10 + i as u32));
            assert_eq!(b.visual.label.as_deref(), Some((i + 1).to_string().as_str()));
            assert_eq!(b.visual.striped, i + 1 >= 9);
            assert!(b.position.x >= b.radius && b.position.x <= arena.width - b.radius);
            assert!(b.position.y >= b.radius && b.position.y <= arena.height - b.radius);
            assert!(b.velocity.x.abs() <= BILLIARD_MAX_SPEED);
        }
    }

    #[test]
    fn stripes_share_solid_colors() {
        assert_eq!(pool_ball_look(9).0, pool_ball_look(1).0);
        assert_eq!(pool_ball_look(15).0, pool_ball_look(7).0);
        assert_eq!(pool_ball_look(8), (POOL_PALETTE[7], false));
    }
}

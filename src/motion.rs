//! One-frame motion integration: wall bounce and fall-through respawn.

use rand::Rng;

use crate::types::{Arena, Body};

/// Move by one frame of velocity, then reflect each axis whose leading edge
/// has crossed the arena bounds.
///
/// No sub-step correction: the body may sit past the wall for a frame before
/// the flipped velocity carries it back.
pub fn advance(body: &mut Body, arena: Arena) {
    body.position += body.velocity;

    let r = body.radius;
    let p = body.position;
    if p.x - r < 0.0 || p.x + r > arena.width {
        body.velocity.x = -body.velocity.x;
    }
    if p.y - r < 0.0 || p.y + r > arena.height {
        body.velocity.y = -body.velocity.y;
    }
}

/// Fall at the body's vertical speed. Returns true when the body left the
/// bottom edge and was respawned just above the top one.
pub fn fall<R: Rng>(body: &mut Body, arena: Arena, rng: &mut R) -> bool {
    body.position.y += body.velocity.y;

    if body.position.y - body.radius > arena.height {
        body.position.y = -body.radius;
        body.position.x = spawn_x(rng, arena.width, body.radius);
        return true;
    }
    false
}

/// Uniform x in `[r, width - r)` so a fresh body starts fully inside the arena.
pub(crate) fn spawn_x<R: Rng>(rng: &mut R, width: f32, r: f32) -> f32 {
    rng.random::<f32>() * (width - r * 2.0) + r
}

use glam::Vec2;
use carom::*;

fn lcg(seed: &mut u32) -> u32 {
    *seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
    *seed
}

fn main() {
    let mut sim = Simulation::new(SimConfig::falling_circles(800.0, 600.0));
    let mut seed = 17u32;

    for frame in 0..600 {
        sim.step();

        // Every 10th frame, click a random spot the way a player would.
        if frame % 10 == 0 {
            let x = (lcg(&mut seed) as f32 / u32::MAX as f32) * 800.0;
            let y = (lcg(&mut seed) as f32 / u32::MAX as f32) * 600.0;
            if let Some(b) = sim.remove_at(Vec2::new(x, y)) {
                println!(
                    "frame {:>3}: removed {:?} at ({:.0},{:.0}) color={} striped={}",
                    frame,
                    b.id,
                    b.position.x,
                    b.position.y,
                    b.visual.color.to_hex(),
                    b.visual.striped
                );
            }
        }
    }

    let s = sim.stats();
    println!(
        "frames={} alive={} removed={} last frame: spawned={} respawned={}",
        sim.frame(),
        sim.bodies().len(),
        sim.removed_count(),
        s.spawned,
        s.respawned
    );
}

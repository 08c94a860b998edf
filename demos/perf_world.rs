use carom::*;

fn main() {
    let n = 2_000usize; // number of bodies
    for broadphase in [Broadphase::AllPairs, Broadphase::Grid { cell_size: 64.0 }] {
        let cfg = SimConfig {
            broadphase,
            enable_timing: true,
            max_events: 1_000_000,
            ..SimConfig::billiard(4000.0, 4000.0)
        };
        let mut sim = Simulation::billiard(cfg, n);

        let mut step_ms = 0.0;
        let frames = 30;
        for _ in 0..frames {
            sim.step();
            sim.drain_events();
            if let Some(t) = sim.timing() {
                step_ms += t.step_ms;
            }
        }
        let s = sim.stats();
        if let Some(t) = sim.timing() {
            println!(
                "N={} {:?} avg step={:.3}ms last: motion={:.3}ms broad={:.3}ms narrow={:.3}ms candidates={} contacts={}",
                n,
                broadphase,
                step_ms / frames as f64,
                t.motion_ms,
                t.broadphase_ms,
                t.narrowphase_ms,
                s.candidate_pairs,
                s.contacts
            );
        }
    }
}

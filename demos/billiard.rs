use carom::*;

fn main() {
    let cfg = SimConfig::billiard(1000.0, 500.0);
    let highlight = cfg.highlight;
    let mut sim = Simulation::billiard(cfg, 15);

    let mut total_contacts = 0usize;
    for _ in 0..300 {
        sim.step();
        for ev in sim.drain_events() {
            total_contacts += 1;
            println!(
                "frame {:>3}: {:?} vs {:?} depth={:.3} n=({:.2},{:.2})",
                sim.frame(),
                ev.a,
                ev.b,
                ev.contact.depth,
                ev.contact.normal.x,
                ev.contact.normal.y
            );
        }
    }

    println!("contacts={}", total_contacts);
    for b in sim.bodies() {
        println!(
            "ball {:>2} pos=({:.1},{:.1}) vel=({:.2},{:.2}) draw={}{}",
            b.visual.label.as_deref().unwrap_or("?"),
            b.position.x,
            b.position.y,
            b.velocity.x,
            b.velocity.y,
            b.display_color(highlight).to_hex(),
            if b.visual.striped { " striped" } else { "" }
        );
    }
}

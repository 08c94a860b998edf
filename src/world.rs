use glam::Vec2;
use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use std::time::Instant;

use crate::api::{ContactApi, SimulationApi};
use crate::config::{ConfigError, SimConfig};
use crate::motion;
use crate::narrowphase::Narrowphase;
use crate::scene;
use crate::types::*;

/// Owned simulation state: the only live collection of bodies.
pub struct Simulation {
    pub cfg: SimConfig,
    frame_counter: u64,
    next_id: u32,
    removed: u64,

    bodies: Vec<Body>,
    rng: SmallRng,

    // Contact buffer, drained by the caller
    events: Vec<ContactEvent>,

    last_stats: FrameStats,
    last_timing: Option<FrameTiming>,
}

impl SimulationApi for Simulation {
    type Config = SimConfig;

    fn new(cfg: SimConfig) -> Self {
        info!(
            "simulation {}x{} motion={:?} collisions={} cap={:?} broadphase={:?}",
            cfg.arena.width,
            cfg.arena.height,
            cfg.motion,
            cfg.resolve_collisions,
            cfg.population_cap,
            cfg.broadphase,
        );
        let rng = SmallRng::seed_from_u64(cfg.seed);
        Self {
            cfg,
            frame_counter: 0,
            next_id: 0,
            removed: 0,
            bodies: Vec::new(),
            rng,
            events: Vec::new(),
            last_stats: FrameStats::default(),
            last_timing: None,
        }
    }

    fn step(&mut self) {
        let t_all = if self.cfg.enable_timing { Some(Instant::now()) } else { None };
        let mut stats = FrameStats { spawned: self.top_up(), ..FrameStats::default() };

        for b in &mut self.bodies {
            b.visual.tick_flash();
        }

        let t_motion = if self.cfg.enable_timing { Some(Instant::now()) } else { None };
        let arena = self.cfg.arena;
        match self.cfg.motion {
            MotionMode::Bounce => {
                for b in &mut self.bodies {
                    motion::advance(b, arena);
                }
            }
            MotionMode::Fall => {
                for b in &mut self.bodies {
                    if motion::fall(b, arena, &mut self.rng) {
                        debug!("body {:?} respawned at x={:.1}", b.id, b.position.x);
                        stats.respawned += 1;
                    }
                }
            }
        }
        let motion_ms = t_motion.map(|t| t.elapsed().as_secs_f64() * 1000.0).unwrap_or(0.0);

        let mut timing = FrameTiming { motion_ms, ..FrameTiming::default() };
        if self.cfg.resolve_collisions {
            self.resolve_contacts(&mut stats, &mut timing);
        }

        stats.bodies = self.bodies.len();
        self.last_stats = stats;
        self.last_timing = t_all.map(|t| FrameTiming { step_ms: t.elapsed().as_secs_f64() * 1000.0, ..timing });
        self.frame_counter += 1;
    }

    fn drain_events(&mut self) -> Vec<ContactEvent> {
        std::mem::take(&mut self.events)
    }

    fn spawn(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        body.id = id;
        debug!("spawn {:?} at ({:.1}, {:.1}) r={:.1}", id, body.position.x, body.position.y, body.radius);
        self.bodies.push(body);
        id
    }

    fn pick(&self, point: Vec2) -> Option<usize> {
        self.bodies
            .iter()
            .position(|b| Narrowphase::is_clicked(b, point.x, point.y))
    }

    fn remove_at(&mut self, point: Vec2) -> Option<Body> {
        let idx = self.pick(point)?;
        // Keep enumeration order for the remaining bodies.
        let body = self.bodies.remove(idx);
        self.removed += 1;
        debug!("removed {:?} (total removed {})", body.id, self.removed);
        Some(body)
    }

    fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    fn arena(&self) -> Arena {
        self.cfg.arena
    }

    fn removed_count(&self) -> u64 {
        self.removed
    }

    fn frame(&self) -> u64 {
        self.frame_counter
    }
}

impl Simulation {
    /// Validate `cfg` before constructing.
    pub fn from_config(cfg: SimConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(<Self as SimulationApi>::new(cfg))
    }

    /// Load a JSON configuration and construct from it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_config(SimConfig::from_json(json)?)
    }

    /// Billiard table with `count` numbered balls.
    pub fn billiard(cfg: SimConfig, count: usize) -> Self {
        let mut sim = <Self as SimulationApi>::new(cfg);
        let rack = scene::billiard_rack(&mut sim.rng, sim.cfg.arena, count, BodyId(sim.next_id));
        for ball in rack {
            sim.spawn(ball);
        }
        sim
    }

    /// Return counters for the last completed step.
    pub fn stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Return timing breakdown for the last `step` run.
    pub fn timing(&self) -> Option<FrameTiming> {
        self.last_timing
    }

    fn top_up(&mut self) -> usize {
        let Some(cap) = self.cfg.population_cap else { return 0 };
        let mut spawned = 0;
        while self.bodies.len() < cap {
            let body = scene::falling_circle(&mut self.rng, self.cfg.arena, BodyId(0));
            self.spawn(body);
            spawned += 1;
        }
        spawned
    }

    fn resolve_contacts(&mut self, stats: &mut FrameStats, timing: &mut FrameTiming) {
        let t_bp = if self.cfg.enable_timing { Some(Instant::now()) } else { None };
        let mut scan = self.cfg.broadphase.scan(&self.bodies);
        timing.broadphase_ms = t_bp.map(|t| t.elapsed().as_secs_f64() * 1000.0).unwrap_or(0.0);

        let t_np = if self.cfg.enable_timing { Some(Instant::now()) } else { None };
        let first_event = self.events.len();
        for i in 0..self.bodies.len() {
            let mut after = i;
            // Partners are re-queried after every resolution so bodies pushed
            // into a new neighbour are still paired with it this frame.
            while let Some(j) = scan.next_partner(i, after) {
                after = j;
                stats.candidate_pairs += 1;
                // i < j, so split at j to borrow both mutably.
                let (head, tail) = self.bodies.split_at_mut(j);
                let (a, b) = (&mut head[i], &mut tail[0]);
                if !Narrowphase::check_collision(a, b) {
                    continue;
                }
                let contact = Narrowphase::resolve_collision(a, b, self.cfg.flash_frames);
                trace!("contact {:?}-{:?} depth={:.3}", a.id, b.id, contact.depth);
                stats.contacts += 1;
                if self.events.len() < self.cfg.max_events {
                    self.events.push(ContactEvent { a: a.id, b: b.id, contact });
                }
                scan.moved(i, a);
                scan.moved(j, b);
            }
        }
        timing.events_emitted = self.events.len() - first_event;
        timing.narrowphase_ms = t_np.map(|t| t.elapsed().as_secs_f64() * 1000.0).unwrap_or(0.0);
    }
}

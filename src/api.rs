use glam::Vec2;

use crate::types::*;

/// Public API contract for the owned simulation state.
pub trait SimulationApi {
    type Config;

    /// Construct a new simulation with the given configuration.
    fn new(cfg: Self::Config) -> Self
    where
        Self: Sized;

    // --- Frame lifecycle ---------------------------------------------------

    /// Run one frame: top up population, decay flashes, move, resolve contacts.
    fn step(&mut self);

    /// Drain and return the contact events accumulated by the last step(s).
    fn drain_events(&mut self) -> Vec<ContactEvent>;

    // --- Population --------------------------------------------------------

    /// Insert a body with a fresh id. The id on `body` is overwritten.
    fn spawn(&mut self, body: Body) -> BodyId;

    /// Index of the first body (in enumeration order) containing the point.
    fn pick(&self, point: Vec2) -> Option<usize>;

    /// Remove the first body containing the point and count the removal.
    fn remove_at(&mut self, point: Vec2) -> Option<Body>;

    // --- Queries -----------------------------------------------------------

    fn bodies(&self) -> &[Body];

    fn body(&self, id: BodyId) -> Option<&Body>;

    fn arena(&self) -> Arena;

    /// Number of bodies removed through `remove_at` so far.
    fn removed_count(&self) -> u64;

    /// Number of completed steps.
    fn frame(&self) -> u64;
}

/// Pairwise primitives used by the frame step and by input hit testing.
pub trait ContactApi {
    /// Strict overlap test: centers closer than the summed radii.
    fn check_collision(a: &Body, b: &Body) -> bool;

    /// Separate the pair and exchange the normal component of their relative velocity.
    fn resolve_collision(a: &mut Body, b: &mut Body, flash_frames: u32) -> Contact;

    /// Strict point-in-circle test.
    fn is_clicked(body: &Body, x: f32, y: f32) -> bool;

    fn overlap_circle_circle(c0: Vec2, r0: f32, c1: Vec2, r1: f32) -> bool;

    fn overlap_point_circle(p: Vec2, c: Vec2, r: f32) -> bool;
}

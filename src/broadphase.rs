use serde::{Deserialize, Serialize};

use std::collections::HashMap;

use crate::types::Body;

/// A body never spans more than about this many grid cells per axis; the
/// configured cell size is widened for large bodies to keep that bound.
pub const MAX_CELLS_PER_BODY: f32 = 4.0;

/// Cell coordinates are clamped to `±MAX_CELL_COORD` so far-away bodies
/// collapse into the border cells instead of saturating the cell loops.
pub const MAX_CELL_COORD: i32 = 1 << 16;

/// Candidate pair generation strategy.
///
/// Both strategies are walked row by row (`i`, then partners `j > i` in
/// increasing order) and see positions as they are corrected during the
/// contact phase, so the narrowphase visits exactly the colliding pairs an
/// all-pairs scan would, in the same order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Broadphase {
    /// Every unordered pair. Fine for the demo populations (≤ 20 bodies).
    #[default]
    AllPairs,
    /// Uniform grid; only bodies sharing a cell become candidates.
    Grid { cell_size: f32 },
}

impl Broadphase {
    /// Build the per-step pair cursor for the current body positions.
    pub fn scan(&self, bodies: &[Body]) -> PairScan {
        match *self {
            Broadphase::AllPairs => PairScan::AllPairs { len: bodies.len() },
            Broadphase::Grid { cell_size } => PairScan::Grid(UniformGrid::build(bodies, cell_size)),
        }
    }
}

/// Row-major pair cursor for one contact phase.
pub enum PairScan {
    AllPairs { len: usize },
    Grid(UniformGrid),
}

impl PairScan {
    /// Smallest candidate partner of `i` strictly greater than `after`.
    pub fn next_partner(&self, i: usize, after: usize) -> Option<usize> {
        match self {
            PairScan::AllPairs { len } => (after + 1 < *len).then_some(after + 1),
            PairScan::Grid(grid) => grid.next_partner(i, after),
        }
    }

    /// Report that `body` (at index `idx`) was moved by a resolution.
    pub fn moved(&mut self, idx: usize, body: &Body) {
        if let PairScan::Grid(grid) = self {
            grid.update(idx, body);
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct CellSpan {
    min: (i32, i32),
    max: (i32, i32),
}

/// Uniform grid over body bounding boxes, kept current as bodies move.
pub struct UniformGrid {
    cs: f32,
    cells: HashMap<(i32, i32), Vec<usize>>,
    spans: Vec<CellSpan>,
}

impl UniformGrid {
    pub fn build(bodies: &[Body], cell_size: f32) -> Self {
        let widest = bodies.iter().map(|b| b.radius * 2.0).fold(0.0, f32::max);
        let cs = cell_size.max(widest / MAX_CELLS_PER_BODY).max(1e-5);
        let mut grid = Self { cs, cells: HashMap::new(), spans: Vec::with_capacity(bodies.len()) };
        for (idx, b) in bodies.iter().enumerate() {
            let span = grid.span_of(b);
            grid.insert(idx, span);
            grid.spans.push(span);
        }
        grid
    }

    /// Cell size actually in use (may exceed the configured one).
    pub fn cell_size(&self) -> f32 {
        self.cs
    }

    pub fn update(&mut self, idx: usize, body: &Body) {
        let span = self.span_of(body);
        let old = self.spans[idx];
        if span == old {
            return;
        }
        self.remove(idx, old);
        self.insert(idx, span);
        self.spans[idx] = span;
    }

    pub fn next_partner(&self, i: usize, after: usize) -> Option<usize> {
        let span = self.spans[i];
        let mut best: Option<usize> = None;
        for iy in span.min.1..=span.max.1 {
            for ix in span.min.0..=span.max.0 {
                let Some(list) = self.cells.get(&(ix, iy)) else { continue };
                for &k in list {
                    if k > after && best.is_none_or(|b| k < b) {
                        best = Some(k);
                    }
                }
            }
        }
        best
    }

    fn span_of(&self, b: &Body) -> CellSpan {
        let cell = |v: f32| ((v / self.cs).floor() as i32).clamp(-MAX_CELL_COORD, MAX_CELL_COORD);
        let (p, r) = (b.position, b.radius);
        CellSpan {
            min: (cell(p.x - r), cell(p.y - r)),
            max: (cell(p.x + r), cell(p.y + r)),
        }
    }

    fn insert(&mut self, idx: usize, span: CellSpan) {
        for iy in span.min.1..=span.max.1 {
            for ix in span.min.0..=span.max.0 {
                self.cells.entry((ix, iy)).or_default().push(idx);
            }
        }
    }

    fn remove(&mut self, idx: usize, span: CellSpan) {
        for iy in span.min.1..=span.max.1 {
            for ix in span.min.0..=span.max.0 {
                if let Some(list) = self.cells.get_mut(&(ix, iy)) {
                    list.retain(|&k| k != idx);
                }
            }
        }
    }
}

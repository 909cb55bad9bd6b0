//! Flood-growth height generator
//!
//! Grows a surface outward from a single random sink. The frontier (agenda)
//! is drained in uniformly random order rather than FIFO/LIFO, which gives the
//! growth front its ragged shape. Each expansion stamps newly reached cells
//! with the current `next_height`, which climbs by a slowly accelerating
//! increment, so heights never decrease along any growth path.

use super::HeightmapGenerator;
use crate::grid::{Grid, HeightSample};
use tracing::{debug, warn};

/// Scale applied to the caller's strength before growth starts
pub const FLOOD_STRENGTH_SCALE: f64 = 0.0005;

/// Added to the per-step height increment after every expansion
pub const FLOOD_STRENGTH_RAMP: f64 = 0.000_000_5;

/// One of the 8 neighbor directions (x grows east, y grows south)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compass {
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
    East,
    NorthEast,
    North,
}

impl Compass {
    /// Exploration order; opposite directions are 4 apart
    pub const ALL: [Compass; 8] = [
        Compass::NorthWest,
        Compass::West,
        Compass::SouthWest,
        Compass::South,
        Compass::SouthEast,
        Compass::East,
        Compass::NorthEast,
        Compass::North,
    ];

    /// `(dx, dy)` step for this direction
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Compass::NorthWest => (-1, -1),
            Compass::West => (-1, 0),
            Compass::SouthWest => (-1, 1),
            Compass::South => (0, 1),
            Compass::SouthEast => (1, 1),
            Compass::East => (1, 0),
            Compass::NorthEast => (1, -1),
            Compass::North => (0, -1),
        }
    }

    pub const fn opposite(self) -> Compass {
        Compass::ALL[(self as usize + 4) & 7]
    }
}

/// Link from a cell toward the cell it was grown from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Neighbor {
    /// Not reached yet
    #[default]
    Unvisited,
    /// The seed cell
    Sink,
    /// Grown from the adjacent cell in this direction
    Toward(Compass),
}

/// Per-cell state of the growth graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlowNode {
    pub height: HeightSample,
    pub neighbor: Neighbor,
}

/// Stamp every unvisited in-bounds neighbor of `(x, y)` and push it on the agenda
///
/// Returns the number of cells added. Neighbors outside the grid are skipped,
/// never wrapped or clamped.
fn enqueue_open_neighbors(
    graph: &mut Grid<FlowNode>,
    agenda: &mut Vec<(usize, usize)>,
    (x, y): (usize, usize),
    next_height: f64,
) -> usize {
    let mut added = 0;
    for direction in Compass::ALL {
        let (dx, dy) = direction.delta();
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            continue;
        };
        if nx >= graph.width() || ny >= graph.height() {
            continue;
        }

        let loc = graph.at(nx, ny);
        if graph[loc].neighbor == Neighbor::Unvisited {
            graph[loc] = FlowNode {
                height: next_height as HeightSample,
                neighbor: Neighbor::Toward(direction.opposite()),
            };
            agenda.push((nx, ny));
            added += 1;
        }
    }
    added
}

impl HeightmapGenerator {
    /// Grow a `width × height` flow graph from a uniformly random sink
    pub fn flood_graph(&mut self, width: usize, height: usize, strength: f64) -> Grid<FlowNode> {
        let sink = (self.rng.index(width), self.rng.index(height));
        self.flood_graph_from(width, height, sink, strength)
    }

    /// Grow a `width × height` flow graph from the given sink cell
    ///
    /// Every cell ends up visited exactly once: 8-connectivity from a single
    /// sink covers the whole grid.
    pub fn flood_graph_from(
        &mut self,
        width: usize,
        height: usize,
        sink: (usize, usize),
        strength: f64,
    ) -> Grid<FlowNode> {
        let mut graph: Grid<FlowNode> = Grid::new(width, height);
        let mut agenda = Vec::new();

        let mut next_height = 0.0;
        let mut step = strength * FLOOD_STRENGTH_SCALE;

        let seed = graph.at(sink.0, sink.1);
        graph[seed] = FlowNode {
            height: 0,
            neighbor: Neighbor::Sink,
        };
        enqueue_open_neighbors(&mut graph, &mut agenda, sink, next_height);

        let mut peak_agenda = agenda.len();
        while !agenda.is_empty() {
            let pick = self.rng.index(agenda.len());
            let current = agenda.swap_remove(pick);
            enqueue_open_neighbors(&mut graph, &mut agenda, current, next_height);
            peak_agenda = peak_agenda.max(agenda.len());

            next_height += step;
            step += FLOOD_STRENGTH_RAMP;
        }

        debug!(
            "Flood growth {}x{} from sink ({}, {}): peak agenda {}, final height {:.1}",
            width, height, sink.0, sink.1, peak_agenda, next_height
        );
        if next_height > f64::from(HeightSample::MAX) {
            warn!(
                "Flood growth height ramp reached {:.0}; heights saturate at {}",
                next_height,
                HeightSample::MAX
            );
        }

        graph
    }

    /// Fill `out` with flood-growth heights
    ///
    /// # Arguments
    ///
    /// * `out` - Grid to fill, any non-empty size
    /// * `strength` - Base height increment (scaled by `FLOOD_STRENGTH_SCALE`)
    pub fn flood_grow(&mut self, out: &mut Grid<HeightSample>, strength: f64) {
        let graph = self.flood_graph(out.width(), out.height(), strength);
        for (dst, node) in out.as_mut_slice().iter_mut().zip(graph.as_slice()) {
            *dst = node.height;
        }
    }
}

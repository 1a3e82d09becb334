//! Maze carving
//!
//! Random walk over the grid that visits every tile exactly once. The walk
//! only ever steps into unvisited tiles and only opens the edge it steps
//! across, so the corridors form a spanning tree: no loops, every tile
//! reachable from every other.

use log::debug;

use crate::rng::GameRng;

use super::direction::{Direction, DirectionPicker};
use super::grid::TileGrid;
use super::tile::{SideState, TileKind};

/// Counters reported by the carver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarveStats {
    /// Corridor edges opened
    pub carved: usize,
    /// Recovery jumps to an already visited tile
    pub jumps: usize,
}

/// Neighbor in `dir` if it exists and has not been visited
fn open_move(grid: &TileGrid, idx: usize, dir: Direction) -> Option<usize> {
    grid.neighbor(idx, dir)
        .filter(|&next| !grid.get(next).kind.is_visited())
}

/// Carve a fully connected maze into an unvisited grid
///
/// `direction_bias` is the percent chance per step of turning before moving.
pub fn carve_maze(grid: &mut TileGrid, direction_bias: u32, rng: &mut GameRng) -> CarveStats {
    let mut stats = CarveStats::default();
    if grid.is_empty() {
        return stats;
    }

    let start = rng.rn2(grid.len() as u32) as usize;
    grid.get_mut(start).kind = TileKind::Corridor;

    let mut visited = Vec::with_capacity(grid.len());
    visited.push(start);
    let mut current = start;

    let mut picker = DirectionPicker::new(rng);
    let (mut dir, _) = picker.next_or_refresh(rng);

    while visited.len() < grid.len() {
        if rng.percent(direction_bias) {
            dir = picker.next_or_refresh(rng).0;
        }

        let next = loop {
            if let Some(next) = open_move(grid, current, dir) {
                break next;
            }
            let (new_dir, refreshed) = picker.next_or_refresh(rng);
            dir = new_dir;
            if refreshed {
                // All four directions failed here; resume from elsewhere.
                current = visited[rng.rn2(visited.len() as u32) as usize];
                stats.jumps += 1;
            }
        };

        grid.get_mut(current).kind = TileKind::Corridor;
        grid.get_mut(next).kind = TileKind::Corridor;
        grid.set_edge(current, dir, SideState::Open);
        stats.carved += 1;

        current = next;
        visited.push(current);
    }

    debug!(
        "carved {} corridors over {} tiles ({} jumps)",
        stats.carved,
        grid.len(),
        stats.jumps
    );
    stats
}

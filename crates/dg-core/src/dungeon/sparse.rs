//! Dead-end pruning
//!
//! Trims leaf corridors back to rock until the requested share of the grid
//! is gone. Each pass collects the current dead ends in scan order, so a
//! tile that becomes a dead end because its leaf was removed is only seen
//! on the next pass.

use log::debug;

use crate::error::GenerateError;

use super::grid::TileGrid;
use super::tile::{SideState, TileKind};

/// Number of tiles to remove for a sparseness percentage, rounded up
pub fn remove_target(tile_count: usize, sparseness: u32) -> usize {
    (tile_count * sparseness as usize).div_ceil(100)
}

/// Remove dead ends until `sparseness` percent of the tiles are `Empty`
///
/// Stops early when no dead ends remain. Returns the number of tiles removed.
pub fn prune_dead_ends(grid: &mut TileGrid, sparseness: u32) -> Result<usize, GenerateError> {
    let target = remove_target(grid.len(), sparseness);
    let mut remaining = target;
    let mut removed = 0;

    while remaining > 0 {
        let mut batch = grid.dead_ends();
        if batch.is_empty() {
            break;
        }
        batch.truncate(remaining);

        let mut processed = 0;
        for idx in batch {
            let tile = grid.get(idx);
            // An earlier removal in this batch may have sealed its last opening.
            if !tile.is_dead_end() {
                continue;
            }
            let dir = tile
                .dead_end_direction()
                .ok_or(GenerateError::DeadEndWithoutOpening {
                    x: tile.x,
                    y: tile.y,
                })?;

            grid.get_mut(idx).kind = TileKind::Empty;
            grid.set_edge(idx, dir, SideState::Wall);
            processed += 1;
        }

        if processed == 0 {
            break;
        }
        remaining = remaining.saturating_sub(processed);
        removed += processed;
    }

    debug!("pruned {removed} of {target} requested tiles");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::direction::Direction;
    use crate::dungeon::maze::carve_maze;
    use crate::rng::GameRng;

    fn carved(width: usize, height: usize, seed: u64) -> TileGrid {
        let mut grid = TileGrid::new(width, height);
        carve_maze(&mut grid, 25, &mut GameRng::new(seed));
        grid
    }

    #[test]
    fn test_remove_target_rounds_up() {
        assert_eq!(remove_target(100, 0), 0);
        assert_eq!(remove_target(100, 70), 70);
        assert_eq!(remove_target(25, 10), 3);
        assert_eq!(remove_target(7, 100), 7);
    }

    #[test]
    fn test_zero_sparseness_is_noop() {
        let mut grid = carved(8, 8, 1);
        let before = grid.clone();
        assert_eq!(prune_dead_ends(&mut grid, 0).unwrap(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_prune_hits_target() {
        for seed in 0..10 {
            let mut grid = carved(10, 10, seed);
            let removed = prune_dead_ends(&mut grid, 60).unwrap();
            assert_eq!(removed, 60);
            assert_eq!(grid.count_kind(TileKind::Empty), 60);
            assert_eq!(grid.count_kind(TileKind::Corridor), 40);
            assert!(grid.edges_consistent());
        }
    }

    #[test]
    fn test_full_sparseness_leaves_one_sealed_tile() {
        for seed in 0..10 {
            let mut grid = carved(6, 5, seed);
            let removed = prune_dead_ends(&mut grid, 100).unwrap();
            assert_eq!(removed, 29);
            assert!(grid.dead_ends().is_empty());

            let survivors: Vec<_> = grid
                .tiles()
                .iter()
                .filter(|t| t.kind == TileKind::Corridor)
                .collect();
            assert_eq!(survivors.len(), 1);
            assert_eq!(survivors[0].walls().count(), 4);
        }
    }

    #[test]
    fn test_empty_tiles_are_sealed() {
        let mut grid = carved(9, 9, 5);
        prune_dead_ends(&mut grid, 50).unwrap();
        for t in grid.tiles().iter().filter(|t| t.kind == TileKind::Empty) {
            for dir in Direction::ALL {
                assert_eq!(t.side(dir), SideState::Wall);
            }
        }
    }

    #[test]
    fn test_two_tile_remnant() {
        let mut grid = TileGrid::new(2, 1);
        grid.get_mut(0).kind = TileKind::Corridor;
        grid.get_mut(1).kind = TileKind::Corridor;
        grid.set_edge(0, Direction::East, SideState::Open);

        let removed = prune_dead_ends(&mut grid, 100).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(grid.get(0).kind, TileKind::Empty);
        assert_eq!(grid.get(1).kind, TileKind::Corridor);
    }
}

//! Tile grid storage and addressing
//!
//! Tiles live in one owned vector indexed by `y * width + x`. Algorithms
//! hold indices, never references, so two neighbors can be updated in turn
//! without aliasing.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::tile::{SideState, Tile, TileKind};

/// Offsets of the 8-connected neighborhood
const NEIGHBORHOOD: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
];

/// Dense width × height grid of tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Create a grid of unvisited, fully walled tiles
    pub fn new(width: usize, height: usize) -> Self {
        let mut tiles = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                tiles.push(Tile::new(x, y));
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Index of `(x, y)`, or `None` outside `[0, width) × [0, height)`
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Tile at `(x, y)`, or `None` when out of bounds
    pub fn tile_at(&self, x: i32, y: i32) -> Option<&Tile> {
        self.index(x, y).map(|idx| &self.tiles[idx])
    }

    /// Tile by index
    pub fn get(&self, idx: usize) -> &Tile {
        &self.tiles[idx]
    }

    /// Mutable tile by index
    pub fn get_mut(&mut self, idx: usize) -> &mut Tile {
        &mut self.tiles[idx]
    }

    /// All tiles in storage order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Indices in scan order: x outer, y inner
    ///
    /// Pruning and room scoring depend on this order for reproducibility.
    pub fn scan_order(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| y * self.width + x))
    }

    /// Index of the neighbor one step in `dir`, if it exists
    pub fn neighbor(&self, idx: usize, dir: Direction) -> Option<usize> {
        let tile = &self.tiles[idx];
        let (dx, dy) = dir.offset();
        self.index(tile.x as i32 + dx, tile.y as i32 + dy)
    }

    /// Indices of the up-to-eight surrounding tiles
    pub fn adjacent(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        let tile = &self.tiles[idx];
        let (x, y) = (tile.x as i32, tile.y as i32);
        NEIGHBORHOOD
            .iter()
            .filter_map(move |&(dx, dy)| self.index(x + dx, y + dy))
    }

    /// Set the edge between `idx` and its neighbor in `dir` on both tiles
    ///
    /// Returns the neighbor index, or `None` (and changes nothing) at the
    /// grid boundary.
    pub fn set_edge(&mut self, idx: usize, dir: Direction, state: SideState) -> Option<usize> {
        let other = self.neighbor(idx, dir)?;
        self.tiles[idx].set_side(dir, state);
        self.tiles[other].set_side(dir.opposite(), state);
        Some(other)
    }

    /// Indices of every current dead end, in scan order
    pub fn dead_ends(&self) -> Vec<usize> {
        self.scan_order()
            .filter(|&idx| self.tiles[idx].is_dead_end())
            .collect()
    }

    /// Number of tiles of the given kind
    pub fn count_kind(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| t.kind == kind).count()
    }

    /// Check that every shared edge is stored identically on both sides
    pub fn edges_consistent(&self) -> bool {
        (0..self.tiles.len()).all(|idx| {
            [Direction::South, Direction::East].into_iter().all(|dir| {
                self.neighbor(idx, dir).is_none_or(|other| {
                    self.tiles[idx].side(dir) == self.tiles[other].side(dir.opposite())
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid() {
        let grid = TileGrid::new(10, 6);
        assert_eq!(grid.len(), 60);
        for x in 0..10 {
            for y in 0..6 {
                let t = grid.tile_at(x, y).unwrap();
                assert_eq!(t.kind, TileKind::Unvisited);
                assert_eq!((t.x, t.y), (x as usize, y as usize));
            }
        }
    }

    #[test]
    fn test_tile_at_out_of_bounds() {
        let grid = TileGrid::new(4, 3);
        assert!(grid.tile_at(-1, 0).is_none());
        assert!(grid.tile_at(0, -1).is_none());
        assert!(grid.tile_at(4, 0).is_none());
        assert!(grid.tile_at(0, 3).is_none());
        assert!(grid.tile_at(3, 2).is_some());
    }

    #[test]
    fn test_scan_order_is_column_major() {
        let grid = TileGrid::new(3, 2);
        let coords: Vec<_> = grid
            .scan_order()
            .map(|idx| (grid.get(idx).x, grid.get(idx).y))
            .collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_adjacent_counts() {
        let grid = TileGrid::new(5, 5);
        let corner = grid.index(0, 0).unwrap();
        let edge = grid.index(2, 0).unwrap();
        let middle = grid.index(2, 2).unwrap();
        assert_eq!(grid.adjacent(corner).count(), 3);
        assert_eq!(grid.adjacent(edge).count(), 5);
        assert_eq!(grid.adjacent(middle).count(), 8);
    }

    #[test]
    fn test_set_edge_mirrors() {
        let mut grid = TileGrid::new(3, 3);
        let center = grid.index(1, 1).unwrap();
        let east = grid.set_edge(center, Direction::East, SideState::Open).unwrap();
        assert_eq!(grid.get(east).x, 2);
        assert_eq!(grid.get(center).east, SideState::Open);
        assert_eq!(grid.get(east).west, SideState::Open);
        assert!(grid.edges_consistent());

        grid.get_mut(center).north = SideState::Open;
        assert!(!grid.edges_consistent());
    }

    #[test]
    fn test_set_edge_at_boundary() {
        let mut grid = TileGrid::new(3, 3);
        let origin = grid.index(0, 0).unwrap();
        assert_eq!(grid.set_edge(origin, Direction::North, SideState::Open), None);
        assert_eq!(grid.get(origin).north, SideState::Wall);
    }

    #[test]
    fn test_dead_ends_in_scan_order() {
        let mut grid = TileGrid::new(3, 1);
        let a = grid.index(0, 0).unwrap();
        let b = grid.index(1, 0).unwrap();
        grid.set_edge(a, Direction::East, SideState::Open);
        grid.set_edge(b, Direction::East, SideState::Open);
        let ends = grid.dead_ends();
        assert_eq!(ends, vec![a, grid.index(2, 0).unwrap()]);
    }
}

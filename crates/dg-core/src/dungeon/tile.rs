//! Logical tile types
//!
//! A tile is one cell of the generator grid. Each of its four sides is a
//! wall, an opening, or a door. A side is really a property of the edge
//! between two tiles; it is stored on both endpoints and `TileGrid` keeps
//! the two copies in step.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::direction::{Direction, Sides};

/// What a tile currently is
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileKind {
    /// Not yet reached by the carver
    #[default]
    Unvisited = 0,
    /// Carved passage outside any room
    Corridor = 1,
    /// Part of a placed room
    Room = 2,
    /// Solid wall
    Wall = 3,
    /// Pruned away to rock
    Empty = 4,
}

impl TileKind {
    /// Check if the tile has been carved at some point
    pub const fn is_visited(&self) -> bool {
        !matches!(self, TileKind::Unvisited)
    }
}

/// State of one side of a tile
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum SideState {
    #[default]
    Wall = 0,
    Open = 1,
    Door = 2,
}

/// One logical grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub x: usize,
    pub y: usize,
    pub north: SideState,
    pub south: SideState,
    pub east: SideState,
    pub west: SideState,
}

impl Tile {
    /// Create an unvisited tile with all four sides walled
    pub const fn new(x: usize, y: usize) -> Self {
        Self {
            kind: TileKind::Unvisited,
            x,
            y,
            north: SideState::Wall,
            south: SideState::Wall,
            east: SideState::Wall,
            west: SideState::Wall,
        }
    }

    /// Get the state of one side
    pub const fn side(&self, dir: Direction) -> SideState {
        match dir {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::West => self.west,
            Direction::East => self.east,
        }
    }

    /// Set the state of one side
    ///
    /// This only touches this tile; use `TileGrid::set_edge` to keep the
    /// neighbor's mirrored side consistent.
    pub fn set_side(&mut self, dir: Direction, state: SideState) {
        match dir {
            Direction::North => self.north = state,
            Direction::South => self.south = state,
            Direction::West => self.west = state,
            Direction::East => self.east = state,
        }
    }

    /// Sides that are walls
    pub fn walls(&self) -> Sides {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.side(dir) == SideState::Wall)
            .fold(Sides::empty(), |acc, dir| acc | dir.side())
    }

    /// A dead end has exactly three walled sides
    pub fn is_dead_end(&self) -> bool {
        self.walls().count() == 3
    }

    /// The one non-wall side of a dead end
    ///
    /// Returns `None` when the tile is not a dead end.
    pub fn dead_end_direction(&self) -> Option<Direction> {
        if !self.is_dead_end() {
            return None;
        }
        (Sides::all() - self.walls()).directions().next()
    }
}

//! Cardinal directions and the shuffle-without-replacement picker
//!
//! The carver keeps walking in one direction until it is told to change,
//! then pulls the next entry of a shuffled permutation. Running a permutation
//! dry forces a reshuffle, which is what produces runs of straight corridor.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::rng::GameRng;

/// Movement direction on the tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    South = 1,
    West = 2,
    East = 3,
}

impl Direction {
    /// All directions in picker order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Grid offset of one step in this direction (north is -y)
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    /// The direction pointing back
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// The side flag for this direction
    pub const fn side(self) -> Sides {
        match self {
            Direction::North => Sides::NORTH,
            Direction::South => Sides::SOUTH,
            Direction::West => Sides::WEST,
            Direction::East => Sides::EAST,
        }
    }
}

bitflags! {
    /// Set of tile sides
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Sides: u8 {
        const NORTH = 0x01;
        const SOUTH = 0x02;
        const WEST = 0x04;
        const EAST = 0x08;
    }
}

impl Sides {
    /// Number of sides in the set
    pub fn count(self) -> u32 {
        self.bits().count_ones()
    }

    /// Directions whose side is in the set, in picker order
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::iter().filter(move |d| self.contains(d.side()))
    }
}

/// A random permutation of the four directions, consumed front to back
///
/// Once exhausted it yields `None`; callers replace it with a fresh picker.
#[derive(Debug, Clone)]
pub struct DirectionPicker {
    order: [Direction; 4],
    cursor: usize,
}

impl DirectionPicker {
    /// Shuffle a fresh permutation
    pub fn new(rng: &mut GameRng) -> Self {
        let mut order = Direction::ALL;
        rng.shuffle(&mut order);
        Self { order, cursor: 0 }
    }

    /// Check whether any direction is left
    pub fn has_next(&self) -> bool {
        self.cursor < self.order.len()
    }

    /// Number of directions not yet handed out
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }

    /// Pop the next direction, reshuffling first if the picker is exhausted
    ///
    /// The flag is true when a reshuffle happened.
    pub fn next_or_refresh(&mut self, rng: &mut GameRng) -> (Direction, bool) {
        if let Some(dir) = self.next() {
            return (dir, false);
        }
        *self = Self::new(rng);
        let dir = self.order[0];
        self.cursor = 1;
        (dir, true)
    }
}

impl Iterator for DirectionPicker {
    type Item = Direction;

    fn next(&mut self) -> Option<Direction> {
        let dir = self.order.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(dir)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

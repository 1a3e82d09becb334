//! Room placement
//!
//! Rooms are stamped over the pruned maze. Every candidate position is
//! scored against the corridors around it and the cheapest one wins:
//! - 3 per covered corridor tile
//! - 100 per covered room tile, so rooms avoid each other
//! - 1 per corridor tile in each covered tile's 8-neighborhood
//!
//! A candidate must start on a corridor and leave at least one tile of
//! margin on its east and south edges.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::rng::GameRng;

use super::grid::TileGrid;
use super::tile::{SideState, TileKind};

/// Score of a covered corridor tile
const CORRIDOR_COST: u32 = 3;
/// Score of a covered room tile
const ROOM_COST: u32 = 100;
/// Score of each corridor neighbor of a covered tile
const NEIGHBOR_COST: u32 = 1;

/// A placed rectangular room, in tile coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Room {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a tile lies inside the room
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Number of tiles covered
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Center tile (rounded toward the origin)
    pub fn center(&self) -> (usize, usize) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// Room size bounds and count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSpec {
    pub count: usize,
    pub min: usize,
    pub max: usize,
}

/// Outcome of room placement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomPlacement {
    pub rooms: Vec<Room>,
    /// Rooms for which no candidate position existed
    pub skipped: usize,
}

/// Score a `width` × `height` room with its top-left tile at `(x, y)`
///
/// Returns `None` for a disqualified position, including any empty or
/// larger-than-grid size.
pub fn score_room(grid: &TileGrid, x: usize, y: usize, width: usize, height: usize) -> Option<u32> {
    // Leave a one-tile margin on the far edges.
    let fits = |start: usize, len: usize, limit: usize| {
        len > 0 && start.checked_add(len).is_some_and(|end| end < limit)
    };
    if !fits(x, width, grid.width()) || !fits(y, height, grid.height()) {
        return None;
    }

    let origin = grid.index(x as i32, y as i32)?;
    if grid.get(origin).kind != TileKind::Corridor {
        return None;
    }

    let mut score = 0;
    for rx in x..x + width {
        for ry in y..y + height {
            let idx = grid.index(rx as i32, ry as i32)?;
            score += match grid.get(idx).kind {
                TileKind::Corridor => CORRIDOR_COST,
                TileKind::Room => ROOM_COST,
                _ => 0,
            };
            score += grid
                .adjacent(idx)
                .filter(|&a| grid.get(a).kind == TileKind::Corridor)
                .count() as u32
                * NEIGHBOR_COST;
        }
    }
    Some(score)
}

/// Cheapest position for a room, first in scan order on ties
pub fn best_position(grid: &TileGrid, width: usize, height: usize) -> Option<(usize, usize)> {
    let mut best: Option<(u32, usize, usize)> = None;
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let Some(score) = score_room(grid, x, y, width, height) else {
                continue;
            };
            if best.is_none_or(|(best_score, _, _)| score < best_score) {
                best = Some((score, x, y));
            }
        }
    }
    best.map(|(_, x, y)| (x, y))
}

/// Mark a room's tiles and open every side that is interior to it
///
/// Sides on the room's own boundary keep whatever state they had.
pub fn stamp_room(grid: &mut TileGrid, room: &Room) {
    if room.area() == 0 {
        return;
    }
    let right = room.x + room.width - 1;
    let bottom = room.y + room.height - 1;
    for x in room.x..=right {
        for y in room.y..=bottom {
            let Some(idx) = grid.index(x as i32, y as i32) else {
                continue;
            };
            let tile = grid.get_mut(idx);
            tile.kind = TileKind::Room;
            if x != room.x {
                tile.west = SideState::Open;
            }
            if y != room.y {
                tile.north = SideState::Open;
            }
            if x < right {
                tile.east = SideState::Open;
            }
            if y < bottom {
                tile.south = SideState::Open;
            }
        }
    }
}

/// Draw one room side in `min..=max`, or `None` if the bounds overflow `u32`
fn draw_side(rng: &mut GameRng, min: usize, max: usize) -> Option<usize> {
    let min = u32::try_from(min).ok()?;
    let max = u32::try_from(max).ok()?;
    usize::try_from(rng.between(min, max)).ok()
}

/// Place up to `spec.count` rooms over the carved grid
///
/// A room with no valid position is skipped, not retried.
pub fn place_rooms(grid: &mut TileGrid, spec: RoomSpec, rng: &mut GameRng) -> RoomPlacement {
    let mut placement = RoomPlacement::default();

    for _ in 0..spec.count {
        let (Some(width), Some(height)) = (
            draw_side(rng, spec.min, spec.max),
            draw_side(rng, spec.min, spec.max),
        ) else {
            debug!("room size bounds {}..={} out of range", spec.min, spec.max);
            placement.skipped += 1;
            continue;
        };

        match best_position(grid, width, height) {
            Some((x, y)) => {
                let room = Room::new(x, y, width, height);
                stamp_room(grid, &room);
                debug!("placed {width}x{height} room at ({x}, {y})");
                placement.rooms.push(room);
            }
            None => {
                debug!("no position for {width}x{height} room");
                placement.skipped += 1;
            }
        }
    }

    placement
}

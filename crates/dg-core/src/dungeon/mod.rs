//! Dungeon system
//!
//! Contains the tile grid, the maze carver, dead-end pruning, room placement
//! and the rendered map.

mod direction;
mod generation;
mod grid;
mod map;
mod maze;
mod room;
mod sparse;
mod tile;

pub use direction::{Direction, DirectionPicker, Sides};
pub use generation::{Dungeon, GenerateOpts, GenerationStats, generate};
pub use grid::TileGrid;
pub use map::Map;
pub use maze::{CarveStats, carve_maze};
pub use room::{Room, RoomPlacement, RoomSpec, best_position, place_rooms, score_room, stamp_room};
pub use sparse::{prune_dead_ends, remove_target};
pub use tile::{SideState, Tile, TileKind};

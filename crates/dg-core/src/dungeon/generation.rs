//! Dungeon generation
//!
//! Pipeline: carve a spanning maze, prune dead ends down to the requested
//! sparseness, stamp rooms over what is left, then render the map.

use log::info;
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DIRECTION_BIAS, DEFAULT_HEIGHT, DEFAULT_ROOM_COUNT, DEFAULT_ROOM_MAX,
    DEFAULT_ROOM_MIN, DEFAULT_SPARSENESS, DEFAULT_WIDTH, MAX_DIMENSION,
};
use crate::error::GenerateError;
use crate::rng::GameRng;

use super::grid::TileGrid;
use super::map::Map;
use super::maze::carve_maze;
use super::room::{Room, RoomSpec, place_rooms};
use super::sparse::prune_dead_ends;
use super::tile::Tile;

/// Options for generating a dungeon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOpts {
    /// Width in tiles
    pub width: usize,
    /// Height in tiles
    pub height: usize,
    /// Percent of tiles to prune back to rock (0-100)
    pub sparseness: u32,
    /// Percent chance per carving step of changing direction (0-100)
    pub direction_bias: u32,
    /// Number of rooms to try to place
    pub room_count: usize,
    /// Smallest room side, inclusive
    pub room_min: usize,
    /// Largest room side, inclusive
    pub room_max: usize,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            sparseness: DEFAULT_SPARSENESS,
            direction_bias: DEFAULT_DIRECTION_BIAS,
            room_count: DEFAULT_ROOM_COUNT,
            room_min: DEFAULT_ROOM_MIN,
            room_max: DEFAULT_ROOM_MAX,
        }
    }
}

impl GenerateOpts {
    /// Reject options the generator cannot run with
    ///
    /// Rooms too large for the grid are allowed; they are simply not placed.
    pub fn validate(&self) -> Result<(), GenerateError> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(GenerateError::invalid(field, "must be at least 1"));
            }
            if value > MAX_DIMENSION {
                return Err(GenerateError::invalid(
                    field,
                    format!("must be at most {MAX_DIMENSION}, got {value}"),
                ));
            }
        }
        if self.sparseness > 100 {
            return Err(GenerateError::invalid(
                "sparseness",
                format!("must be between 0 and 100, got {}", self.sparseness),
            ));
        }
        if self.direction_bias > 100 {
            return Err(GenerateError::invalid(
                "direction_bias",
                format!("must be between 0 and 100, got {}", self.direction_bias),
            ));
        }
        if self.room_min == 0 {
            return Err(GenerateError::invalid("room_min", "must be at least 1"));
        }
        if self.room_max > MAX_DIMENSION {
            return Err(GenerateError::invalid(
                "room_max",
                format!("must be at most {MAX_DIMENSION}, got {}", self.room_max),
            ));
        }
        if self.room_min > self.room_max {
            return Err(GenerateError::invalid(
                "room_min",
                format!(
                    "must not exceed room_max ({} > {})",
                    self.room_min, self.room_max
                ),
            ));
        }
        Ok(())
    }

    fn room_spec(&self) -> RoomSpec {
        RoomSpec {
            count: self.room_count,
            min: self.room_min,
            max: self.room_max,
        }
    }
}

/// What each generation phase did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Corridor edges carved by the maze walk
    pub carved: usize,
    /// Times the walk restarted from a random visited tile
    pub jumps: usize,
    /// Tiles pruned to `Empty`
    pub pruned: usize,
    /// Rooms stamped onto the grid
    pub rooms_placed: usize,
    /// Rooms dropped for lack of a valid position
    pub rooms_skipped: usize,
}

/// A generated floor
///
/// Owns its tile grid, the rooms placed on it and the rendered map. It is
/// never edited after generation; a new floor replaces it wholesale.
#[derive(Debug, Clone)]
pub struct Dungeon {
    grid: TileGrid,
    rooms: Vec<Room>,
    map: Map,
    stats: GenerationStats,
}

/// Generate a dungeon
pub fn generate(opts: &GenerateOpts, rng: &mut GameRng) -> Result<Dungeon, GenerateError> {
    opts.validate()?;

    let mut grid = TileGrid::new(opts.width, opts.height);
    let carve = carve_maze(&mut grid, opts.direction_bias, rng);
    let pruned = prune_dead_ends(&mut grid, opts.sparseness)?;
    let placement = place_rooms(&mut grid, opts.room_spec(), rng);
    let map = Map::render(&grid);

    let stats = GenerationStats {
        carved: carve.carved,
        jumps: carve.jumps,
        pruned,
        rooms_placed: placement.rooms.len(),
        rooms_skipped: placement.skipped,
    };
    info!(
        "generated {}x{} dungeon: {} pruned, {} rooms ({} skipped)",
        opts.width, opts.height, stats.pruned, stats.rooms_placed, stats.rooms_skipped
    );

    Ok(Dungeon {
        grid,
        rooms: placement.rooms,
        map,
        stats,
    })
}

impl Dungeon {
    /// Width in tiles
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Height in tiles
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Logical tile at `(x, y)`, or `None` out of bounds
    pub fn tile_at(&self, x: i32, y: i32) -> Option<&Tile> {
        self.grid.tile_at(x, y)
    }

    /// Every logical tile, row by row
    pub fn tiles(&self) -> &[Tile] {
        self.grid.tiles()
    }

    /// The logical grid
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Placed rooms, in placement order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The room covering logical tile `(x, y)`, if any
    pub fn room_at(&self, x: usize, y: usize) -> Option<&Room> {
        self.rooms.iter().rev().find(|r| r.contains(x, y))
    }

    /// The rendered map
    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn stats(&self) -> GenerationStats {
        self.stats
    }

    /// Check if map cell `(x, y)` can be walked on
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.map.is_walkable(x, y)
    }

    /// Glyph at map cell `(x, y)`, or `None` outside the map
    pub fn glyph_at(&self, x: i32, y: i32) -> Option<char> {
        self.map.glyph_at(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::tile::TileKind;

    fn opts(width: usize, height: usize) -> GenerateOpts {
        GenerateOpts {
            width,
            height,
            ..GenerateOpts::default()
        }
    }

    #[test]
    fn test_default_opts_are_valid() {
        assert!(GenerateOpts::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_options() {
        let cases = [
            (
                GenerateOpts {
                    width: 0,
                    ..opts(5, 5)
                },
                "width",
            ),
            (
                GenerateOpts {
                    height: 0,
                    ..opts(5, 5)
                },
                "height",
            ),
            (
                GenerateOpts {
                    width: MAX_DIMENSION + 1,
                    ..opts(5, 5)
                },
                "width",
            ),
            (
                GenerateOpts {
                    sparseness: 101,
                    ..opts(5, 5)
                },
                "sparseness",
            ),
            (
                GenerateOpts {
                    direction_bias: 150,
                    ..opts(5, 5)
                },
                "direction_bias",
            ),
            (
                GenerateOpts {
                    room_min: 0,
                    ..opts(5, 5)
                },
                "room_min",
            ),
            (
                GenerateOpts {
                    room_min: 6,
                    room_max: 5,
                    ..opts(5, 5)
                },
                "room_min",
            ),
            (
                GenerateOpts {
                    room_max: MAX_DIMENSION + 1,
                    ..opts(5, 5)
                },
                "room_max",
            ),
            (
                GenerateOpts {
                    room_min: usize::MAX,
                    room_max: usize::MAX,
                    ..opts(5, 5)
                },
                "room_max",
            ),
        ];
        for (bad, expected) in cases {
            match bad.validate() {
                Err(GenerateError::InvalidConfiguration { field, .. }) => {
                    assert_eq!(field, expected, "{bad:?}")
                }
                other => panic!("expected {expected} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_generate_rejects_before_work() {
        let mut rng = GameRng::new(42);
        let bad = GenerateOpts {
            room_min: 9,
            room_max: 3,
            ..opts(10, 10)
        };
        assert!(generate(&bad, &mut rng).is_err());
    }

    #[test]
    fn test_generate_defaults() {
        let mut rng = GameRng::new(42);
        let dungeon = generate(&GenerateOpts::default(), &mut rng).unwrap();

        assert_eq!(dungeon.width(), 20);
        assert_eq!(dungeon.height(), 20);
        assert_eq!(dungeon.map().width(), 41);
        assert_eq!(dungeon.map().height(), 41);

        let stats = dungeon.stats();
        assert_eq!(stats.carved, 399);
        assert_eq!(stats.pruned, 280);
        assert_eq!(stats.rooms_placed + stats.rooms_skipped, 4);
        assert_eq!(dungeon.rooms().len(), stats.rooms_placed);
        assert!(dungeon.grid().edges_consistent());
    }

    #[test]
    fn test_room_at() {
        let mut rng = GameRng::new(7);
        let dungeon = generate(&opts(16, 16), &mut rng).unwrap();
        for room in dungeon.rooms() {
            let (cx, cy) = room.center();
            assert!(dungeon.room_at(cx, cy).is_some());
            let tile = dungeon.tile_at(cx as i32, cy as i32).unwrap();
            assert_eq!(tile.kind, TileKind::Room);
        }
        let outside = dungeon
            .tiles()
            .iter()
            .find(|t| t.kind != TileKind::Room);
        if let Some(t) = outside {
            assert!(dungeon.room_at(t.x, t.y).is_none());
        }
    }

    #[test]
    fn test_queries_delegate_to_map() {
        let mut rng = GameRng::new(3);
        let dungeon = generate(&opts(6, 4), &mut rng).unwrap();
        for y in -1..10 {
            for x in -1..14 {
                assert_eq!(dungeon.glyph_at(x, y), dungeon.map().glyph_at(x, y));
                assert_eq!(dungeon.is_walkable(x, y), dungeon.map().is_walkable(x, y));
            }
        }
    }

    #[test]
    fn test_opts_from_partial_json() {
        let opts: GenerateOpts =
            serde_json::from_str(r#"{"width": 30, "room_count": 0}"#).unwrap();
        assert_eq!(opts.width, 30);
        assert_eq!(opts.room_count, 0);
        assert_eq!(opts.height, DEFAULT_HEIGHT);
        assert_eq!(opts.sparseness, DEFAULT_SPARSENESS);
    }
}

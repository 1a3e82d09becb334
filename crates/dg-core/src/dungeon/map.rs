//! Rendered character map
//!
//! Projects the tile grid onto a grid of glyphs at twice the resolution.
//! Tile `(x, y)` lands on cell `(2x + 1, 2y + 1)`; the cells between tile
//! centers show the wall or opening on that side, and the even/even cells
//! are corners.
//!
//! The map is rebuilt whole whenever the grid changes.

use std::fmt;

use crate::consts::{CORRIDOR_SYM, HWALL_SYM, ROCK_SYM, ROOM_SYM, VWALL_SYM};
use crate::rng::GameRng;

use super::grid::TileGrid;
use super::tile::{SideState, TileKind};

/// Doubled-resolution glyph grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    width: usize,
    height: usize,
    data: Vec<char>,
}

impl Map {
    /// Render a tile grid
    pub fn render(grid: &TileGrid) -> Self {
        let width = grid.width() * 2 + 1;
        let height = grid.height() * 2 + 1;
        let mut map = Self {
            width,
            height,
            data: vec![ROCK_SYM; width * height],
        };

        for idx in grid.scan_order() {
            let tile = grid.get(idx);
            let floor = match tile.kind {
                TileKind::Empty => continue,
                TileKind::Room => ROOM_SYM,
                _ => CORRIDOR_SYM,
            };
            let (mx, my) = (tile.x * 2 + 1, tile.y * 2 + 1);

            map.set(mx, my, floor);

            if tile.west == SideState::Wall {
                map.set(mx - 1, my, VWALL_SYM);
                map.set(mx - 1, my - 1, VWALL_SYM);
                map.set(mx - 1, my + 1, VWALL_SYM);
            } else {
                map.set(mx - 1, my, floor);
            }

            if tile.east == SideState::Wall {
                map.set(mx + 1, my, VWALL_SYM);
                map.set(mx + 1, my - 1, VWALL_SYM);
                map.set(mx + 1, my + 1, VWALL_SYM);
            } else {
                map.set(mx + 1, my, floor);
            }

            if tile.north == SideState::Wall {
                map.set(mx, my - 1, HWALL_SYM);
                map.set(mx - 1, my - 1, HWALL_SYM);
                map.set(mx + 1, my - 1, HWALL_SYM);
            } else {
                map.set(mx, my - 1, floor);
            }

            if tile.south == SideState::Wall {
                map.set(mx, my + 1, HWALL_SYM);
                map.set(mx + 1, my + 1, HWALL_SYM);
                map.set(mx - 1, my + 1, HWALL_SYM);
            } else {
                map.set(mx, my + 1, floor);
            }

            // Close the stray corner between two open sides.
            if tile.south == SideState::Open && tile.east == SideState::Open {
                map.set(mx + 1, my + 1, floor);
            }
        }

        map
    }

    fn set(&mut self, x: usize, y: usize, c: char) {
        self.data[y * self.width + x] = c;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Glyph at `(x, y)`, or `None` outside the map
    pub fn glyph_at(&self, x: i32, y: i32) -> Option<char> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Check if an actor can stand at `(x, y)`
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        matches!(self.glyph_at(x, y), Some(CORRIDOR_SYM | ROOM_SYM))
    }

    /// Every walkable cell, row by row
    pub fn walkable_points(&self) -> Vec<(i32, i32)> {
        let mut points = Vec::new();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if self.is_walkable(x, y) {
                    points.push((x, y));
                }
            }
        }
        points
    }

    /// A uniformly chosen walkable cell, for spawning actors
    pub fn random_walkable_point(&self, rng: &mut GameRng) -> Option<(i32, i32)> {
        rng.choose(&self.walkable_points()).copied()
    }

    /// The map as text rows, top to bottom
    pub fn rows(&self) -> Vec<String> {
        self.data
            .chunks(self.width)
            .map(|row| row.iter().collect())
            .collect()
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.width) {
            for &c in row {
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

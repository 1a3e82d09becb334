//! Generator constants
//!
//! Map glyphs and the default option set used by the command-line front end.

/// Solid rock, the initial fill of every rendered cell
pub const ROCK_SYM: char = '#';
/// Wall on a west or east side
pub const VWALL_SYM: char = '|';
/// Wall on a north or south side
pub const HWALL_SYM: char = '-';
/// Corridor floor
pub const CORRIDOR_SYM: char = ' ';
/// Room floor
pub const ROOM_SYM: char = '.';

/// Largest accepted width or height, in tiles
pub const MAX_DIMENSION: usize = 256;

/// Default option values
pub const DEFAULT_WIDTH: usize = 20;
pub const DEFAULT_HEIGHT: usize = 20;
pub const DEFAULT_SPARSENESS: u32 = 70;
pub const DEFAULT_DIRECTION_BIAS: u32 = 20;
pub const DEFAULT_ROOM_COUNT: usize = 4;
pub const DEFAULT_ROOM_MIN: usize = 3;
pub const DEFAULT_ROOM_MAX: usize = 7;

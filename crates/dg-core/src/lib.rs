//! dg-core: Maze-and-rooms dungeon generator
//!
//! Builds a connected grid of corridors with a randomized spanning walk,
//! prunes dead ends to a configurable sparseness, overlays rectangular
//! rooms, and renders the result as a printable glyph map.
//!
//! Generation is synchronous and pure; the random source is passed in
//! explicitly so a floor is reproducible from its seed.
//!
//! ```
//! use dg_core::{GameRng, GenerateOpts, generate};
//!
//! let mut rng = GameRng::new(42);
//! let dungeon = generate(&GenerateOpts::default(), &mut rng).unwrap();
//! assert!(dungeon.map().walkable_points().iter().all(|&(x, y)| dungeon.is_walkable(x, y)));
//! println!("{}", dungeon.map());
//! ```

pub mod consts;
pub mod dungeon;
mod error;
mod rng;

pub use dungeon::{Dungeon, GenerateOpts, GenerationStats, generate};
pub use error::GenerateError;
pub use rng::GameRng;

//! Shaded top-down map renderer.
//!
//! A grid of ASCII tiles goes through four stages:
//! 1. `classify` expands tiles into solid/floor pixels and seeds surface angles
//! 2. `corners` patches angles where four tiles meet
//! 3. `flood` measures distances across the solid/floor boundary, in parallel
//! 4. `shade` composites wall ramps, shadow and light into RGBA pixels

pub mod classify;
pub mod config;
pub mod corners;
pub mod error;
pub mod flood;
pub mod grid;
pub mod render;
pub mod shade;
pub mod tiles;


// Re-export public API
pub use classify::{Classified, classify};
pub use config::{MapSource, RenderConfig, Setting};
pub use corners::fill_corners;
pub use error::RenderError;
pub use flood::{DistanceField, FloodAlgorithm, FloodPair, QueueFlood, Reach, Sources, flood_pair};
pub use grid::{AngleField, PixelGrid, PixelMask, UNSET_ANGLE};
pub use render::{render_map, save_png};
pub use shade::{Raster, shade};
pub use tiles::{Neighbors, Tile, TileGrid};

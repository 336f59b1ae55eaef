//! Render settings and the map file they are read from.

pub mod parse;

pub use parse::{MapSource, Setting};

use std::path::PathBuf;

/// Everything that shapes a render. Immutable while a render runs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Pixels per tile edge
    pub tile_size: usize,
    /// Width of the shaded wall ramp in pixels, split across both sides of the boundary
    pub wall_size: usize,
    /// Grey level at the top of the wall ramp
    pub wall_top: u8,
    /// Grey level at the foot of the wall ramp
    pub wall_bottom: u8,
    /// Weakest shadow alpha, used deep inside solid regions
    pub shadow: u8,
    /// Extra alpha added to `shadow` right behind the wall face
    pub shadow_depth: u8,
    /// Falloff in tiles: the extra alpha halves this many tiles behind the face
    pub shadow_width: f64,
    /// Largest brightness change the light can cause
    pub light: u8,
    /// Direction of the light in degrees
    pub light_angle: i16,
    /// Where the image is written (must end in .png)
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_size: 50,
            wall_size: 6,
            wall_top: 160,
            wall_bottom: 135,
            shadow: 50,
            shadow_depth: 65,
            shadow_width: 0.2,
            light: 15,
            light_angle: 10,
            output: PathBuf::new(),
        }
    }
}

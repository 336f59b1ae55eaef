//! Stage 4: turn occupancy and the two floods into RGBA pixels.
//!
//! Solid pixels near the floor get a greyscale wall ramp, deeper solid
//! pixels become translucent shadow. Floor pixels next to a wall get the
//! lower half of the ramp, the rest of the floor stays opaque background.
//! Both ramps are lit by a single directional light.

use rayon::prelude::*;

use crate::config::RenderConfig;
use crate::flood::{FloodPair, Reach};
use crate::grid::PixelMask;

const OPAQUE: u8 = 255;

/// RGBA8 pixel buffer, row-major, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl Raster {
    /// A fully transparent black raster.
    pub fn new(width: usize, height: usize) -> Self {
        Raster {
            width,
            height,
            pixels: vec![0; width * height * 4],
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.width + x) * 4;
        let px = self.pixels.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Clamp an intermediate value into a byte.
#[inline]
pub fn to_byte(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Shading constants derived once from the config.
struct Shader {
    wall_size: f64,
    half_wall: usize,
    half_lip: usize,
    wall_top: i32,
    wall_bottom: i32,
    shadow: u8,
    shadow_depth: f64,
    falloff_scale: f64,
    light: f64,
    light_angle: i32,
}

impl Shader {
    fn new(config: &RenderConfig) -> Self {
        Shader {
            wall_size: config.wall_size as f64,
            half_wall: config.wall_size / 2,
            half_lip: (config.wall_size + 1) / 2,
            wall_top: i32::from(config.wall_top),
            wall_bottom: i32::from(config.wall_bottom),
            shadow: config.shadow,
            shadow_depth: f64::from(config.shadow_depth),
            falloff_scale: config.tile_size as f64 * config.shadow_width,
            light: f64::from(config.light),
            light_angle: i32::from(config.light_angle),
        }
    }

    /// Signed brightness added by the light for a surface facing `angle`.
    fn boost(&self, angle: u16) -> i32 {
        let delta = (self.light_angle + 360 - i32::from(angle)).rem_euclid(360);
        (self.light * f64::from(delta).to_radians().cos()) as i32
    }

    fn ramp(&self, scale: f64) -> i32 {
        (f64::from(self.wall_top - self.wall_bottom) * scale) as i32
    }

    fn solid(&self, reach: Reach) -> [u8; 4] {
        let depth = usize::from(reach.dist.saturating_sub(1));
        if depth < self.half_wall {
            let scale = (self.wall_size / 2.0 - depth as f64) / (self.wall_size + 1.0);
            let grey = to_byte(self.wall_bottom + self.ramp(scale) + self.boost(reach.angle));
            [grey, grey, grey, OPAQUE]
        } else {
            let inside = (depth - self.half_wall) as f64;
            let falloff = inside / self.falloff_scale + 1.0;
            let extra = (self.shadow_depth / falloff) as u8;
            [0, 0, 0, self.shadow.saturating_add(extra)]
        }
    }

    fn floor(&self, reach: Reach) -> [u8; 4] {
        let gap = usize::from(reach.dist.saturating_sub(1));
        if gap < self.half_lip {
            let scale = ((self.wall_size + 1.0) / 2.0 - gap as f64) / (self.wall_size + 1.0);
            let grey = to_byte(self.wall_top - self.ramp(scale) + self.boost(reach.angle));
            [grey, grey, grey, OPAQUE]
        } else {
            [0, 0, 0, OPAQUE]
        }
    }
}

/// Composite every pixel. Rows are independent and shaded in parallel.
pub fn shade(mask: &PixelMask, floods: &FloodPair, config: &RenderConfig) -> Raster {
    let mut raster = Raster::new(mask.width, mask.height);
    if raster.pixels.is_empty() {
        return raster;
    }
    let shader = Shader::new(config);
    let width = mask.width;

    raster
        .pixels
        .par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let solid = mask.get_or(x, y, false);
                let rgba = if solid {
                    floods.wall_depth.get(x, y).map(|&r| shader.solid(r))
                } else {
                    floods.floor_depth.get(x, y).map(|&r| shader.floor(r))
                };
                if let Some(rgba) = rgba {
                    px.copy_from_slice(&rgba);
                }
            }
        });

    raster
}

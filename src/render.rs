//! Full render pipeline and PNG output.

use std::path::Path;
use std::time::Instant;

use image::RgbaImage;

use crate::classify::classify;
use crate::config::RenderConfig;
use crate::corners::fill_corners;
use crate::error::RenderError;
use crate::flood::{QueueFlood, flood_pair};
use crate::shade::{Raster, shade};
use crate::tiles::TileGrid;

/// Render a tile grid into an RGBA raster of `cols * tile_size` by
/// `rows * tile_size` pixels.
pub fn render_map(grid: &TileGrid, config: &RenderConfig) -> Result<Raster, RenderError> {
    if config.tile_size == 0 {
        return Err(RenderError::ZeroTileSize);
    }
    let tile_size = config.tile_size;
    let start = Instant::now();

    let mut classified = classify(grid, tile_size);
    log::debug!("classified {}x{} tiles in {:?}", grid.cols(), grid.rows(), start.elapsed());

    fill_corners(&mut classified.angles, grid.cols(), grid.rows(), tile_size);

    let flood_start = Instant::now();
    let floods = flood_pair(&classified.mask, &classified.angles, &QueueFlood::default());
    log::debug!("flooded in {:?}", flood_start.elapsed());

    let raster = shade(&classified.mask, &floods, config);
    log::info!(
        "rendered {}x{} pixel map in {:?}",
        raster.width,
        raster.height,
        start.elapsed()
    );
    Ok(raster)
}

/// Encode a raster as PNG at `path`.
pub fn save_png(raster: &Raster, path: &Path) -> Result<(), RenderError> {
    let is_png = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if !is_png {
        return Err(RenderError::UnsupportedOutput(path.to_path_buf()));
    }
    if raster.pixels.is_empty() {
        return Err(RenderError::EmptyRaster {
            width: raster.width,
            height: raster.height,
        });
    }

    let oversized = || RenderError::OversizedRaster {
        width: raster.width,
        height: raster.height,
    };
    let width = u32::try_from(raster.width).map_err(|_| oversized())?;
    let height = u32::try_from(raster.height).map_err(|_| oversized())?;
    let img = RgbaImage::from_raw(width, height, raster.pixels.clone()).ok_or_else(oversized)?;

    img.save(path)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_tile_size_rejected() {
        let config = RenderConfig {
            tile_size: 0,
            ..RenderConfig::default()
        };
        let grid = TileGrid::from_lines(&["#"]);
        assert!(matches!(render_map(&grid, &config), Err(RenderError::ZeroTileSize)));
    }

    #[test]
    fn test_save_requires_png() {
        let raster = Raster::new(1, 1);
        let err = save_png(&raster, Path::new("map.jpg")).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedOutput(_)));
        let err = save_png(&raster, Path::new("")).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedOutput(_)));
    }

    #[test]
    fn test_save_refuses_empty_raster() {
        let raster = Raster::new(0, 0);
        let err = save_png(&raster, Path::new("empty.png")).unwrap_err();
        assert!(matches!(err, RenderError::EmptyRaster { .. }));
    }
}

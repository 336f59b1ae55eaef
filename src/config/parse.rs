//! Reads the `Key: value` settings and the tile map from one text file.
//!
//! Any line with a colon is a setting, every other line belongs to the map.
//! Unknown keys and unparsable values are reported and skipped, so a typo
//! never stops a render.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::RenderConfig;
use crate::error::RenderError;
use crate::tiles::TileGrid;

/// The recognised setting keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    TileSize,
    WallSize,
    WallTop,
    WallBottom,
    Shadow,
    ShadowDepth,
    ShadowWidth,
    Light,
    LightAngle,
    Output,
}

impl Setting {
    pub const ALL: [Setting; 10] = [
        Setting::TileSize,
        Setting::WallSize,
        Setting::WallTop,
        Setting::WallBottom,
        Setting::Shadow,
        Setting::ShadowDepth,
        Setting::ShadowWidth,
        Setting::Light,
        Setting::LightAngle,
        Setting::Output,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Setting::TileSize => "TileSize",
            Setting::WallSize => "WallSize",
            Setting::WallTop => "WallTop",
            Setting::WallBottom => "WallBottom",
            Setting::Shadow => "Shadow",
            Setting::ShadowDepth => "ShadowDepth",
            Setting::ShadowWidth => "ShadowWidth",
            Setting::Light => "Light",
            Setting::LightAngle => "LightAngle",
            Setting::Output => "Output",
        }
    }

    /// Parse `value` and store it in the matching field.
    pub fn apply(self, config: &mut RenderConfig, value: &str) -> Result<(), String> {
        fn parsed<T: FromStr>(value: &str) -> Result<T, String>
        where
            T::Err: fmt::Display,
        {
            value.parse().map_err(|e: T::Err| e.to_string())
        }

        match self {
            Setting::TileSize => config.tile_size = parsed(value)?,
            Setting::WallSize => config.wall_size = parsed(value)?,
            Setting::WallTop => config.wall_top = parsed(value)?,
            Setting::WallBottom => config.wall_bottom = parsed(value)?,
            Setting::Shadow => config.shadow = parsed(value)?,
            Setting::ShadowDepth => config.shadow_depth = parsed(value)?,
            Setting::ShadowWidth => config.shadow_width = parsed(value)?,
            Setting::Light => config.light = parsed(value)?,
            Setting::LightAngle => config.light_angle = parsed(value)?,
            Setting::Output => config.output = PathBuf::from(value),
        }
        Ok(())
    }
}

impl FromStr for Setting {
    type Err = String;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Setting::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .ok_or_else(|| format!("{key} is not a valid option"))
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A parsed map file: settings plus the normalized tile grid.
#[derive(Debug, Clone)]
pub struct MapSource {
    pub config: RenderConfig,
    pub grid: TileGrid,
}

impl MapSource {
    pub fn read(path: &Path) -> Result<Self, RenderError> {
        let text = fs::read_to_string(path).map_err(|source| RenderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    pub fn parse(text: &str) -> Self {
        let mut config = RenderConfig::default();
        let mut map_lines = Vec::new();

        for (line_no, line) in text.lines().enumerate() {
            let Some((key, value)) = line.split_once(':') else {
                map_lines.push(line);
                continue;
            };
            let key = key.trim();
            let setting = match key.parse::<Setting>() {
                Ok(setting) => setting,
                Err(e) => {
                    log::warn!("line {}: {}", line_no + 1, e);
                    continue;
                }
            };
            if let Err(e) = setting.apply(&mut config, value.trim()) {
                log::warn!("line {}: bad value for {}: {}", line_no + 1, setting, e);
            }
        }

        log::debug!("parsed settings: {:?}", config);
        MapSource {
            config,
            grid: TileGrid::from_lines(&map_lines),
        }
    }
}

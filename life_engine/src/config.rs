// config.rs - Engine configuration
//
// Everything the engine needs to size its grids and draw them. Missing
// fields in a config file fall back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};
use crate::grid::GridShape;
use crate::render::{Palette, TileLayout};

/// Largest cycle-detection window a config may ask for.
pub const MAX_HISTORY_LEN: usize = 1024;

/// Master configuration for a simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Rows and columns of the cell grid
    pub grid: GridShape,

    /// Tile size and inset in surface pixels
    pub tiles: TileLayout,

    pub palette: Palette,

    /// Pixel surface the host allocates
    pub surface: SurfaceConfig,

    /// Slots in the grid arena. Must hold the grid and its scratch copy.
    pub arena_capacity: usize,

    /// Generations remembered for cycle detection
    pub history_len: usize,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid: GridShape::default(),
            tiles: TileLayout::default(),
            palette: Palette::default(),
            surface: SurfaceConfig::default(),
            arena_capacity: 64 * 1024,
            history_len: 10,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
        }
    }
}

impl LifeConfig {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.grid.is_empty() {
            return Err(LifeError::InvalidConfig(format!(
                "grid must have at least one cell, got {}x{}",
                self.grid.rows, self.grid.columns
            )));
        }
        if self.tiles.side_pixels <= 0 || self.tiles.pad < 0 || self.tiles.pad >= self.tiles.side_pixels - self.tiles.pad {
            return Err(LifeError::InvalidConfig(format!(
                "tile side {} with pad {} leaves no content",
                self.tiles.side_pixels, self.tiles.pad
            )));
        }
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(LifeError::InvalidConfig("surface must not be empty".to_string()));
        }
        for (name, color) in self.palette.colors() {
            if !color.is_normalized() {
                return Err(LifeError::InvalidConfig(format!(
                    "palette color {name} has a channel outside [0, 1]: {color:?}"
                )));
            }
        }
        if self.history_len > MAX_HISTORY_LEN {
            return Err(LifeError::InvalidConfig(format!(
                "history length {} exceeds {MAX_HISTORY_LEN}",
                self.history_len
            )));
        }

        // Tile edges are computed in i32 surface coordinates.
        let span = |cells: usize| i32::try_from(cells).ok().and_then(|cells| cells.checked_mul(self.tiles.side_pixels));
        if span(self.grid.rows).is_none() || span(self.grid.columns).is_none() {
            return Err(LifeError::InvalidConfig(format!(
                "{}x{} tiles of {} pixels overflow surface coordinates",
                self.grid.rows, self.grid.columns, self.tiles.side_pixels
            )));
        }

        // The grid and its scratch copy share the arena.
        let needed = self.grid.rows.checked_mul(self.grid.columns).and_then(|cells| cells.checked_mul(2));
        if needed.is_none_or(|needed| needed > self.arena_capacity) {
            return Err(LifeError::InvalidConfig(format!(
                "arena of {} slots cannot hold two {}x{} grids",
                self.arena_capacity, self.grid.rows, self.grid.columns
            )));
        }
        Ok(())
    }
}

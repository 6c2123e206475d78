// lib.rs - Conway's Game of Life (B3/S23) on a fixed grid, with a software
// rasterizer that draws the grid into a host-owned pixel surface

pub mod arena;
pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod patterns;
pub mod render;
pub mod simulation;
pub mod surface;

pub use config::LifeConfig;
pub use error::{LifeError, Result};
pub use grid::GridShape;
pub use input::{Buttons, InputSnapshot};
pub use simulation::{PaintStroke, Simulation, TileCoord};
pub use surface::{Color, FrameBuffer, PixelSurface};

// render.rs - Software rasterizer: debug gradient, rectangles and the tile grid

use serde::{Deserialize, Serialize};

use crate::grid::GridShape;
use crate::surface::{BYTES_PER_PIXEL, Color, PixelSurface};

/// Pixel geometry of one grid tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayout {
    pub side_pixels: i32,
    /// Inset of the content rectangle inside the border rectangle.
    pub pad: i32,
}

impl Default for TileLayout {
    fn default() -> Self {
        Self {
            side_pixels: 15,
            pad: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub tile_border: Color,
    pub tile_off: Color,
    pub tile_on: Color,
    pub grid_border: Color,
}

impl Palette {
    pub fn colors(&self) -> [(&'static str, Color); 4] {
        [
            ("tile_border", self.tile_border),
            ("tile_off", self.tile_off),
            ("tile_on", self.tile_on),
            ("grid_border", self.grid_border),
        ]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tile_border: Color::gray(0.5),
            tile_off: Color::gray(1.0),
            tile_on: Color::gray(0.0),
            grid_border: Color::gray(0.25),
        }
    }
}

/// Animation offsets for the debug gradient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GradientOffsets {
    pub blue: u8,
    pub green: u8,
}

/// Fill `[min_x, max_x) x [min_y, max_y)` with `color`.
///
/// Each bound is clamped into the surface independently, so rectangles
/// hanging off any side (or both sides of an axis) are clipped, and an
/// empty or inverted range draws nothing.
pub fn draw_rectangle(
    surface: &mut PixelSurface<'_>,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
    color: Color,
) {
    let clamp = |value: i32, limit: usize| value.clamp(0, limit as i32) as usize;
    let min_x = clamp(min_x, surface.width());
    let max_x = clamp(max_x, surface.width());
    let min_y = clamp(min_y, surface.height());
    let max_y = clamp(max_y, surface.height());
    if min_x >= max_x || min_y >= max_y {
        return;
    }

    let pixel = color.to_bytes();
    for y in min_y..max_y {
        let row = surface.row_mut(y);
        for out in row[min_x * BYTES_PER_PIXEL..max_x * BYTES_PER_PIXEL].chunks_exact_mut(BYTES_PER_PIXEL) {
            out.copy_from_slice(&pixel);
        }
    }
}

/// Cosmetic background: every pixel derived from its coordinates.
pub fn draw_debug_gradient(surface: &mut PixelSurface<'_>, offsets: GradientOffsets) {
    for y in 0..surface.height() {
        let blue = (y as u8).wrapping_add(offsets.blue);
        let row = surface.row_mut(y);
        for (x, out) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let green = (x as u8).wrapping_add(offsets.green);
            let red = blue.wrapping_add(green);
            out.copy_from_slice(&[blue, green, red, 0]);
        }
    }
}

/// Color for the inner rectangle of a tile.
pub fn tile_color(palette: &Palette, shape: GridShape, row: usize, col: usize, alive: bool) -> Color {
    if alive {
        palette.tile_on
    } else if shape.is_boundary(row, col) {
        palette.grid_border
    } else {
        palette.tile_off
    }
}

/// Draw every cell as a bordered tile, starting at the surface origin.
pub fn draw_grid(
    surface: &mut PixelSurface<'_>,
    shape: GridShape,
    cells: &[bool],
    layout: TileLayout,
    palette: &Palette,
) {
    let side = layout.side_pixels;
    let pad = layout.pad;
    for row in 0..shape.rows {
        let top = row as i32 * side;
        for col in 0..shape.columns {
            let left = col as i32 * side;
            draw_rectangle(surface, left, top, left + side, top + side, palette.tile_border);

            let color = tile_color(palette, shape, row, col, cells[shape.index(row, col)]);
            draw_rectangle(
                surface,
                left + pad,
                top + pad,
                left + side - pad,
                top + side - pad,
                color,
            );
        }
    }
}

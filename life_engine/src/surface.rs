// surface.rs - Pixel surfaces the rasterizer writes into
//
// Pixels are always 32 bits wide with memory order B, G, R, X.

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};

pub const BYTES_PER_PIXEL: usize = 4;

/// Floating point color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: f32) -> Self {
        Self::new(level, level, level)
    }

    /// Every channel is a number in `[0, 1]`.
    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b].iter().all(|channel| (0.0..=1.0).contains(channel))
    }

    /// `0x00RRGGBB`, channels truncated rather than rounded.
    pub fn pack(&self) -> u32 {
        let red = (self.r * 255.0) as u32;
        let green = (self.g * 255.0) as u32;
        let blue = (self.b * 255.0) as u32;
        (red << 16) | (green << 8) | blue
    }

    /// Bytes as they land in surface memory.
    pub fn to_bytes(&self) -> [u8; 4] {
        self.pack().to_le_bytes()
    }
}

/// Borrowed view of host-owned pixel memory.
pub struct PixelSurface<'a> {
    memory: &'a mut [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> PixelSurface<'a> {
    pub fn new(
        memory: &'a mut [u8],
        width: usize,
        height: usize,
        stride: usize,
        bytes_per_pixel: usize,
    ) -> Result<Self> {
        if bytes_per_pixel != BYTES_PER_PIXEL {
            return Err(LifeError::InvalidSurface(format!(
                "{bytes_per_pixel} bytes per pixel, expected {BYTES_PER_PIXEL}"
            )));
        }
        if stride < width * BYTES_PER_PIXEL {
            return Err(LifeError::InvalidSurface(format!(
                "stride {stride} is shorter than a {width} pixel row"
            )));
        }
        if memory.len() < stride * height {
            return Err(LifeError::InvalidSurface(format!(
                "{} bytes cannot hold {height} rows of stride {stride}",
                memory.len()
            )));
        }
        Ok(Self {
            memory,
            width,
            height,
            stride,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The visible pixels of row `y`, excluding stride padding.
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        &mut self.memory[start..start + self.width * BYTES_PER_PIXEL]
    }

    pub fn put_pixel(&mut self, x: usize, y: usize, pixel: u32) {
        let offset = y * self.stride + x * BYTES_PER_PIXEL;
        self.memory[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&pixel.to_le_bytes());
    }

    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        let offset = y * self.stride + x * BYTES_PER_PIXEL;
        let mut bytes = [0u8; BYTES_PER_PIXEL];
        bytes.copy_from_slice(&self.memory[offset..offset + BYTES_PER_PIXEL]);
        u32::from_le_bytes(bytes)
    }
}

/// Host-owned pixel memory with tightly packed rows.
pub struct FrameBuffer {
    memory: Vec<u8>,
    width: usize,
    height: usize,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            memory: vec![0; width * height * BYTES_PER_PIXEL],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bytes(&self) -> &[u8] {
        &self.memory
    }

    pub fn surface(&mut self) -> PixelSurface<'_> {
        PixelSurface {
            memory: &mut self.memory,
            width: self.width,
            height: self.height,
            stride: self.width * BYTES_PER_PIXEL,
        }
    }

    /// Swizzle B, G, R, X into opaque R, G, B, A.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.memory.len());
        for pixel in self.memory.chunks_exact(BYTES_PER_PIXEL) {
            rgba.extend_from_slice(&[pixel[2], pixel[1], pixel[0], 0xff]);
        }
        rgba
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_truncates_and_orders_bgrx() {
        let color = Color::new(1.0, 0.5, 0.25);
        // 127.5 and 63.75 truncate down.
        assert_eq!(color.pack(), 0x00ff_7f3f);
        assert_eq!(color.to_bytes(), [0x3f, 0x7f, 0xff, 0x00]);
        assert_eq!(Color::gray(0.5).pack(), 0x007f_7f7f);
    }

    #[test]
    fn normalized_channels_stay_in_unit_range() {
        assert!(Color::new(0.0, 0.5, 1.0).is_normalized());
        assert!(!Color::new(0.0, 0.0, 1.5).is_normalized());
        assert!(!Color::new(-0.1, 0.0, 0.0).is_normalized());
        assert!(!Color::new(f32::NAN, 0.0, 0.0).is_normalized());
    }

    #[test]
    fn rejects_bad_descriptors() {
        let mut memory = vec![0u8; 64];
        assert!(PixelSurface::new(&mut memory, 4, 4, 16, 3).is_err());
        assert!(PixelSurface::new(&mut memory, 4, 4, 8, 4).is_err());
        assert!(PixelSurface::new(&mut memory, 4, 5, 16, 4).is_err());
        assert!(PixelSurface::new(&mut memory, 4, 4, 16, 4).is_ok());
    }

    #[test]
    fn stride_padding_is_left_alone() {
        let mut memory = vec![0xaau8; 2 * 12];
        {
            let mut surface = PixelSurface::new(&mut memory, 2, 2, 12, 4).unwrap();
            surface.row_mut(1).fill(0);
            surface.put_pixel(1, 0, 0x0011_2233);
            assert_eq!(surface.pixel(1, 0), 0x0011_2233);
        }
        assert_eq!(&memory[4..8], &[0x33, 0x22, 0x11, 0x00]);
        assert_eq!(&memory[8..12], &[0xaa; 4]);
        assert_eq!(&memory[12..20], &[0; 8]);
        assert_eq!(&memory[20..24], &[0xaa; 4]);
    }

    #[test]
    fn rgba_conversion_is_opaque() {
        let mut frame = FrameBuffer::new(1, 1);
        frame.surface().put_pixel(0, 0, Color::new(1.0, 0.0, 0.0).pack());
        assert_eq!(frame.to_rgba(), vec![0xff, 0x00, 0x00, 0xff]);
    }
}

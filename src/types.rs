// Core types shared by the rasterizer and the texture generators.

use crate::error::Error;

/// One RGBA8 pixel. Alpha 255 = fully opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque color from three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray with the same value on every channel.
    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

/// The canvas a texture is painted on.
/// Dimensions are set once at construction and never change afterwards.
/// Visual: this is the image that ends up in the PNG, pixel for pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>, // row-major, length = width * height
}

impl PixelBuffer {
    /// Allocate a `width` x `height` buffer filled with `fill`.
    /// The reservation is fallible so a huge canvas reports `Error::Alloc`
    /// instead of aborting the process.
    pub fn new(width: usize, height: usize, fill: Rgba) -> Result<Self, Error> {
        let len = width
            .checked_mul(height)
            .ok_or_else(|| Error::Alloc(format!("{width}x{height} overflows the pixel count")))?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|e| Error::Alloc(format!("{width}x{height} buffer: {e}")))?;
        pixels.resize(len, fill);

        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at (x, y), or `None` when the coordinate is off the canvas.
    #[cfg(test)]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Mutable pixel at (x, y); off-canvas coordinates yield `None`.
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Rgba> {
        let idx = self.index(x, y)?;
        Some(&mut self.pixels[idx])
    }

    /// Every pixel, row-major.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Tightly packed RGBA8 bytes, row-major, ready for an encoder.
    pub fn as_raw_bytes(&self) -> Vec<u8> {
        self.pixels()
            .iter()
            .flat_map(|p| [p.r, p.g, p.b, p.a])
            .collect()
    }

    // Off-canvas coordinates map to None; this is where all clipping ends up.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

/// A single drawing operation. Coordinates are inclusive bounds and may lie
/// partly or wholly outside the canvas; the rasterizer clips them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Rect { x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba },
    Line { x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba, width: u32 },
    /// Ellipse inscribed in the box (x0,y0)-(x1,y1).
    Ellipse { x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_uniform() {
        let buf = PixelBuffer::new(7, 3, Rgba::gray(40)).unwrap();
        assert_eq!(buf.width(), 7);
        assert_eq!(buf.height(), 3);
        assert_eq!(buf.pixels().len(), 21);
        assert!(buf.pixels().iter().all(|&p| p == Rgba::gray(40)));
    }

    #[test]
    fn get_outside_canvas_is_none() {
        let buf = PixelBuffer::new(4, 4, Rgba::gray(0)).unwrap();
        assert_eq!(buf.get(-1, 0), None);
        assert_eq!(buf.get(0, 4), None);
        assert_eq!(buf.get(3, 3), Some(Rgba::gray(0)));
    }

    #[test]
    fn raw_bytes_are_rgba_row_major() {
        let mut buf = PixelBuffer::new(2, 1, Rgba::rgba(1, 2, 3, 4)).unwrap();
        *buf.get_mut(1, 0).unwrap() = Rgba::rgba(5, 6, 7, 8);
        assert_eq!(buf.as_raw_bytes(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn overflowing_dimensions_report_alloc_error() {
        let err = PixelBuffer::new(usize::MAX, 2, Rgba::gray(0)).unwrap_err();
        assert!(matches!(err, Error::Alloc(_)));
    }
}

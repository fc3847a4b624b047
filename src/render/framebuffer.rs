//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a safe view into color and depth buffers with bounds-checked access.
//! The depth buffer enables hidden surface removal via the z-buffer algorithm.

use super::PlotTarget;
use crate::color::Color;

/// A view into color and depth buffers.
///
/// Wraps 1D slices with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - the screen and the depth
/// buffer stay separate values owned by the caller and are only paired for
/// the duration of a rendering pass.
///
/// # Depth Buffer
///
/// Depth is the raw z coordinate with +z pointing toward the viewer, so a
/// larger value is nearer. Cells that were never written hold
/// `f64::NEG_INFINITY`.
///
/// # Orientation
///
/// Row 0 is the bottom row of the raster (y grows upward).
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [Color],
    depth_buffer: &'a mut [f64],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from buffer slices and dimensions.
    ///
    /// # Panics
    /// Panics in debug builds if buffer lengths don't match width * height
    pub fn new(
        color_buffer: &'a mut [Color],
        depth_buffer: &'a mut [f64],
        width: u32,
        height: u32,
    ) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            width as usize * height as usize,
            "Color buffer size doesn't match dimensions"
        );
        debug_assert_eq!(
            depth_buffer.len(),
            width as usize * height as usize,
            "Depth buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            depth_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// The pixel is only written if `depth` is greater than the stored depth
    /// at that location. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f64, color: Color) {
        if let Some(idx) = self.index(x, y) {
            if depth > self.depth_buffer[idx] {
                self.depth_buffer[idx] = depth;
                self.color_buffer[idx] = color;
            }
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Get the stored depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn depth_at(&self, x: i32, y: i32) -> Option<f64> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }
}

impl PlotTarget for FrameBuffer<'_> {
    #[inline]
    fn plot(&mut self, x: i32, y: i32, z: f64, color: Color) {
        self.set_pixel_with_depth(x, y, z, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, CYAN, MAGENTA};

    fn buffers(width: u32, height: u32) -> (Vec<Color>, Vec<f64>) {
        let size = width as usize * height as usize;
        (vec![BLACK; size], vec![f64::NEG_INFINITY; size])
    }

    #[test]
    fn nearer_depth_wins() {
        let (mut colors, mut depths) = buffers(4, 4);
        let mut fb = FrameBuffer::new(&mut colors, &mut depths, 4, 4);

        fb.plot(1, 2, -5.0, CYAN);
        fb.plot(1, 2, -10.0, MAGENTA);
        assert_eq!(fb.get_pixel(1, 2), Some(CYAN));

        fb.plot(1, 2, 3.0, MAGENTA);
        assert_eq!(fb.get_pixel(1, 2), Some(MAGENTA));
        assert_eq!(fb.depth_at(1, 2), Some(3.0));
    }

    #[test]
    fn equal_depth_keeps_first_writer() {
        let (mut colors, mut depths) = buffers(2, 2);
        let mut fb = FrameBuffer::new(&mut colors, &mut depths, 2, 2);
        fb.plot(0, 0, 1.0, CYAN);
        fb.plot(0, 0, 1.0, MAGENTA);
        assert_eq!(fb.get_pixel(0, 0), Some(CYAN));
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let (mut colors, mut depths) = buffers(2, 2);
        let mut fb = FrameBuffer::new(&mut colors, &mut depths, 2, 2);
        fb.plot(-1, 0, 0.0, CYAN);
        fb.plot(0, 2, 0.0, CYAN);
        assert_eq!(fb.get_pixel(-1, 0), None);
        assert!(colors.iter().all(|&c| c == BLACK));
    }
}

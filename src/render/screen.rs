//! Owned raster: a color screen plus its depth buffer.
//!
//! [`Screen`] owns the storage and hands out [`FrameBuffer`] views for a
//! rendering pass. It also converts the finished raster for display (ARGB
//! bytes) and for file output (PNG through the `image` crate).

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use log::info;

use super::framebuffer::FrameBuffer;
use crate::color::Color;

/// Depth value of a cell nothing has been drawn into.
pub const DEPTH_UNSET: f64 = f64::NEG_INFINITY;

pub struct Screen {
    color_buffer: Vec<Color>,
    depth_buffer: Vec<f64>,
    width: u32,
    height: u32,
}

impl Screen {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![background; size],
            depth_buffer: vec![DEPTH_UNSET; size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32, background: Color) {
        *self = Self::new(width, height, background);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color);
    }

    /// Reset every depth cell to unset, ready for a new pass.
    #[inline]
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(DEPTH_UNSET);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    pub fn depth_at(&self, x: i32, y: i32) -> Option<f64> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }

    /// Get a mutable FrameBuffer view into the color and depth buffers.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(
            &mut self.color_buffer,
            &mut self.depth_buffer,
            self.width,
            self.height,
        )
    }

    /// ARGB8888 bytes in display order (top row first), native endian.
    pub fn to_argb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.color_buffer.len() * 4);
        if self.width == 0 {
            return bytes;
        }
        for row in self.color_buffer.chunks(self.width as usize).rev() {
            for color in row {
                bytes.extend_from_slice(&color.to_argb().to_ne_bytes());
            }
        }
        bytes
    }

    /// The raster as an RGB image. Image row 0 is raster row `height - 1`.
    pub fn to_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            let idx = (self.height - 1 - y) as usize * self.width as usize + x as usize;
            Rgb(self.color_buffer[idx].to_rgb())
        })
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let path = path.as_ref();
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)?;
        info!("saved {}x{} raster to {}", self.width, self.height, path.display());
        Ok(())
    }
}

//! Geometry-to-pixel pipeline.
//!
//! - [`line`]: depth-aware Bresenham line drawing
//! - [`scanline`]: scanline triangle fill built on the line drawer
//! - [`driver`]: back-face culling and batch iteration over point stores
//! - [`FrameBuffer`] / [`Screen`]: the depth-tested raster the pipeline
//!   writes into
//!
//! Every pixel leaves the pipeline through [`PlotTarget::plot`].

pub mod driver;
pub mod line;
pub mod scanline;

mod framebuffer;
mod screen;

pub use driver::{draw_edges, fill_triangles, surface_normal, RenderStats};
pub use framebuffer::FrameBuffer;
pub use line::draw_line;
pub use scanline::scanline_convert;
pub use screen::{Screen, DEPTH_UNSET};

use crate::color::Color;

/// The depth-test-and-write primitive.
///
/// Implementors write `color` at `(x, y)` and record `z` only when `z` is
/// nearer (greater) than what the cell already holds; otherwise the call does
/// nothing. The rasterizers never look at the raster themselves.
pub trait PlotTarget {
    fn plot(&mut self, x: i32, y: i32, z: f64, color: Color);
}

impl<T: PlotTarget + ?Sized> PlotTarget for &mut T {
    #[inline]
    fn plot(&mut self, x: i32, y: i32, z: f64, color: Color) {
        (**self).plot(x, y, z, color);
    }
}

/// Records every plot call in order, without depth testing.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub plots: Vec<Plotted>,
}

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Plotted {
    pub x: i32,
    pub y: i32,
    pub z: f64,
    pub color: Color,
}

#[cfg(test)]
impl Recorder {
    pub fn coords(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.plots.iter().map(|p| (p.x, p.y))
    }
}

#[cfg(test)]
impl PlotTarget for Recorder {
    fn plot(&mut self, x: i32, y: i32, z: f64, color: Color) {
        self.plots.push(Plotted { x, y, z, color });
    }
}

//! A depth-buffered software rasterizer for triangle and edge lists.
//!
//! Geometry lives in a [`PointStore`] of homogeneous points. Shape generators
//! in [`shapes`] append boxes, spheres and tori as triangle lists and
//! circles and cubic curves as edge lists. The [`render`] pipeline then
//! culls back faces, scan-converts triangles and rasterizes lines, handing
//! every pixel to a depth-testing [`render::PlotTarget`].
//!
//! # Quick Start
//!
//! ```
//! use zraster::prelude::*;
//!
//! let mut polygons = PointStore::new();
//! shapes::add_box(&mut polygons, 50.0, 150.0, 0.0, 100.0, 100.0, 100.0);
//!
//! let mut screen = Screen::new(200, 200, color::BLACK);
//! let stats = fill_triangles(&polygons, &mut screen.as_framebuffer())?;
//! assert_eq!(stats.drawn, 2);
//! # Ok::<(), zraster::RenderError>(())
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod math;
pub mod point_store;
pub mod render;
pub mod scene;
pub mod shapes;
pub mod window;

pub use color::{palette, Color};
pub use config::RenderConfig;
pub use error::{LoadError, RenderError};
pub use point_store::{GrowthPolicy, PointStore};
pub use scene::Scene;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::color::{self, palette, Color};
    pub use crate::config::RenderConfig;
    pub use crate::error::{LoadError, RenderError};
    pub use crate::math::curve::CurveKind;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;
    pub use crate::point_store::{GrowthPolicy, PointStore};
    pub use crate::render::{
        draw_edges, draw_line, fill_triangles, FrameBuffer, PlotTarget, RenderStats, Screen,
    };
    pub use crate::scene::Scene;
    pub use crate::shapes;
}

//! Batch rendering of triangle and edge lists.

use log::{debug, warn};

use super::line::draw_line;
use super::scanline::scanline_convert;
use super::PlotTarget;
use crate::color::Color;
use crate::error::RenderError;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::point_store::PointStore;

/// Primitive counts from one batch call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Primitives handed to a rasterizer.
    pub drawn: usize,
    /// Triangles skipped as back-facing.
    pub culled: usize,
}

/// Unnormalized surface normal `(p1 - p0) × (p2 - p0)`.
///
/// Its sign follows the winding: counter-clockwise as seen from +z gives a
/// positive z component.
pub fn surface_normal(triangle: &[Vec3; 3]) -> Vec3 {
    let [p0, p1, p2] = *triangle;
    (p1 - p0).cross(p2 - p0)
}

/// Fills every front-facing triangle of `triangles`.
///
/// Triangles are visited in stored order; triangle `k` is filled with
/// `palette(k)`. A triangle whose normal has a z component `<= 0` faces away
/// from the viewer and is culled.
///
/// # Errors
/// [`RenderError::InsufficientGeometry`] if fewer than 3 points are stored.
/// Nothing is drawn in that case.
pub fn fill_triangles<T: PlotTarget + ?Sized>(
    triangles: &PointStore,
    target: &mut T,
) -> Result<RenderStats, RenderError> {
    if triangles.len() < 3 {
        warn!(
            "need at least 3 points to fill a polygon, found {}",
            triangles.len()
        );
        return Err(RenderError::InsufficientGeometry {
            required: 3,
            found: triangles.len(),
        });
    }

    let mut stats = RenderStats::default();
    for (index, triangle) in triangles.triangles().enumerate() {
        let points = triangle.map(Vec4::to_vec3);
        if surface_normal(&points).z > 0.0 {
            scanline_convert(&points, index, target);
            stats.drawn += 1;
        } else {
            stats.culled += 1;
        }
    }

    debug!(
        "filled {} triangles, culled {}",
        stats.drawn, stats.culled
    );
    Ok(stats)
}

/// Draws every consecutive pair of points in `edges` as a line in `color`.
///
/// # Errors
/// [`RenderError::InsufficientGeometry`] if fewer than 2 points are stored.
pub fn draw_edges<T: PlotTarget + ?Sized>(
    edges: &PointStore,
    target: &mut T,
    color: Color,
) -> Result<RenderStats, RenderError> {
    if edges.len() < 2 {
        warn!("need at least 2 points to draw a line, found {}", edges.len());
        return Err(RenderError::InsufficientGeometry {
            required: 2,
            found: edges.len(),
        });
    }

    let mut stats = RenderStats::default();
    for [p0, p1] in edges.edges() {
        draw_line(
            p0.x as i32,
            p0.y as i32,
            p0.z,
            p1.x as i32,
            p1.y as i32,
            p1.z,
            target,
            color,
        );
        stats.drawn += 1;
    }

    debug!("drew {} edges", stats.drawn);
    Ok(stats)
}

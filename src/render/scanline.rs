//! Scanline triangle fill.
//!
//! A triangle is filled one horizontal row at a time. Its vertices are first
//! classified by y into bottom, middle and top, then two edge walks run
//! upward:
//!
//! ```text
//!             top
//!             /|
//!            / |       phase 2: right edge middle -> top
//!           /  |
//!          /   + middle
//!         /  _/        phase 1: right edge bottom -> middle
//!        /_/
//!    bottom
//! ```
//!
//! The left boundary always runs from bottom to top. The right boundary runs
//! from bottom to middle during phase 1 and from middle to top during phase 2.
//! Both boundaries carry x and z and advance by a constant slope per unit of
//! y. Each row is handed to [`draw_line`] as a horizontal segment, so the
//! row's pixels get depth-tested like any other line.
//!
//! Rows start at the bottom vertex's y and step by 1.0; the top row of each
//! phase is excluded. A phase with zero vertical extent contributes no rows,
//! which is what keeps flat and degenerate triangles free of division by zero.
//! Beyond `|y| = 2^53` consecutive rows are no longer distinct `f64` values,
//! so triangles reaching that far are skipped.

use super::line::draw_line;
use super::PlotTarget;
use crate::color::palette;
use crate::math::vec3::Vec3;

/// Orders a triangle's vertices by y as `(bottom, middle, top)`.
///
/// The first two vertices are split into a lower and an upper one (`<`, so
/// on a tie the second vertex is "lower"). The third vertex then becomes
/// the top if it is strictly above the upper one, the bottom if it is at or
/// below the lower one, and the middle otherwise.
pub fn order_by_y(triangle: &[Vec3; 3]) -> (Vec3, Vec3, Vec3) {
    let [p0, p1, p2] = *triangle;
    let (lower, upper) = if p0.y < p1.y { (p0, p1) } else { (p1, p0) };

    if p2.y > upper.y {
        (lower, upper, p2)
    } else if p2.y <= lower.y {
        (p2, lower, upper)
    } else {
        (lower, p2, upper)
    }
}

/// Largest `|y|` at which `y + 1.0` is still a different `f64`.
const MAX_ROW_Y: f64 = 9_007_199_254_740_992.0;

#[inline]
fn slope(delta: f64, span: f64) -> f64 {
    if span == 0.0 {
        0.0
    } else {
        delta / span
    }
}

/// Number of rows `y0, y0 + 1, ...` strictly below `y1`.
#[inline]
fn row_count(y0: f64, y1: f64) -> u64 {
    if y1 > y0 {
        (y1 - y0).ceil() as u64
    } else {
        0
    }
}

/// Fills triangle number `index` with the flat color `palette(index)`.
///
/// Triangles with a non-finite coordinate, or with a y beyond `±2^53`, are
/// skipped.
pub fn scanline_convert<T: PlotTarget + ?Sized>(triangle: &[Vec3; 3], index: usize, target: &mut T) {
    let drawable = triangle.iter().all(|p| {
        p.x.is_finite() && p.z.is_finite() && p.y.is_finite() && p.y.abs() < MAX_ROW_Y
    });
    if !drawable {
        return;
    }

    let color = palette(index);
    let (b, m, t) = order_by_y(triangle);

    let dx_left = slope(t.x - b.x, t.y - b.y);
    let dz_left = slope(t.z - b.z, t.y - b.y);

    let (mut x0, mut z0) = (b.x, b.z);
    let (mut x1, mut z1) = (b.x, b.z);

    // phase 1: bottom -> middle
    let dx_right = slope(m.x - b.x, m.y - b.y);
    let dz_right = slope(m.z - b.z, m.y - b.y);
    for row in 0..row_count(b.y, m.y) {
        let y = (b.y + row as f64) as i32;
        draw_line(x0 as i32, y, z0, x1 as i32, y, z1, target, color);
        x0 += dx_left;
        x1 += dx_right;
        z0 += dz_left;
        z1 += dz_right;
    }

    // phase 2: middle -> top, left edge keeps going
    x1 = m.x;
    z1 = m.z;
    let dx_right = slope(t.x - m.x, t.y - m.y);
    let dz_right = slope(t.z - m.z, t.y - m.y);
    for row in 0..row_count(m.y, t.y) {
        let y = (m.y + row as f64) as i32;
        draw_line(x0 as i32, y, z0, x1 as i32, y, z1, target, color);
        x0 += dx_left;
        x1 += dx_right;
        z0 += dz_left;
        z1 += dz_right;
    }
}

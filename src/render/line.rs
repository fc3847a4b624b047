//! Depth-aware midpoint line rasterization.
//!
//! A generalized Bresenham line walker. The endpoints are first ordered so the
//! line always runs left to right (`x0 <= x1`), which leaves four stepping
//! regimes instead of eight octants:
//!
//! ```text
//!            tall, A > 0 (octant 2)
//!                 |   /
//!                 |  /   wide, A > 0 (octant 1)
//!                 | /
//!    x0,y0 -------+-------->  x
//!                 | \
//!                 |  \   wide, A <= 0 (octant 8)
//!                 |   \
//!            tall, A <= 0 (octant 7)
//! ```
//!
//! With `A = 2Δy` and `B = -2Δx`, the decision variable `d` tracks twice the
//! implicit line function `A·x + B·y + C` at the next midpoint. Each iteration
//! plots the current pixel and then either takes the "east" step (major axis
//! only) or the "northeast" step (major and minor axis), adding the
//! precomputed increment for that step to `d`.
//!
//! # Depth
//!
//! Depth advances by a constant `dz` per iteration along the major axis, not
//! by 2D distance. The final endpoint is plotted explicitly after the
//! half-open loop with its exact depth.

use super::PlotTarget;
use crate::color::Color;

/// Per-regime stepping parameters.
///
/// Decision values and loop bounds are `i64`: `2Δ` of two `i32` coordinates
/// does not fit in `i32`.
struct Stepper {
    /// Major axis is x.
    wide: bool,
    a: i64,
    d: i64,
    d_east: i64,
    d_northeast: i64,
    dx_east: i32,
    dy_east: i32,
    dx_northeast: i32,
    dy_northeast: i32,
    loop_start: i64,
    loop_end: i64,
}

impl Stepper {
    fn classify(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        let a = 2 * (y1 - y0);
        let b = -2 * (x1 - x0);

        if (x1 - x0).abs() >= (y1 - y0).abs() {
            // octants 1 and 8: x is the major axis
            let (d, dy_northeast, d_northeast) = if a > 0 {
                (a + b / 2, 1, a + b)
            } else {
                (a - b / 2, -1, a - b)
            };
            Self {
                wide: true,
                a,
                d,
                d_east: a,
                d_northeast,
                dx_east: 1,
                dy_east: 0,
                dx_northeast: 1,
                dy_northeast,
                loop_start: x0,
                loop_end: x1,
            }
        } else if a > 0 {
            // octant 2: walk y upward
            Self {
                wide: false,
                a,
                d: a / 2 + b,
                d_east: b,
                d_northeast: a + b,
                dx_east: 0,
                dy_east: 1,
                dx_northeast: 1,
                dy_northeast: 1,
                loop_start: y0,
                loop_end: y1,
            }
        } else {
            // octant 7: walk y downward, counting from y1 up to y0
            Self {
                wide: false,
                a,
                d: a / 2 - b,
                d_east: -b,
                d_northeast: a - b,
                dx_east: 0,
                dy_east: -1,
                dx_northeast: 1,
                dy_northeast: -1,
                loop_start: y1,
                loop_end: y0,
            }
        }
    }

    /// Whether the current decision value calls for a minor-axis step.
    #[inline]
    fn takes_northeast(&self) -> bool {
        let a = self.a;
        if self.wide {
            (a > 0 && self.d > 0) || (a < 0 && self.d < 0)
        } else {
            (a > 0 && self.d < 0) || (a < 0 && self.d > 0)
        }
    }

    /// Moves `(x, y)` one pixel along the line.
    #[inline]
    fn advance(&mut self, x: &mut i32, y: &mut i32) {
        if self.takes_northeast() {
            *x += self.dx_northeast;
            *y += self.dy_northeast;
            self.d += self.d_northeast;
        } else {
            *x += self.dx_east;
            *y += self.dy_east;
            self.d += self.d_east;
        }
        self.loop_start += 1;
    }
}

/// Draws the digital line from `(x0, y0)` to `(x1, y1)` into `target`.
///
/// Every pixel is handed to [`PlotTarget::plot`] with a linearly interpolated
/// depth. Endpoints are swapped, depth included, when `x0 > x1`, so drawing a
/// segment in either direction covers the same pixels. A zero-length walk
/// (`loop_start == loop_end`) plots only the final endpoint.
#[allow(clippy::too_many_arguments)]
pub fn draw_line<T: PlotTarget + ?Sized>(
    mut x0: i32,
    mut y0: i32,
    mut z0: f64,
    mut x1: i32,
    mut y1: i32,
    mut z1: f64,
    target: &mut T,
    color: Color,
) {
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
        std::mem::swap(&mut z0, &mut z1);
    }

    let mut step = Stepper::classify(x0, y0, x1, y1);

    let (mut x, mut y, mut z) = (x0, y0, z0);
    let span = step.loop_end - step.loop_start;
    let dz = if span > 0 { (z1 - z0) / span as f64 } else { 0.0 };

    while step.loop_start < step.loop_end {
        target.plot(x, y, z, color);
        step.advance(&mut x, &mut y);
        z += dz;
    }
    target.plot(x1, y1, z1, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::WHITE;
    use crate::render::Recorder;
    use approx::assert_relative_eq;
    use std::collections::BTreeSet;

    fn pixels(x0: i32, y0: i32, x1: i32, y1: i32) -> BTreeSet<(i32, i32)> {
        let mut rec = Recorder::default();
        draw_line(x0, y0, 0.0, x1, y1, 0.0, &mut rec, WHITE);
        rec.coords().collect()
    }

    #[test]
    fn horizontal_line_covers_every_column() {
        let mut rec = Recorder::default();
        draw_line(0, 0, 0.0, 5, 0, 10.0, &mut rec, WHITE);

        assert_eq!(rec.plots.len(), 6);
        for (i, p) in rec.plots.iter().enumerate() {
            assert_eq!((p.x, p.y), (i as i32, 0));
            assert_relative_eq!(p.z, 2.0 * i as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn reversed_endpoints_cover_same_pixels() {
        let cases = [
            (0, 0, 7, 3),
            (0, 0, 3, 7),
            (0, 0, 7, -3),
            (0, 0, 3, -7),
            (2, 9, 2, -4),
            (-5, 1, 6, 1),
            (1, 1, 6, 6),
            (1, 1, 6, -4),
            (10, 3, -2, 11),
        ];
        for (x0, y0, x1, y1) in cases {
            assert_eq!(
                pixels(x0, y0, x1, y1),
                pixels(x1, y1, x0, y0),
                "({x0},{y0}) -> ({x1},{y1})"
            );
        }
    }

    #[test]
    fn every_regime_reaches_its_endpoint_connected() {
        for (x1, y1) in [(9, 4), (4, 9), (9, -4), (4, -9), (0, 6), (0, -6), (6, 6)] {
            let mut rec = Recorder::default();
            draw_line(0, 0, 0.0, x1, y1, 0.0, &mut rec, WHITE);

            let first = rec.plots.first().unwrap();
            let last = rec.plots.last().unwrap();
            assert_eq!((first.x, first.y), (0, 0));
            assert_eq!((last.x, last.y), (x1, y1));

            let expected = x1.abs().max(y1.abs()) as usize + 1;
            assert_eq!(rec.plots.len(), expected);
            for pair in rec.plots.windows(2) {
                assert!((pair[1].x - pair[0].x).abs() <= 1);
                assert!((pair[1].y - pair[0].y).abs() <= 1);
            }
        }
    }

    #[test]
    fn steep_line_stays_close_to_ideal() {
        let mut rec = Recorder::default();
        draw_line(0, 0, 0.0, 3, 9, 0.0, &mut rec, WHITE);
        for p in &rec.plots {
            let ideal = p.y as f64 / 3.0;
            assert!((p.x as f64 - ideal).abs() <= 0.5 + 1e-9, "{p:?}");
        }
    }

    #[test]
    fn depth_stays_within_endpoints() {
        for (x1, y1) in [(20, 7), (7, 20), (20, -7), (7, -20)] {
            let mut rec = Recorder::default();
            draw_line(0, 0, -3.0, x1, y1, 12.5, &mut rec, WHITE);
            let mut prev = f64::NEG_INFINITY;
            for p in &rec.plots {
                assert!(p.z >= -3.0 && p.z <= 12.5, "{p:?}");
                assert!(p.z >= prev);
                prev = p.z;
            }
        }
    }

    #[test]
    fn swap_carries_depth() {
        let mut rec = Recorder::default();
        draw_line(4, 0, 8.0, 0, 0, 0.0, &mut rec, WHITE);
        assert_eq!((rec.plots[0].x, rec.plots[0].z), (0, 0.0));
        assert_eq!((rec.plots[4].x, rec.plots[4].z), (4, 8.0));
    }

    #[test]
    fn far_apart_endpoints_step_without_overflow() {
        let (x0, x1) = (-2_000_000_000, 2_000_000_000);
        let mut step = Stepper::classify(x0, 0, x1, 0);
        assert!(step.wide);
        assert_eq!(step.loop_end - step.loop_start, 4_000_000_000);

        let (mut x, mut y) = (x0, 0);
        for _ in 0..1000 {
            step.advance(&mut x, &mut y);
        }
        assert_eq!((x, y), (x0 + 1000, 0));
    }

    #[test]
    fn far_apart_sloped_line_tracks_ideal() {
        // slope 2/3 over a run of 3e9 columns
        let (x0, y0) = (-1_500_000_000, -1_000_000_000);
        let mut step = Stepper::classify(x0, y0, 1_500_000_000, 1_000_000_000);

        let (mut x, mut y) = (x0, y0);
        for _ in 0..3000 {
            step.advance(&mut x, &mut y);
            let ideal = (x - x0) as f64 * 2.0 / 3.0;
            assert!(((y - y0) as f64 - ideal).abs() <= 0.5 + 1e-9, "({x}, {y})");
        }
        assert_eq!(x, x0 + 3000);
    }

    #[test]
    fn single_point_line_plots_endpoint_once() {
        let mut rec = Recorder::default();
        draw_line(3, 4, 1.0, 3, 4, 2.0, &mut rec, WHITE);
        assert_eq!(rec.plots.len(), 1);
        assert_eq!(rec.plots[0].z, 2.0);
        assert!(rec.plots[0].z.is_finite());
    }
}

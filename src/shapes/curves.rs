//! Planar curves emitted as edge lists.

use std::f64::consts::PI;

use crate::math::curve::CurveKind;
use crate::point_store::PointStore;

/// Appends a circle of radius `r` around `(cx, cy)` at depth `cz`.
///
/// The circle is sampled at `t = i / step` for `i` in `1..=step`, starting
/// from `(cx + r, cy)`. Consecutive samples are joined, and the last sample
/// lands back on the start, so the `step` edges form a closed loop.
pub fn add_circle(edges: &mut PointStore, cx: f64, cy: f64, cz: f64, r: f64, step: usize) {
    let (mut x0, mut y0) = (r + cx, cy);
    for i in 1..=step {
        let t = i as f64 / step as f64;
        let x1 = r * (2.0 * PI * t).cos() + cx;
        let y1 = r * (2.0 * PI * t).sin() + cy;

        edges.append_edge(x0, y0, cz, x1, y1, cz);
        x0 = x1;
        y0 = y1;
    }
}

/// Appends a cubic curve in the z = 0 plane as `step` connected edges.
///
/// `controls` are the four `(x, y)` control values of `kind` (see
/// [`CurveKind`]). The first edge starts at `controls[0]`.
pub fn add_curve(edges: &mut PointStore, controls: [(f64, f64); 4], step: usize, kind: CurveKind) {
    let [c0, c1, c2, c3] = controls;
    let xs = kind.coefficients(c0.0, c1.0, c2.0, c3.0);
    let ys = kind.coefficients(c0.1, c1.1, c2.1, c3.1);

    let (mut x0, mut y0) = c0;
    for i in 1..=step {
        let t = i as f64 / step as f64;
        let x = xs.eval(t);
        let y = ys.eval(t);

        edges.append_edge(x0, y0, 0.0, x, y, 0.0);
        x0 = x;
        y0 = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn four_step_circle_hits_cardinal_points() {
        let mut edges = PointStore::new();
        add_circle(&mut edges, 0.0, 0.0, 0.0, 10.0, 4);
        assert_eq!(edges.edge_count(), 4);

        let expected = [
            (10.0, 0.0),
            (0.0, 10.0),
            (0.0, 10.0),
            (-10.0, 0.0),
            (-10.0, 0.0),
            (0.0, -10.0),
            (0.0, -10.0),
            (10.0, 0.0),
        ];
        for (p, (x, y)) in edges.points().zip(expected) {
            assert_abs_diff_eq!(p.x, x, epsilon = 1e-9);
            assert_abs_diff_eq!(p.y, y, epsilon = 1e-9);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn circle_edges_are_connected_at_depth() {
        let mut edges = PointStore::new();
        add_circle(&mut edges, 3.0, 4.0, -7.0, 5.0, 12);
        let pairs: Vec<_> = edges.edges().collect();
        for w in pairs.windows(2) {
            assert_eq!(w[0][1], w[1][0]);
        }
        assert!(edges.points().all(|p| p.z == -7.0));
    }

    #[test]
    fn bezier_curve_runs_from_first_to_last_control() {
        let mut edges = PointStore::new();
        let controls = [(0.0, 0.0), (10.0, 40.0), (30.0, 40.0), (40.0, 0.0)];
        add_curve(&mut edges, controls, 20, CurveKind::Bezier);

        assert_eq!(edges.edge_count(), 20);
        let first = edges.point(0);
        let last = edges.point(edges.len() - 1);
        assert_eq!((first.x, first.y), (0.0, 0.0));
        assert_abs_diff_eq!(last.x, 40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(last.y, 0.0, epsilon = 1e-9);
        assert!(edges.points().all(|p| p.z == 0.0));
    }

    #[test]
    fn hermite_curve_ends_at_second_point() {
        let mut edges = PointStore::new();
        let controls = [(5.0, 5.0), (50.0, 20.0), (100.0, 0.0), (0.0, -100.0)];
        add_curve(&mut edges, controls, 10, CurveKind::Hermite);

        let last = edges.point(edges.len() - 1);
        assert_abs_diff_eq!(last.x, 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(last.y, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_step_adds_nothing() {
        let mut edges = PointStore::new();
        add_circle(&mut edges, 0.0, 0.0, 0.0, 1.0, 0);
        add_curve(&mut edges, [(0.0, 0.0); 4], 0, CurveKind::Bezier);
        assert!(edges.is_empty());
    }
}

//! Cubic curve bases.
//!
//! A parametric cubic is evaluated per axis as `a·t³ + b·t² + c·t + d` for
//! `t ∈ [0, 1]`. The coefficients come from four control values whose
//! meaning depends on the curve family:
//!
//! | Family  | v0 | v1 | v2 | v3 |
//! |---------|----|----|----|----|
//! | Hermite | start point | end point | start tangent | end tangent |
//! | Bezier  | start point | control 1 | control 2 | end point |

/// Curve family selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    Hermite,
    Bezier,
}

impl CurveKind {
    /// Converts four control values into cubic polynomial coefficients.
    ///
    /// Equivalent to multiplying the control column by the family's basis
    /// matrix (the inverse Hermite matrix, or the Bernstein matrix).
    pub fn coefficients(self, v0: f64, v1: f64, v2: f64, v3: f64) -> Cubic {
        match self {
            CurveKind::Hermite => Cubic {
                a: 2.0 * v0 - 2.0 * v1 + v2 + v3,
                b: -3.0 * v0 + 3.0 * v1 - 2.0 * v2 - v3,
                c: v2,
                d: v0,
            },
            CurveKind::Bezier => Cubic {
                a: -v0 + 3.0 * v1 - 3.0 * v2 + v3,
                b: 3.0 * v0 - 6.0 * v1 + 3.0 * v2,
                c: -3.0 * v0 + 3.0 * v1,
                d: v0,
            },
        }
    }
}

/// Coefficients of `a·t³ + b·t² + c·t + d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Cubic {
    #[inline]
    pub fn eval(&self, t: f64) -> f64 {
        self.a * t * t * t + self.b * t * t + self.c * t + self.d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hermite_hits_both_endpoints() {
        let cubic = CurveKind::Hermite.coefficients(3.0, 11.0, 5.0, -2.0);
        assert_relative_eq!(cubic.eval(0.0), 3.0);
        assert_relative_eq!(cubic.eval(1.0), 11.0);
    }

    #[test]
    fn hermite_tangents_match_derivative() {
        let cubic = CurveKind::Hermite.coefficients(0.0, 10.0, 4.0, -6.0);
        // p'(t) = 3a·t² + 2b·t + c
        let derivative = |t: f64| 3.0 * cubic.a * t * t + 2.0 * cubic.b * t + cubic.c;
        assert_relative_eq!(derivative(0.0), 4.0);
        assert_relative_eq!(derivative(1.0), -6.0);
    }

    #[test]
    fn bezier_interpolates_first_and_last_control() {
        let cubic = CurveKind::Bezier.coefficients(1.0, 8.0, -4.0, 7.0);
        assert_relative_eq!(cubic.eval(0.0), 1.0);
        assert_relative_eq!(cubic.eval(1.0), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn bezier_midpoint_uses_bernstein_weights() {
        let (p0, p1, p2, p3) = (0.0, 4.0, 8.0, 2.0);
        let cubic = CurveKind::Bezier.coefficients(p0, p1, p2, p3);
        let expected = 0.125 * p0 + 0.375 * p1 + 0.375 * p2 + 0.125 * p3;
        assert_relative_eq!(cubic.eval(0.5), expected, epsilon = 1e-12);
    }
}

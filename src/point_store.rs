//! Growable table of homogeneous points.
//!
//! A [`PointStore`] keeps its points column-oriented: one `Vec<f64>` per
//! coordinate row (x, y, z, w), each `capacity` long, of which the first
//! `len` columns are in use. The same store backs three views:
//!
//! - a plain point list,
//! - an edge list, read as consecutive pairs `{2k, 2k+1}`,
//! - a triangle list, read as consecutive triples `{3k, 3k+1, 3k+2}`. The
//!   order inside a triple is the winding and decides the normal's sign.
//!
//! Running out of capacity on an append grows the table according to its
//! [`GrowthPolicy`]. Growth reallocates every row, so nothing may hold on to a
//! row slice across an append.

use log::trace;

use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

const ROWS: usize = 4;

/// How much capacity to add when an append finds the table full.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GrowthPolicy {
    /// New capacity is `len + n` (an increment of 0 behaves as 1).
    Fixed(usize),
    /// New capacity is `capacity * factor`, but at least `len + 1`.
    Geometric { factor: f64 },
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy::Fixed(100)
    }
}

impl GrowthPolicy {
    fn next_capacity(self, len: usize, capacity: usize) -> usize {
        match self {
            GrowthPolicy::Fixed(n) => len + n.max(1),
            GrowthPolicy::Geometric { factor } => {
                let scaled = (capacity as f64 * factor).ceil() as usize;
                scaled.max(len + 1)
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PointStore {
    rows: [Vec<f64>; ROWS],
    len: usize,
    capacity: usize,
    policy: GrowthPolicy,
    growth_events: usize,
}

impl PointStore {
    /// An empty store with no allocated columns.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_policy(capacity, GrowthPolicy::default())
    }

    pub fn with_policy(capacity: usize, policy: GrowthPolicy) -> Self {
        Self {
            rows: std::array::from_fn(|_| vec![0.0; capacity]),
            len: 0,
            capacity,
            policy,
            growth_events: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Number of reallocations caused by appends since creation.
    pub fn growth_events(&self) -> usize {
        self.growth_events
    }

    /// Forget every point but keep the allocated columns.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Extend every row to `capacity` columns, zero-filling the new ones.
    ///
    /// Never shrinks. Existing columns, including the w row, are preserved.
    pub fn grow_to(&mut self, capacity: usize) {
        if capacity <= self.capacity {
            return;
        }
        for row in &mut self.rows {
            row.resize(capacity, 0.0);
        }
        self.capacity = capacity;
    }

    /// Append one point with w fixed at 1.
    pub fn append_point(&mut self, x: f64, y: f64, z: f64) {
        if self.len == self.capacity {
            let next = self.policy.next_capacity(self.len, self.capacity);
            trace!("point store full at {} columns, growing to {}", self.len, next);
            self.grow_to(next);
            self.growth_events += 1;
        }

        let col = self.len;
        self.rows[0][col] = x;
        self.rows[1][col] = y;
        self.rows[2][col] = z;
        self.rows[3][col] = 1.0;
        self.len += 1;
    }

    /// Append the two endpoints of a line segment, in order.
    pub fn append_edge(&mut self, x0: f64, y0: f64, z0: f64, x1: f64, y1: f64, z1: f64) {
        self.append_point(x0, y0, z0);
        self.append_point(x1, y1, z1);
    }

    /// Append a triangle. The vertex order is its winding and is kept as given.
    pub fn append_triangle(
        &mut self,
        p0: impl Into<Vec3>,
        p1: impl Into<Vec3>,
        p2: impl Into<Vec3>,
    ) {
        for p in [p0.into(), p1.into(), p2.into()] {
            self.append_point(p.x, p.y, p.z);
        }
    }

    /// The point in column `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    #[inline]
    pub fn point(&self, index: usize) -> Vec4 {
        assert!(index < self.len, "point {index} out of range (len {})", self.len);
        Vec4::new(
            self.rows[0][index],
            self.rows[1][index],
            self.rows[2][index],
            self.rows[3][index],
        )
    }

    /// The used prefix of coordinate row `row` (0 = x, 1 = y, 2 = z, 3 = w).
    pub fn row(&self, row: usize) -> &[f64] {
        &self.rows[row][..self.len]
    }

    pub fn points(&self) -> impl Iterator<Item = Vec4> + '_ {
        (0..self.len).map(move |i| self.point(i))
    }

    /// Every complete pair of consecutive points. A trailing odd point is skipped.
    pub fn edges(&self) -> impl Iterator<Item = [Vec4; 2]> + '_ {
        (0..self.len / 2).map(move |k| [self.point(2 * k), self.point(2 * k + 1)])
    }

    /// Every complete triple of consecutive points. Trailing leftovers are skipped.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec4; 3]> + '_ {
        (0..self.len / 3).map(move |k| {
            [
                self.point(3 * k),
                self.point(3 * k + 1),
                self.point(3 * k + 2),
            ]
        })
    }

    pub fn triangle_count(&self) -> usize {
        self.len / 3
    }

    pub fn edge_count(&self) -> usize {
        self.len / 2
    }
}

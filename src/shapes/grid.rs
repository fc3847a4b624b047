/// Index layout of a sampled parametric surface.
///
/// Samples are stored ring by ring: ring `r` occupies columns
/// `r * columns .. (r + 1) * columns`. Both axes are closed loops, so
/// stepping past the last ring lands on the first ring and stepping past the
/// last column lands on the first column of the same ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceGrid {
    pub rings: usize,
    pub columns: usize,
}

impl SurfaceGrid {
    pub const fn new(rings: usize, columns: usize) -> Self {
        Self { rings, columns }
    }

    pub const fn len(&self) -> usize {
        self.rings * self.columns
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat index of `(ring, column)`, wrapping both coordinates.
    #[inline]
    pub fn index(&self, ring: usize, column: usize) -> usize {
        (ring % self.rings) * self.columns + column % self.columns
    }
}

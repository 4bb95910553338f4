//! Block sizes for chunked evaluation and storage of 2D fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rectangular chunk size of a 2D `(y, x)` field.
///
/// Chunking is an evaluation/storage hint only: grids built with or without
/// chunks hold identical values. With the `parallel` feature the blocks are
/// evaluated concurrently, and the NetCDF writer uses the same sizes for
/// variable chunking.
///
/// # Example
///
/// ```
/// use domcfg_rs::types::Chunks2D;
///
/// let chunks = Chunks2D::new(5, 5);
/// assert_eq!(chunks.n_blocks((63, 63)), 13 * 13);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawChunks")]
pub struct Chunks2D {
    /// Chunk length along x (fast dimension)
    x: usize,
    /// Chunk length along y (slow dimension)
    y: usize,
}

impl Chunks2D {
    /// Create a new chunk specification.
    ///
    /// # Panics
    ///
    /// Panics if either `x` or `y` is zero.
    pub fn new(x: usize, y: usize) -> Self {
        assert!(x > 0, "x chunk must be positive, got {}", x);
        assert!(y > 0, "y chunk must be positive, got {}", y);
        Self { x, y }
    }

    /// Same chunk length in both directions.
    pub fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Chunk length along x.
    #[inline]
    pub fn x(&self) -> usize {
        self.x
    }

    /// Chunk length along y.
    #[inline]
    pub fn y(&self) -> usize {
        self.y
    }

    /// Chunk sizes clipped to a `(ny, nx)` shape, in `(y, x)` order.
    pub fn clipped(&self, (ny, nx): (usize, usize)) -> (usize, usize) {
        (self.y.min(ny.max(1)), self.x.min(nx.max(1)))
    }

    /// Number of blocks needed to cover a `(ny, nx)` shape.
    pub fn n_blocks(&self, (ny, nx): (usize, usize)) -> usize {
        ny.div_ceil(self.y) * nx.div_ceil(self.x)
    }

    /// Block ranges `(j0..j1, i0..i1)` covering a `(ny, nx)` shape, row-major.
    pub fn blocks(
        &self,
        (ny, nx): (usize, usize),
    ) -> Vec<(std::ops::Range<usize>, std::ops::Range<usize>)> {
        let mut blocks = Vec::with_capacity(self.n_blocks((ny, nx)));
        for j0 in (0..ny).step_by(self.y) {
            for i0 in (0..nx).step_by(self.x) {
                blocks.push((j0..(j0 + self.y).min(ny), i0..(i0 + self.x).min(nx)));
            }
        }
        blocks
    }
}

impl fmt::Display for Chunks2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{x: {}, y: {}}}", self.x, self.y)
    }
}

/// Unchecked form used while deserializing.
#[derive(Deserialize)]
struct RawChunks {
    x: usize,
    y: usize,
}

impl TryFrom<RawChunks> for Chunks2D {
    type Error = String;

    fn try_from(raw: RawChunks) -> Result<Self, Self::Error> {
        if raw.x == 0 || raw.y == 0 {
            return Err(format!("chunk sizes must be positive, got {{x: {}, y: {}}}", raw.x, raw.y));
        }
        Ok(Self { x: raw.x, y: raw.y })
    }
}

impl From<(usize, usize)> for Chunks2D {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

//! Dense distance matrix topology.

use super::Topology;

/// A dense n×n city distance matrix stored in row-major order.
///
/// Supports both Euclidean distance computation from city coordinates and
/// explicit distance specification. Its [`Topology::path`] is the direct
/// hop between cities; road networks with intermediate cities supply their
/// own [`Topology`] implementation.
///
/// # Examples
///
/// ```
/// use pd_routing::topology::{DistanceMatrix, Topology};
///
/// let tp = DistanceMatrix::from_coords(&[(0.0, 0.0), (3.0, 4.0)]);
/// assert!((tp.distance(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(tp.path(0, 1), vec![1]);
/// assert_eq!(tp.num_cities(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from city coordinates.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        let n = coords.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = coords[i].0 - coords[j].0;
                let dy = coords[i].1 - coords[j].1;
                let d = (dx * dx + dy * dy).sqrt();
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from city `from` to city `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Topology for DistanceMatrix {
    fn num_cities(&self) -> usize {
        self.size
    }

    fn distance(&self, from: usize, to: usize) -> f64 {
        self.get(from, to)
    }

    fn path(&self, from: usize, to: usize) -> Vec<usize> {
        if from == to {
            Vec::new()
        } else {
            vec![to]
        }
    }
}

//! City topology: the distance and path oracle.
//!
//! - [`Topology`] — trait the optimizer queries for distances and routes
//! - [`DistanceMatrix`] — dense matrix implementation with direct-hop paths

mod matrix;

pub use matrix::DistanceMatrix;

/// Black-box oracle for city-to-city distances and paths.
///
/// The optimizer core never inspects the road network itself; it only asks
/// how far apart two cities are (cost model) and which cities to traverse
/// between them (plan conversion).
pub trait Topology {
    /// Number of cities; valid city IDs are `0..num_cities()`.
    fn num_cities(&self) -> usize;

    /// Travel distance from city `from` to city `to`.
    fn distance(&self, from: usize, to: usize) -> f64;

    /// Cities to traverse from `from` to `to`, excluding `from` and ending
    /// with `to`. Empty when `from == to`.
    fn path(&self, from: usize, to: usize) -> Vec<usize>;
}

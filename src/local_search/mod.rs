//! Stochastic local search over route structures.
//!
//! - [`choose_neighbours`] — candidate generation (task relocation and
//!   intra-vehicle reordering), feasibility-filtered
//! - [`optimize`] / [`SlsConfig`] — the anytime, time-budgeted search driver

mod driver;
mod neighborhood;

pub use driver::{optimize, SlsConfig};
pub use neighborhood::choose_neighbours;

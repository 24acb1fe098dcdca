//! Feasibility predicates and the transport cost model.
//!
//! - [`respects_capacity`] / [`respects_precedence`] / [`is_feasible`] —
//!   pure predicates over a route structure
//! - [`total_cost`] / [`vehicle_distance`] — cost of a route structure

mod constraints;
mod cost;

pub use constraints::{is_feasible, respects_capacity, respects_precedence};
pub use cost::{total_cost, vehicle_distance};

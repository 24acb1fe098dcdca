//! # pd-routing
//!
//! Pickup-and-delivery vehicle routing (PDVRP) via anytime stochastic local
//! search. Tasks carry a pickup city, a delivery city, a weight, and a
//! reward; capacity-constrained vehicles serve them through ordered
//! pickup/delivery action sequences, optimized to minimize total travel
//! cost within a wall-clock budget.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Task, Vehicle, Action, Instance, Solution, plan Steps)
//! - [`topology`] — City distance/path oracle ([`Topology`](topology::Topology) trait, dense matrix)
//! - [`evaluation`] — Feasibility predicates and the transport cost model
//! - [`constructive`] — Initial solution construction
//! - [`local_search`] — Neighborhood generation and the anytime SLS driver

pub mod constructive;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod topology;

//! Domain model types for pickup-and-delivery routing.
//!
//! Provides the core abstractions: transport tasks, capacity-constrained
//! vehicles, pickup/delivery actions, the immutable problem context, the
//! linked route structure the search rewrites, and the conversion of a
//! finished route structure into executable plans.

mod action;
mod instance;
mod plan;
mod solution;
mod task;
mod vehicle;

pub use action::{Action, ActionKind};
pub use instance::Instance;
pub use plan::{convert_to_plans, Step};
pub use solution::{ActionWalk, Solution};
pub use task::Task;
pub use vehicle::Vehicle;

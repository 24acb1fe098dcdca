//! Construction of initial (seed) solutions.
//!
//! - [`distribute_evenly`] — round-robin assignment with a biggest-vehicle
//!   fallback for overweight tasks

mod seed;

pub use seed::distribute_evenly;

//! Transport task type.

use serde::{Deserialize, Serialize};

/// A transport demand: carry a load from a pickup city to a delivery city.
///
/// Tasks are immutable and identified by a dense ID (`0..num_tasks`); the
/// optimizer only ever reads them.
///
/// # Examples
///
/// ```
/// use pd_routing::models::Task;
///
/// let t = Task::new(0, 2, 5, 30).with_reward(120.0);
/// assert_eq!(t.pickup_city(), 2);
/// assert_eq!(t.delivery_city(), 5);
/// assert_eq!(t.weight(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: usize,
    pickup_city: usize,
    delivery_city: usize,
    weight: i32,
    reward: f64,
}

impl Task {
    /// Creates a task with the given ID, cities, and weight.
    ///
    /// Default reward is zero.
    pub fn new(id: usize, pickup_city: usize, delivery_city: usize, weight: i32) -> Self {
        Self {
            id,
            pickup_city,
            delivery_city,
            weight,
            reward: 0.0,
        }
    }

    /// Sets the reward paid for delivering this task.
    pub fn with_reward(mut self, reward: f64) -> Self {
        self.reward = reward;
        self
    }

    /// Task ID (dense, `0..num_tasks`).
    pub fn id(&self) -> usize {
        self.id
    }

    /// City where the load is picked up.
    pub fn pickup_city(&self) -> usize {
        self.pickup_city
    }

    /// City where the load is delivered.
    pub fn delivery_city(&self) -> usize {
        self.delivery_city
    }

    /// Load weight in capacity units.
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Reward paid for delivering this task.
    pub fn reward(&self) -> f64 {
        self.reward
    }
}

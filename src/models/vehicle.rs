//! Vehicle type with capacity and cost parameters.

use serde::{Deserialize, Serialize};

/// A transporter with a load capacity, a travel cost rate, and a current
/// city it departs from.
///
/// Vehicles are immutable for the duration of one optimization call and
/// identified by a dense ID (`0..num_vehicles`).
///
/// # Examples
///
/// ```
/// use pd_routing::models::Vehicle;
///
/// let v = Vehicle::new(0, 30)
///     .with_current_city(4)
///     .with_cost_per_distance(5.0);
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.capacity(), 30);
/// assert_eq!(v.current_city(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: usize,
    capacity: i32,
    current_city: usize,
    cost_per_distance: f64,
}

impl Vehicle {
    /// Creates a vehicle with the given ID and capacity.
    ///
    /// Default: current city 0, cost_per_distance = 1.0.
    pub fn new(id: usize, capacity: i32) -> Self {
        Self {
            id,
            capacity,
            current_city: 0,
            cost_per_distance: 1.0,
        }
    }

    /// Sets the city this vehicle departs from.
    pub fn with_current_city(mut self, city: usize) -> Self {
        self.current_city = city;
        self
    }

    /// Sets cost per unit distance.
    pub fn with_cost_per_distance(mut self, cost: f64) -> Self {
        self.cost_per_distance = cost;
        self
    }

    /// Vehicle ID (dense, `0..num_vehicles`).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum carried weight at any point of the route.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// City the vehicle currently sits in (implicit route start).
    pub fn current_city(&self) -> usize {
        self.current_city
    }

    /// Cost per unit distance traveled.
    pub fn cost_per_distance(&self) -> f64 {
        self.cost_per_distance
    }
}

//! Immutable problem context passed into every optimizer call.

use crate::models::{Action, ActionKind, Task, Vehicle};
use crate::topology::Topology;

/// The read-only catalog an optimization call works against: the task
/// list, the fleet, and the city topology oracle.
///
/// Task and vehicle IDs are assumed dense (`0..len`), matching their slice
/// positions; the route structure relies on this to index its arenas.
///
/// # Examples
///
/// ```
/// use pd_routing::models::{Action, Instance, Task, Vehicle};
/// use pd_routing::topology::DistanceMatrix;
///
/// let tasks = vec![Task::new(0, 1, 2, 10)];
/// let vehicles = vec![Vehicle::new(0, 30)];
/// let topology = DistanceMatrix::from_coords(&[(0.0, 0.0), (3.0, 4.0), (3.0, 0.0)]);
///
/// let instance = Instance::new(&tasks, &vehicles, &topology);
/// assert_eq!(instance.num_tasks(), 1);
/// assert_eq!(instance.action_city(Action::delivery(0)), 2);
/// ```
#[derive(Clone, Copy)]
pub struct Instance<'a> {
    tasks: &'a [Task],
    vehicles: &'a [Vehicle],
    topology: &'a dyn Topology,
}

impl<'a> Instance<'a> {
    /// Creates an instance over the given catalog.
    pub fn new(tasks: &'a [Task], vehicles: &'a [Vehicle], topology: &'a dyn Topology) -> Self {
        Self {
            tasks,
            vehicles,
            topology,
        }
    }

    /// All tasks, indexed by task ID.
    pub fn tasks(&self) -> &'a [Task] {
        self.tasks
    }

    /// All vehicles, indexed by vehicle ID.
    pub fn vehicles(&self) -> &'a [Vehicle] {
        self.vehicles
    }

    /// Number of tasks in the catalog.
    pub fn num_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Number of vehicles in the fleet.
    pub fn num_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    /// Looks up a task by ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    pub fn task(&self, id: usize) -> &'a Task {
        &self.tasks[id]
    }

    /// Looks up a vehicle by ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    pub fn vehicle(&self, id: usize) -> &'a Vehicle {
        &self.vehicles[id]
    }

    /// The city topology oracle.
    pub fn topology(&self) -> &'a dyn Topology {
        self.topology
    }

    /// Travel distance between two cities.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.topology.distance(from, to)
    }

    /// City where the given action takes place.
    pub fn action_city(&self, action: Action) -> usize {
        let task = self.task(action.task());
        match action.kind() {
            ActionKind::Pickup => task.pickup_city(),
            ActionKind::Delivery => task.delivery_city(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::DistanceMatrix;

    #[test]
    fn test_instance_accessors() {
        let tasks = vec![Task::new(0, 0, 1, 5), Task::new(1, 1, 2, 8)];
        let vehicles = vec![Vehicle::new(0, 10), Vehicle::new(1, 20)];
        let tp = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let instance = Instance::new(&tasks, &vehicles, &tp);

        assert_eq!(instance.num_tasks(), 2);
        assert_eq!(instance.num_vehicles(), 2);
        assert_eq!(instance.task(1).weight(), 8);
        assert_eq!(instance.vehicle(1).capacity(), 20);
        assert!((instance.distance(0, 2) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_action_city() {
        let tasks = vec![Task::new(0, 2, 0, 5)];
        let vehicles = vec![Vehicle::new(0, 10)];
        let tp = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let instance = Instance::new(&tasks, &vehicles, &tp);

        assert_eq!(instance.action_city(Action::pickup(0)), 2);
        assert_eq!(instance.action_city(Action::delivery(0)), 0);
    }
}

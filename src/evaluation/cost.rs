//! Transport cost of a route structure.

use crate::models::{Instance, Solution};

/// Distance traveled by one vehicle's action sequence, starting from the
/// vehicle's current city.
///
/// Walks the sequence accumulating point-to-point distances between
/// consecutive action cities. A vehicle with no actions travels zero.
pub fn vehicle_distance(instance: &Instance, solution: &Solution, vehicle: usize) -> f64 {
    let mut distance = 0.0;
    let mut previous = instance.vehicle(vehicle).current_city();
    for action in solution.actions(vehicle) {
        let city = instance.action_city(action);
        distance += instance.distance(previous, city);
        previous = city;
    }
    distance
}

/// Total transport cost of a route structure: the sum over vehicles of
/// traveled distance times that vehicle's cost per distance unit.
///
/// This is the value the local search minimizes and its single most
/// frequently called operation; it is O(total route length).
///
/// # Examples
///
/// ```
/// use pd_routing::evaluation::total_cost;
/// use pd_routing::models::{Instance, Solution, Task, Vehicle};
/// use pd_routing::topology::DistanceMatrix;
///
/// let tasks = vec![Task::new(0, 1, 2, 10)];
/// let vehicles = vec![Vehicle::new(0, 30).with_cost_per_distance(5.0)];
/// let topology = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let instance = Instance::new(&tasks, &vehicles, &topology);
///
/// let mut sol = Solution::new(1, 1);
/// sol.append_task(0, 0);
/// // 0→1 (pickup) then 1→2 (delivery): distance 2, at 5.0 per unit.
/// assert!((total_cost(&instance, &sol) - 10.0).abs() < 1e-10);
/// ```
pub fn total_cost(instance: &Instance, solution: &Solution) -> f64 {
    instance
        .vehicles()
        .iter()
        .map(|v| vehicle_distance(instance, solution, v.id()) * v.cost_per_distance())
        .sum()
}

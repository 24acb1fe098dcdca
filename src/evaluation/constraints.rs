//! Capacity and precedence constraint checking.

use crate::models::{Instance, Solution};

/// Returns `true` if no vehicle ever carries more weight than its
/// capacity.
///
/// Walks each vehicle's action sequence accumulating signed weight (added
/// at pickup, subtracted at delivery) and fails on the first prefix whose
/// running sum exceeds the vehicle's capacity.
///
/// # Examples
///
/// ```
/// use pd_routing::evaluation::respects_capacity;
/// use pd_routing::models::{Instance, Solution, Task, Vehicle};
/// use pd_routing::topology::DistanceMatrix;
///
/// let tasks = vec![Task::new(0, 0, 1, 40)];
/// let vehicles = vec![Vehicle::new(0, 30)];
/// let topology = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0)]);
/// let instance = Instance::new(&tasks, &vehicles, &topology);
///
/// let mut sol = Solution::new(1, 1);
/// sol.append_task(0, 0);
/// assert!(!respects_capacity(&instance, &sol));
/// ```
pub fn respects_capacity(instance: &Instance, solution: &Solution) -> bool {
    for vehicle in instance.vehicles() {
        let mut carried = 0i32;
        for action in solution.actions(vehicle.id()) {
            let weight = instance.task(action.task()).weight();
            if action.is_pickup() {
                carried += weight;
            } else {
                carried -= weight;
            }
            if carried > vehicle.capacity() {
                return false;
            }
        }
    }
    true
}

/// Returns `true` if every delivery is preceded by its task's pickup
/// within the same vehicle's sequence.
///
/// A delivery whose task was never picked up earlier in the walk — whether
/// the pickup comes later or sits on another vehicle — fails immediately.
pub fn respects_precedence(instance: &Instance, solution: &Solution) -> bool {
    for vehicle in instance.vehicles() {
        let mut picked = vec![false; instance.num_tasks()];
        for action in solution.actions(vehicle.id()) {
            if !picked[action.task()] {
                if !action.is_pickup() {
                    return false;
                }
                picked[action.task()] = true;
            }
        }
    }
    true
}

/// A route structure is feasible iff it respects both the capacity and
/// the precedence constraints.
pub fn is_feasible(instance: &Instance, solution: &Solution) -> bool {
    respects_capacity(instance, solution) && respects_precedence(instance, solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, Vehicle};
    use crate::topology::DistanceMatrix;

    fn line_topology() -> DistanceMatrix {
        DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])
    }

    /// 2 vehicles (capacity 10 and 20, both at city 0), task 0: 0→1 weight
    /// 5, task 1: 1→2 weight 8.
    fn two_task_setup() -> (Vec<Task>, Vec<Vehicle>) {
        let tasks = vec![Task::new(0, 0, 1, 5), Task::new(1, 1, 2, 8)];
        let vehicles = vec![Vehicle::new(0, 10), Vehicle::new(1, 20)];
        (tasks, vehicles)
    }

    #[test]
    fn test_sequential_seed_is_feasible() {
        let (tasks, vehicles) = two_task_setup();
        let tp = line_topology();
        let instance = Instance::new(&tasks, &vehicles, &tp);

        // [P0, D0, P1, D1]: carried weight peaks at 8 <= 10.
        let mut sol = Solution::new(2, 2);
        sol.append_task(0, 0);
        sol.append_task(0, 1);
        assert!(respects_capacity(&instance, &sol));
        assert!(respects_precedence(&instance, &sol));
        assert!(is_feasible(&instance, &sol));
    }

    #[test]
    fn test_overlapping_loads_exceed_capacity() {
        let (tasks, vehicles) = two_task_setup();
        let tp = line_topology();
        let instance = Instance::new(&tasks, &vehicles, &tp);

        // Reorder [P0, D0, P1, D1] into [P0, P1, D0, D1]: prefix load
        // 5 + 8 = 13 > 10, so the checker must reject it.
        let mut sol = Solution::new(2, 2);
        sol.append_task(0, 0);
        sol.append_task(0, 1);
        sol.swap_positions(0, 2, 3);
        assert!(respects_precedence(&instance, &sol));
        assert!(!respects_capacity(&instance, &sol));
        assert!(!is_feasible(&instance, &sol));
    }

    #[test]
    fn test_same_reorder_fits_bigger_vehicle() {
        let (tasks, vehicles) = two_task_setup();
        let tp = line_topology();
        let instance = Instance::new(&tasks, &vehicles, &tp);

        // The overlapping order is fine on vehicle 1 (capacity 20).
        let mut sol = Solution::new(2, 2);
        sol.append_task(1, 0);
        sol.append_task(1, 1);
        sol.swap_positions(1, 2, 3);
        assert!(is_feasible(&instance, &sol));
    }

    #[test]
    fn test_delivery_before_pickup_rejected() {
        let (tasks, vehicles) = two_task_setup();
        let tp = line_topology();
        let instance = Instance::new(&tasks, &vehicles, &tp);

        let mut sol = Solution::new(2, 2);
        sol.append_task(0, 0);
        sol.swap_positions(0, 1, 2);
        assert!(!respects_precedence(&instance, &sol));
    }

    #[test]
    fn test_task_heavier_than_every_vehicle() {
        let tasks = vec![Task::new(0, 0, 1, 100)];
        let vehicles = vec![Vehicle::new(0, 10), Vehicle::new(1, 20)];
        let tp = line_topology();
        let instance = Instance::new(&tasks, &vehicles, &tp);

        // append_task succeeds structurally; the checker rejects the result.
        let mut sol = Solution::new(2, 1);
        sol.append_task(1, 0);
        assert!(!respects_capacity(&instance, &sol));
        assert!(respects_precedence(&instance, &sol));
    }

    #[test]
    fn test_empty_solution_is_feasible() {
        let (tasks, vehicles) = two_task_setup();
        let tp = line_topology();
        let instance = Instance::new(&tasks, &vehicles, &tp);
        assert!(is_feasible(&instance, &Solution::new(2, 2)));
    }
}

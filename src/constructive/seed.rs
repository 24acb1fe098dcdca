//! Even round-robin seed construction.

use crate::models::{Instance, Solution};

/// Builds a seed solution by distributing tasks evenly across vehicles,
/// round-robin by `task.id % num_vehicles`.
///
/// A task heavier than its evenly-assigned vehicle's capacity goes to the
/// highest-capacity vehicle instead. Each task's pickup/delivery pair is
/// appended sequentially, so the seed carries at most one task at a time
/// per vehicle — feasible whenever every task fits some vehicle. A task
/// heavier than *every* vehicle still gets appended to the biggest one;
/// the constraint checker rejects such solutions downstream, which is how
/// callers observe degenerate input.
///
/// # Examples
///
/// ```
/// use pd_routing::constructive::distribute_evenly;
/// use pd_routing::evaluation::is_feasible;
/// use pd_routing::models::{Instance, Task, Vehicle};
/// use pd_routing::topology::DistanceMatrix;
///
/// let tasks = vec![Task::new(0, 0, 1, 5), Task::new(1, 1, 2, 8)];
/// let vehicles = vec![Vehicle::new(0, 10), Vehicle::new(1, 20)];
/// let topology = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let instance = Instance::new(&tasks, &vehicles, &topology);
///
/// let seed = distribute_evenly(&instance);
/// assert!(is_feasible(&instance, &seed));
/// assert!(seed.has_actions(0));
/// assert!(seed.has_actions(1));
/// ```
pub fn distribute_evenly(instance: &Instance) -> Solution {
    let mut solution = Solution::new(instance.num_vehicles(), instance.num_tasks());
    let Some(biggest) = instance.vehicles().iter().max_by_key(|v| v.capacity()) else {
        return solution;
    };

    for task in instance.tasks() {
        let assigned = instance.vehicle(task.id() % instance.num_vehicles());
        let vehicle = if task.weight() <= assigned.capacity() {
            assigned
        } else {
            biggest
        };
        solution.append_task(vehicle.id(), task.id());
    }
    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::is_feasible;
    use crate::models::{Task, Vehicle};
    use crate::topology::DistanceMatrix;

    fn line_topology(n: usize) -> DistanceMatrix {
        DistanceMatrix::from_coords(&(0..n).map(|i| (i as f64, 0.0)).collect::<Vec<_>>())
    }

    #[test]
    fn test_round_robin_by_task_id() {
        let tasks: Vec<Task> = (0..4).map(|id| Task::new(id, 0, 1, 5)).collect();
        let vehicles = vec![Vehicle::new(0, 10), Vehicle::new(1, 10)];
        let tp = line_topology(2);
        let instance = Instance::new(&tasks, &vehicles, &tp);

        let seed = distribute_evenly(&instance);
        assert_eq!(seed.tasks(0).collect::<Vec<_>>(), vec![0, 0, 2, 2]);
        assert_eq!(seed.tasks(1).collect::<Vec<_>>(), vec![1, 1, 3, 3]);
        assert!(is_feasible(&instance, &seed));
    }

    #[test]
    fn test_overweight_task_goes_to_biggest_vehicle() {
        // Task 0 would land on vehicle 0 (capacity 10) but weighs 15.
        let tasks = vec![Task::new(0, 0, 1, 15), Task::new(1, 1, 0, 5)];
        let vehicles = vec![Vehicle::new(0, 10), Vehicle::new(1, 20)];
        let tp = line_topology(2);
        let instance = Instance::new(&tasks, &vehicles, &tp);

        let seed = distribute_evenly(&instance);
        assert!(!seed.has_actions(0));
        assert_eq!(seed.tasks(1).collect::<Vec<_>>(), vec![0, 0, 1, 1]);
        assert!(is_feasible(&instance, &seed));
    }

    #[test]
    fn test_no_tasks_yields_empty_solution() {
        let tasks: Vec<Task> = vec![];
        let vehicles = vec![Vehicle::new(0, 10)];
        let tp = line_topology(1);
        let instance = Instance::new(&tasks, &vehicles, &tp);

        let seed = distribute_evenly(&instance);
        assert!(!seed.has_actions(0));
    }

    #[test]
    fn test_degenerate_task_still_appended() {
        let tasks = vec![Task::new(0, 0, 1, 100)];
        let vehicles = vec![Vehicle::new(0, 10), Vehicle::new(1, 20)];
        let tp = line_topology(2);
        let instance = Instance::new(&tasks, &vehicles, &tp);

        let seed = distribute_evenly(&instance);
        assert!(seed.has_actions(1));
        assert!(!is_feasible(&instance, &seed));
    }
}

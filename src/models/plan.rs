//! Conversion of a route structure into executable per-vehicle plans.

use serde::{Deserialize, Serialize};

use super::{ActionKind, Instance, Solution};

/// One executable step of a vehicle's plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Drive to the given city.
    MoveTo(usize),
    /// Pick the given task up (the vehicle is already in its pickup city).
    Pickup(usize),
    /// Deliver the given task.
    Delivery(usize),
}

/// Converts a route structure into one ordered step list per vehicle,
/// indexed by vehicle ID.
///
/// Walks each vehicle's action sequence and splices in the `MoveTo` steps
/// the [`Topology`](crate::topology::Topology) path oracle prescribes
/// between consecutive distinct action cities. Actions taking place in the
/// city the vehicle already stands in get no move steps.
///
/// # Examples
///
/// ```
/// use pd_routing::models::{convert_to_plans, Instance, Solution, Step, Task, Vehicle};
/// use pd_routing::topology::DistanceMatrix;
///
/// let tasks = vec![Task::new(0, 0, 1, 10)];
/// let vehicles = vec![Vehicle::new(0, 30)];
/// let topology = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0)]);
/// let instance = Instance::new(&tasks, &vehicles, &topology);
///
/// let mut sol = Solution::new(1, 1);
/// sol.append_task(0, 0);
///
/// let plans = convert_to_plans(&instance, &sol);
/// assert_eq!(
///     plans[0],
///     vec![Step::Pickup(0), Step::MoveTo(1), Step::Delivery(0)],
/// );
/// ```
pub fn convert_to_plans(instance: &Instance, solution: &Solution) -> Vec<Vec<Step>> {
    instance
        .vehicles()
        .iter()
        .map(|vehicle| {
            let mut steps = Vec::new();
            let mut previous = vehicle.current_city();
            for action in solution.actions(vehicle.id()) {
                let city = instance.action_city(action);
                if city != previous {
                    for hop in instance.topology().path(previous, city) {
                        steps.push(Step::MoveTo(hop));
                    }
                }
                steps.push(match action.kind() {
                    ActionKind::Pickup => Step::Pickup(action.task()),
                    ActionKind::Delivery => Step::Delivery(action.task()),
                });
                previous = city;
            }
            steps
        })
        .collect()
}

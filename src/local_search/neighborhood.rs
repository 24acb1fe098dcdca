//! Neighborhood generation: one-move variations of a route structure.
//!
//! # Moves
//!
//! Given a current solution and a randomly chosen reference vehicle `vi`
//! with a nonempty route, the neighborhood contains every feasible
//! solution reachable by exactly one of:
//!
//! - **Task relocation** — move one of `vi`'s tasks to the head of another
//!   vehicle `vj`, optionally reordering the freshly inserted
//!   pickup/delivery pair to every position pair within `vj`;
//! - **Intra-vehicle reordering** — exchange two actions of `vi`.
//!
//! The space is intentionally over-generated: infeasible candidates are
//! produced and silently dropped by the constraint checker.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::evaluation::is_feasible;
use crate::models::{Instance, Solution};

/// Produces the feasible neighbors of `current` reachable by one relocate
/// or swap move.
///
/// The reference vehicle is picked uniformly at random among vehicles with
/// at least one action; if no vehicle has any, the neighborhood is empty
/// and the search stalls at the current solution. Every returned solution
/// is an independent copy and passes both constraint predicates.
///
/// # Examples
///
/// ```
/// use pd_routing::constructive::distribute_evenly;
/// use pd_routing::evaluation::is_feasible;
/// use pd_routing::local_search::choose_neighbours;
/// use pd_routing::models::{Instance, Task, Vehicle};
/// use pd_routing::topology::DistanceMatrix;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let tasks = vec![Task::new(0, 0, 1, 5), Task::new(1, 1, 2, 8)];
/// let vehicles = vec![Vehicle::new(0, 10), Vehicle::new(1, 20)];
/// let topology = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let instance = Instance::new(&tasks, &vehicles, &topology);
///
/// let seed = distribute_evenly(&instance);
/// let mut rng = StdRng::seed_from_u64(42);
/// let neighbours = choose_neighbours(&instance, &seed, &mut rng);
/// assert!(neighbours.iter().all(|n| is_feasible(&instance, n)));
/// ```
pub fn choose_neighbours<R: Rng>(
    instance: &Instance,
    current: &Solution,
    rng: &mut R,
) -> Vec<Solution> {
    let mut order: Vec<usize> = (0..instance.num_vehicles()).collect();
    order.shuffle(rng);
    let Some(vi) = order.iter().copied().find(|&v| current.has_actions(v)) else {
        return Vec::new();
    };

    let mut neighbours = Vec::new();

    // Relocate each of vi's tasks to every other vehicle. The plain
    // relocation lands the pair at the head of vj; when the task fits vj
    // at all, additionally try every position pair for the inserted
    // pickup/delivery within vj's schedule.
    let tasks: Vec<usize> = current
        .actions(vi)
        .filter(|a| a.is_pickup())
        .map(|a| a.task())
        .collect();
    for task in tasks {
        for vj in order.iter().copied().filter(|&v| v != vi) {
            let mut relocated = current.clone();
            relocated.relocate_task(task, vi, vj);
            if is_feasible(instance, &relocated) {
                neighbours.push(relocated.clone());
            }

            if instance.task(task).weight() <= instance.vehicle(vj).capacity() {
                // Position bounds use vj's length before the relocation.
                let len = current.action_count(vj);
                for p1 in 1..=len {
                    for p2 in (p1 + 1)..=(len + 1) {
                        // Move the delivery out of slot 2 first; p1 < p2
                        // keeps the second swap from touching it.
                        let mut candidate = relocated.clone();
                        if p2 > 2 {
                            candidate.swap_positions(vj, 2, p2);
                        }
                        if p1 > 1 {
                            candidate.swap_positions(vj, 1, p1);
                        }
                        if is_feasible(instance, &candidate) {
                            neighbours.push(candidate);
                        }
                    }
                }
            }
        }
    }

    // Exchange every pair of actions within vi.
    let len = current.action_count(vi);
    for p1 in 1..len {
        for p2 in (p1 + 1)..=len {
            let mut candidate = current.clone();
            candidate.swap_positions(vi, p1, p2);
            if is_feasible(instance, &candidate) {
                neighbours.push(candidate);
            }
        }
    }

    neighbours
}

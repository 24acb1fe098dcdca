//! Anytime stochastic local search driver.

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluation::total_cost;
use crate::models::{Instance, Solution};

use super::choose_neighbours;

/// Tuning knobs of the local search.
///
/// # Examples
///
/// ```
/// use pd_routing::local_search::SlsConfig;
///
/// let config = SlsConfig::new(0.5, 0.8).expect("valid");
/// assert_eq!(config.choice_probability(), 0.5);
/// assert!(SlsConfig::new(1.5, 0.9).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlsConfig {
    choice_probability: f64,
    time_margin: f64,
}

impl SlsConfig {
    /// Creates a config.
    ///
    /// `choice_probability` is the probability of committing to a best
    /// improving neighbor instead of random-walking; `time_margin` is the
    /// fraction of the budget actually spent searching, the rest being a
    /// safety reserve so the call returns before the caller's hard
    /// deadline. Returns `None` unless both lie in `[0, 1]`.
    pub fn new(choice_probability: f64, time_margin: f64) -> Option<Self> {
        if !(0.0..=1.0).contains(&choice_probability) || !(0.0..=1.0).contains(&time_margin) {
            return None;
        }
        Some(Self {
            choice_probability,
            time_margin,
        })
    }

    /// Probability of accepting a best improving neighbor.
    pub fn choice_probability(&self) -> f64 {
        self.choice_probability
    }

    /// Fraction of the time budget spent searching.
    pub fn time_margin(&self) -> f64 {
        self.time_margin
    }
}

impl Default for SlsConfig {
    /// Accept improving moves with probability 0.7, search for 90% of the
    /// budget.
    fn default() -> Self {
        Self {
            choice_probability: 0.7,
            time_margin: 0.9,
        }
    }
}

/// Runs the anytime local search from `seed` and returns the best feasible
/// solution found within the time budget.
///
/// Each iteration generates the neighborhood of the incumbent, picks the
/// next incumbent with a stochastic local-choice rule (which may
/// accept a worsening move — that is how the search leaves local minima),
/// and tracks the cheapest solution seen. The loop polls the wall clock
/// before every iteration and stops once `time_margin × budget` has
/// elapsed, so the returned solution is never worse than the seed and is
/// available strictly before the caller's deadline.
///
/// An empty neighborhood leaves the incumbent unchanged for that
/// iteration; it is not an error.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use pd_routing::constructive::distribute_evenly;
/// use pd_routing::evaluation::total_cost;
/// use pd_routing::local_search::{optimize, SlsConfig};
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
/// let seed_cost = total_cost(&instance, &seed);
/// let mut rng = StdRng::seed_from_u64(42);
/// let best = optimize(
///     &instance,
///     seed,
///     Duration::from_millis(30),
///     &SlsConfig::default(),
///     &mut rng,
/// );
/// assert!(total_cost(&instance, &best) <= seed_cost);
/// ```
pub fn optimize<R: Rng>(
    instance: &Instance,
    seed: Solution,
    budget: Duration,
    config: &SlsConfig,
    rng: &mut R,
) -> Solution {
    let deadline = budget.mul_f64(config.time_margin());
    let start = Instant::now();

    let mut best_cost = total_cost(instance, &seed);
    let mut best = seed.clone();
    let mut current = seed;
    let mut current_cost = best_cost;
    debug!(cost = best_cost, "starting local search");

    let mut iterations = 0u64;
    while start.elapsed() < deadline {
        iterations += 1;
        let neighbours = choose_neighbours(instance, &current, rng);
        if neighbours.is_empty() {
            continue;
        }

        current = local_choice(instance, neighbours, current_cost, config, rng);
        current_cost = total_cost(instance, &current);
        if current_cost < best_cost {
            best = current.clone();
            best_cost = current_cost;
            debug!(cost = best_cost, iterations, "improved best solution");
        }
    }

    debug!(cost = best_cost, iterations, "local search finished");
    best
}

/// Picks the next incumbent from a nonempty neighborhood.
///
/// With probability `choice_probability`, and only when the cheapest
/// neighbors strictly improve on the incumbent's cost, returns one of
/// those cheapest neighbors uniformly at random (costs tie on exact
/// equality). Otherwise returns a uniformly random neighbor — the
/// diversification step, which may worsen the incumbent.
fn local_choice<R: Rng>(
    instance: &Instance,
    mut neighbours: Vec<Solution>,
    current_cost: f64,
    config: &SlsConfig,
    rng: &mut R,
) -> Solution {
    let mut min_cost = f64::INFINITY;
    let mut tied_best: Vec<usize> = Vec::new();
    for (i, neighbour) in neighbours.iter().enumerate() {
        let cost = total_cost(instance, neighbour);
        if cost < min_cost {
            min_cost = cost;
            tied_best.clear();
            tied_best.push(i);
        } else if cost == min_cost {
            tied_best.push(i);
        }
    }

    let pick = if min_cost < current_cost && rng.random_bool(config.choice_probability()) {
        tied_best[rng.random_range(0..tied_best.len())]
    } else {
        rng.random_range(0..neighbours.len())
    };
    neighbours.swap_remove(pick)
}

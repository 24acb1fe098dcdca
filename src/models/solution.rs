//! The route structure: per-vehicle linked sequences of actions.

use std::fmt;

use super::Action;

/// The mutable routing state the local search rewrites: for every vehicle
/// an ordered singly-linked sequence of pickup/delivery actions.
///
/// Stored as two arenas keyed by dense IDs — `first[vehicle]` is the head
/// of a vehicle's sequence and `next[action.index()]` the successor link —
/// so the structure is a forest: vehicles are roots, actions are nodes,
/// and `next` is the only edge relation. Every mutation primitive keeps
/// each action with at most one predecessor and one successor; nothing
/// detects a corrupted forest after the fact.
///
/// `Clone` copies only the two link arenas. Task and vehicle payloads live
/// in the [`Instance`](super::Instance) and are shared, so cloning a
/// candidate during neighborhood exploration is cheap and the clone is
/// fully independent of the original.
///
/// None of the structural operations validate feasibility; the
/// [`evaluation`](crate::evaluation) predicates do that separately.
///
/// # Examples
///
/// ```
/// use pd_routing::models::{Action, Solution};
///
/// let mut sol = Solution::new(2, 2);
/// sol.append_task(0, 0);
/// sol.append_task(0, 1);
/// assert_eq!(sol.action_count(0), 4);
///
/// sol.relocate_task(1, 0, 1);
/// assert_eq!(sol.action_count(0), 2);
/// assert_eq!(
///     sol.actions(1).collect::<Vec<_>>(),
///     vec![Action::pickup(1), Action::delivery(1)],
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Head of each vehicle's action sequence, indexed by vehicle ID.
    first: Vec<Option<Action>>,
    /// Successor of each action, indexed by `Action::index()`.
    next: Vec<Option<Action>>,
}

impl Solution {
    /// Creates an empty route structure for the given fleet and task
    /// catalog sizes.
    pub fn new(num_vehicles: usize, num_tasks: usize) -> Self {
        Self {
            first: vec![None; num_vehicles],
            next: vec![None; num_tasks * 2],
        }
    }

    /// First action of the given vehicle's sequence.
    pub fn first_action(&self, vehicle: usize) -> Option<Action> {
        self.first[vehicle]
    }

    /// Successor of the given action within its vehicle's sequence.
    pub fn next_action(&self, action: Action) -> Option<Action> {
        self.next[action.index()]
    }

    fn set_first(&mut self, vehicle: usize, action: Option<Action>) {
        self.first[vehicle] = action;
    }

    fn set_next(&mut self, action: Action, next: Option<Action>) {
        self.next[action.index()] = next;
    }

    /// Returns `true` if the vehicle has at least one action.
    pub fn has_actions(&self, vehicle: usize) -> bool {
        self.first[vehicle].is_some()
    }

    /// Number of actions in the vehicle's sequence.
    pub fn action_count(&self, vehicle: usize) -> usize {
        self.actions(vehicle).count()
    }

    /// Lazy in-order traversal of a vehicle's actions.
    ///
    /// The iterator borrows the solution; call again to restart.
    pub fn actions(&self, vehicle: usize) -> ActionWalk<'_> {
        ActionWalk {
            solution: self,
            current: self.first[vehicle],
        }
    }

    /// Tasks touched by a vehicle's sequence, in sequence order.
    ///
    /// Each assigned task appears twice — once for its pickup and once for
    /// its delivery.
    pub fn tasks(&self, vehicle: usize) -> impl Iterator<Item = usize> + '_ {
        self.actions(vehicle).map(|a| a.task())
    }

    /// Appends `Pickup(task)` then `Delivery(task)` at the tail of the
    /// vehicle's sequence.
    ///
    /// Used to seed a solution incrementally; performs no feasibility
    /// check. The task must not already be assigned anywhere.
    pub fn append_task(&mut self, vehicle: usize, task: usize) {
        let pickup = Action::pickup(task);
        let delivery = Action::delivery(task);

        match self.actions(vehicle).last() {
            None => self.set_first(vehicle, Some(pickup)),
            Some(tail) => self.set_next(tail, Some(pickup)),
        }
        self.set_next(pickup, Some(delivery));
        self.set_next(delivery, None);
    }

    /// Removes both actions of `task` from `from`'s sequence and reinserts
    /// them, pickup then delivery, at the head of `to`'s sequence.
    ///
    /// The task must currently be assigned to `from`; no feasibility check
    /// is performed.
    pub fn relocate_task(&mut self, task: usize, from: usize, to: usize) {
        self.remove_action(from, Action::delivery(task));
        self.remove_action(from, Action::pickup(task));
        self.push_front(to, Action::delivery(task));
        self.push_front(to, Action::pickup(task));
    }

    /// Unlinks `target` from the vehicle's chain, if present.
    fn remove_action(&mut self, vehicle: usize, target: Action) {
        let Some(head) = self.first[vehicle] else {
            return;
        };
        if head == target {
            self.set_first(vehicle, self.next_action(target));
            return;
        }
        let mut current = head;
        while let Some(following) = self.next_action(current) {
            if following == target {
                self.set_next(current, self.next_action(target));
                return;
            }
            current = following;
        }
    }

    /// Links `action` in as the new head of the vehicle's chain.
    fn push_front(&mut self, vehicle: usize, action: Action) {
        self.set_next(action, self.first[vehicle]);
        self.set_first(vehicle, Some(action));
    }

    /// Exchanges the actions at 1-based positions `pos_i` and `pos_j`
    /// (`pos_i < pos_j`) within one vehicle's sequence, relinking the
    /// neighbors of both whether or not the positions are adjacent.
    ///
    /// # Panics
    ///
    /// Panics if `pos_i < 1`, `pos_i >= pos_j`, or `pos_j` exceeds the
    /// sequence length.
    pub fn swap_positions(&mut self, vehicle: usize, pos_i: usize, pos_j: usize) {
        assert!(
            pos_i >= 1 && pos_i < pos_j,
            "positions must satisfy 1 <= pos_i < pos_j"
        );

        // Walk to the action at pos_i and remember its predecessor.
        let mut pre_i = None;
        let mut a_i = self.first[vehicle].expect("vehicle has no actions");
        let mut count = 1;
        while count < pos_i {
            pre_i = Some(a_i);
            a_i = self.next_action(a_i).expect("pos_i out of bounds");
            count += 1;
        }
        let post_i = self.next_action(a_i);

        // Continue from pos_i to the action at pos_j.
        let mut pre_j = a_i;
        let mut a_j = self.next_action(pre_j).expect("pos_j out of bounds");
        count += 1;
        while count < pos_j {
            pre_j = a_j;
            a_j = self.next_action(a_j).expect("pos_j out of bounds");
            count += 1;
        }
        let post_j = self.next_action(a_j);

        match pre_i {
            None => self.set_first(vehicle, Some(a_j)),
            Some(p) => self.set_next(p, Some(a_j)),
        }
        if post_i == Some(a_j) {
            // Adjacent: a_j takes pos_i and points straight back at a_i.
            self.set_next(a_j, Some(a_i));
        } else {
            self.set_next(a_j, post_i);
            self.set_next(pre_j, Some(a_i));
        }
        self.set_next(a_i, post_j);
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vehicle in 0..self.first.len() {
            write!(f, "vehicle {vehicle}:")?;
            for action in self.actions(vehicle) {
                write!(f, " {action}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Lazy iterator over one vehicle's action sequence.
#[derive(Clone)]
pub struct ActionWalk<'a> {
    solution: &'a Solution,
    current: Option<Action>,
}

impl Iterator for ActionWalk<'_> {
    type Item = Action;

    fn next(&mut self) -> Option<Action> {
        let action = self.current?;
        self.current = self.solution.next_action(action);
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seq(sol: &Solution, vehicle: usize) -> Vec<Action> {
        sol.actions(vehicle).collect()
    }

    /// Two tasks appended to vehicle 0: [P0, D0, P1, D1].
    fn two_task_solution() -> Solution {
        let mut sol = Solution::new(2, 2);
        sol.append_task(0, 0);
        sol.append_task(0, 1);
        sol
    }

    #[test]
    fn test_append_task_empty_vehicle() {
        let mut sol = Solution::new(1, 1);
        assert!(!sol.has_actions(0));
        sol.append_task(0, 0);
        assert!(sol.has_actions(0));
        assert_eq!(seq(&sol, 0), vec![Action::pickup(0), Action::delivery(0)]);
    }

    #[test]
    fn test_append_task_at_tail() {
        let sol = two_task_solution();
        assert_eq!(
            seq(&sol, 0),
            vec![
                Action::pickup(0),
                Action::delivery(0),
                Action::pickup(1),
                Action::delivery(1),
            ]
        );
        assert_eq!(sol.action_count(0), 4);
        assert_eq!(sol.action_count(1), 0);
    }

    #[test]
    fn test_tasks_traversal_restartable() {
        let sol = two_task_solution();
        let first: Vec<usize> = sol.tasks(0).collect();
        let second: Vec<usize> = sol.tasks(0).collect();
        assert_eq!(first, vec![0, 0, 1, 1]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = two_task_solution();
        let mut copy = original.clone();
        copy.swap_positions(0, 1, 2);
        assert_ne!(seq(&copy, 0), seq(&original, 0));
        assert_eq!(
            seq(&original, 0),
            vec![
                Action::pickup(0),
                Action::delivery(0),
                Action::pickup(1),
                Action::delivery(1),
            ]
        );
    }

    #[test]
    fn test_swap_all_pairs_of_four() {
        // Exhaustive over a 4-action sequence [P0, D0, P1, D1].
        let p0 = Action::pickup(0);
        let d0 = Action::delivery(0);
        let p1 = Action::pickup(1);
        let d1 = Action::delivery(1);

        let cases = [
            (1, 2, vec![d0, p0, p1, d1]),
            (1, 3, vec![p1, d0, p0, d1]),
            (1, 4, vec![d1, d0, p1, p0]),
            (2, 3, vec![p0, p1, d0, d1]),
            (2, 4, vec![p0, d1, p1, d0]),
            (3, 4, vec![p0, d0, d1, p1]),
        ];
        for (i, j, expected) in cases {
            let mut sol = two_task_solution();
            sol.swap_positions(0, i, j);
            assert_eq!(seq(&sol, 0), expected, "swap({i}, {j})");
        }
    }

    #[test]
    fn test_swap_is_involutive() {
        for (i, j) in [(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)] {
            let mut sol = two_task_solution();
            sol.swap_positions(0, i, j);
            sol.swap_positions(0, i, j);
            assert_eq!(seq(&sol, 0), seq(&two_task_solution(), 0), "swap({i}, {j}) twice");
        }
    }

    #[test]
    fn test_swap_length_two_sequence() {
        let mut sol = Solution::new(1, 1);
        sol.append_task(0, 0);
        sol.swap_positions(0, 1, 2);
        assert_eq!(seq(&sol, 0), vec![Action::delivery(0), Action::pickup(0)]);
    }

    #[test]
    #[should_panic(expected = "pos_j out of bounds")]
    fn test_swap_position_past_end_panics() {
        let mut sol = Solution::new(1, 1);
        sol.append_task(0, 0);
        sol.swap_positions(0, 1, 3);
    }

    #[test]
    fn test_relocate_from_middle() {
        let mut sol = Solution::new(2, 3);
        sol.append_task(0, 0);
        sol.append_task(0, 1);
        sol.append_task(0, 2);
        sol.relocate_task(1, 0, 1);

        assert_eq!(
            seq(&sol, 0),
            vec![
                Action::pickup(0),
                Action::delivery(0),
                Action::pickup(2),
                Action::delivery(2),
            ]
        );
        assert_eq!(seq(&sol, 1), vec![Action::pickup(1), Action::delivery(1)]);
    }

    #[test]
    fn test_relocate_inserts_at_head() {
        let mut sol = Solution::new(2, 2);
        sol.append_task(0, 0);
        sol.append_task(1, 1);
        sol.relocate_task(0, 0, 1);

        assert!(!sol.has_actions(0));
        assert_eq!(
            seq(&sol, 1),
            vec![
                Action::pickup(0),
                Action::delivery(0),
                Action::pickup(1),
                Action::delivery(1),
            ]
        );
    }

    #[test]
    fn test_relocate_conserves_tasks() {
        let mut sol = Solution::new(3, 4);
        for t in 0..4 {
            sol.append_task(t % 3, t);
        }
        sol.relocate_task(2, 2, 0);
        sol.relocate_task(0, 0, 1);

        let mut all: Vec<Action> = (0..3).flat_map(|v| seq(&sol, v)).collect();
        all.sort_by_key(|a| a.index());
        let mut expected: Vec<Action> = (0..4)
            .flat_map(|t| [Action::pickup(t), Action::delivery(t)])
            .collect();
        expected.sort_by_key(|a| a.index());
        assert_eq!(all, expected);
    }

    #[test]
    fn test_display_lists_chains() {
        let sol = two_task_solution();
        let text = sol.to_string();
        assert!(text.contains("vehicle 0: P0 D0 P1 D1"));
        assert!(text.contains("vehicle 1:"));
    }

    proptest! {
        /// Arbitrary swap sequences keep the chain a well-formed list:
        /// same length, all actions distinct, walk terminates.
        #[test]
        fn prop_swaps_preserve_forest(
            num_tasks in 1usize..5,
            raw_swaps in prop::collection::vec((1usize..10, 1usize..10), 0..12),
        ) {
            let mut sol = Solution::new(1, num_tasks);
            for t in 0..num_tasks {
                sol.append_task(0, t);
            }
            let len = num_tasks * 2;

            for (a, b) in raw_swaps {
                let (i, j) = (a.min(b), a.max(b));
                if i < j && j <= len {
                    sol.swap_positions(0, i, j);
                }
            }

            let walked: Vec<Action> = sol.actions(0).take(len + 1).collect();
            prop_assert_eq!(walked.len(), len);
            let mut indices: Vec<usize> = walked.iter().map(|a| a.index()).collect();
            indices.sort_unstable();
            indices.dedup();
            prop_assert_eq!(indices.len(), len);
        }
    }
}

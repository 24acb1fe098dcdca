//! Pickup/delivery action type.

use serde::{Deserialize, Serialize};

/// Whether an action picks a task up or delivers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Load the task at its pickup city.
    Pickup,
    /// Unload the task at its delivery city.
    Delivery,
}

/// One pickup or delivery event tied to a task.
///
/// Actions are small copyable values with value equality: two actions are
/// equal iff they reference the same task and the same kind. Each action
/// maps to a dense arena index (`task * 2` for pickups, `task * 2 + 1` for
/// deliveries), which is how [`Solution`](super::Solution) stores its
/// next-action links.
///
/// # Examples
///
/// ```
/// use pd_routing::models::Action;
///
/// let p = Action::pickup(3);
/// let d = Action::delivery(3);
/// assert_ne!(p, d);
/// assert_eq!(p.task(), d.task());
/// assert_eq!(p.index(), 6);
/// assert_eq!(d.index(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    task: usize,
    kind: ActionKind,
}

impl Action {
    /// The pickup action of the given task.
    pub fn pickup(task: usize) -> Self {
        Self {
            task,
            kind: ActionKind::Pickup,
        }
    }

    /// The delivery action of the given task.
    pub fn delivery(task: usize) -> Self {
        Self {
            task,
            kind: ActionKind::Delivery,
        }
    }

    /// ID of the task this action belongs to.
    pub fn task(&self) -> usize {
        self.task
    }

    /// Pickup or delivery.
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Returns `true` for pickup actions.
    pub fn is_pickup(&self) -> bool {
        self.kind == ActionKind::Pickup
    }

    /// Dense arena index of this action among `2 * num_tasks` slots.
    pub fn index(&self) -> usize {
        self.task * 2
            + match self.kind {
                ActionKind::Pickup => 0,
                ActionKind::Delivery => 1,
            }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ActionKind::Pickup => write!(f, "P{}", self.task),
            ActionKind::Delivery => write!(f, "D{}", self.task),
        }
    }
}

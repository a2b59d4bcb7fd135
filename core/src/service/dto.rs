use serde::{Deserialize, Serialize};

/// Completion summary for display: `percent` is the rounded share of
/// completed tasks, 0 when the list is empty.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
}

use serde::{Deserialize, Serialize};

use crate::records::User;

/// A completed quest as listed under a user's tasks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestSummary {
    pub name: String,
    pub cost: i64,
}

/// Response body of the user-tasks query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserTasks {
    pub user: User,
    /// Always serialized, `[]` when the user has no completions.
    pub tasks: Vec<QuestSummary>,
}

//! Wire types for the questboard HTTP API.
//!
//! Request bodies decode into [`User`], [`Quest`] and [`CompletedQuest`];
//! the user-tasks query responds with [`UserTasks`].

pub mod records;
pub mod tasks;

pub use records::{CompletedQuest, Quest, User};
pub use tasks::{QuestSummary, UserTasks};

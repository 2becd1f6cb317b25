mod questboard;

pub use questboard::{ApiErrorBody, ApiErrorObject, QuestboardError};

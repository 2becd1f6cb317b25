use questboard_schema::{QuestSummary, User};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub name: String,
    pub balance: i64,
}

/// A quest row reached through `completed_quests`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct DbQuestSummary {
    pub name: String,
    pub cost: i64,
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        User {
            id: row.id,
            name: row.name,
            balance: row.balance,
        }
    }
}

impl From<DbQuestSummary> for QuestSummary {
    fn from(row: DbQuestSummary) -> Self {
        QuestSummary {
            name: row.name,
            cost: row.cost,
        }
    }
}

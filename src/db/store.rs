use crate::db::models::{DbQuestSummary, DbUser};
use crate::db::schema::SQLITE_INIT;
use crate::error::QuestboardError;
use async_trait::async_trait;
use questboard_schema::{CompletedQuest, Quest, User, UserTasks};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::{str::FromStr, time::Duration};
use tracing::{debug, info, warn};

/// Persistence seam injected into the HTTP handlers.
#[async_trait]
pub trait QuestStore: Send + Sync {
    /// Insert a user and return the id storage assigned.
    async fn create_user(&self, user: &User) -> Result<i64, QuestboardError>;

    /// Insert a quest and return the id storage assigned.
    async fn create_quest(&self, quest: &Quest) -> Result<i64, QuestboardError>;

    /// Record a completion and deduct the quest's cost from the user's balance.
    ///
    /// Either both effects are committed or neither is.
    async fn complete_quest(&self, completion: CompletedQuest) -> Result<(), QuestboardError>;

    /// Fetch a user together with every quest they completed.
    ///
    /// `user_id` is bound as given; a value matching no row is an error.
    async fn user_tasks(&self, user_id: &str) -> Result<UserTasks, QuestboardError>;
}

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database at `database_url` and apply the schema.
    pub async fn connect(database_url: &str) -> Result<Self, QuestboardError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let store = Self::from_pool(pool).await?;
        info!("SqliteStore initialized");
        Ok(store)
    }

    /// Wrap an existing pool, applying the schema to it.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, QuestboardError> {
        apply_schema(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl QuestStore for SqliteStore {
    async fn create_user(&self, user: &User) -> Result<i64, QuestboardError> {
        let id = sqlx::query("INSERT INTO users (name, balance) VALUES (?, ?)")
            .bind(&user.name)
            .bind(user.balance)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        debug!(id, name = %user.name, balance = user.balance, "user created");
        Ok(id)
    }

    async fn create_quest(&self, quest: &Quest) -> Result<i64, QuestboardError> {
        let id = sqlx::query("INSERT INTO quests (name, cost) VALUES (?, ?)")
            .bind(&quest.name)
            .bind(quest.cost)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        debug!(id, name = %quest.name, cost = quest.cost, "quest created");
        Ok(id)
    }

    async fn complete_quest(&self, completion: CompletedQuest) -> Result<(), QuestboardError> {
        let CompletedQuest { user_id, quest_id } = completion;

        // Read outside the transaction; quests are never updated.
        let cost: i64 = sqlx::query_scalar("SELECT cost FROM quests WHERE id = ?")
            .bind(quest_id)
            .fetch_one(&self.pool)
            .await?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(QuestboardError::transaction("begin transaction"))?;

        let affected = match record_completion(&mut tx, completion, cost).await {
            Ok(affected) => affected,
            Err(e) => {
                warn!(user_id, quest_id, error = %e, "completion failed, rolling back");
                if let Err(rb) = tx.rollback().await {
                    warn!(user_id, quest_id, error = %rb, "rollback failed");
                }
                return Err(e);
            }
        };

        tx.commit()
            .await
            .map_err(QuestboardError::transaction("commit"))?;

        debug!(user_id, quest_id, cost, affected, "quest completion committed");
        Ok(())
    }

    async fn user_tasks(&self, user_id: &str) -> Result<UserTasks, QuestboardError> {
        let user = sqlx::query_as::<_, DbUser>("SELECT id, name, balance FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        let tasks = sqlx::query_as::<_, DbQuestSummary>(
            r#"
            SELECT q.name, q.cost
            FROM quests q
            INNER JOIN completed_quests c ON q.id = c.quest_id
            WHERE c.user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(user_id = user.id, tasks = tasks.len(), "user tasks loaded");
        Ok(UserTasks {
            user: user.into(),
            tasks: tasks.into_iter().map(Into::into).collect(),
        })
    }
}

/// Insert the completion row and apply the decrement inside `tx`.
///
/// Returns the number of user rows the decrement touched.
async fn record_completion(
    tx: &mut Transaction<'_, Sqlite>,
    completion: CompletedQuest,
    cost: i64,
) -> Result<u64, QuestboardError> {
    sqlx::query("INSERT INTO completed_quests (user_id, quest_id) VALUES (?, ?)")
        .bind(completion.user_id)
        .bind(completion.quest_id)
        .execute(&mut **tx)
        .await
        .map_err(QuestboardError::transaction("insert completion"))?;

    // Single-statement decrement so concurrent completions cannot lose updates.
    let res = sqlx::query("UPDATE users SET balance = balance - ? WHERE id = ?")
        .bind(cost)
        .bind(completion.user_id)
        .execute(&mut **tx)
        .await
        .map_err(QuestboardError::transaction("update balance"))?;

    Ok(res.rows_affected())
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), QuestboardError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

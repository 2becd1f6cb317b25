//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `users` table (balance decremented by quest completions)
/// - `quests` table (immutable once created)
/// - `completed_quests` table (append-only, one row per completion)
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Users
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    balance INTEGER NOT NULL
);

-- ---------------------------------------------------------------------------
-- Quests
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS quests (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    cost INTEGER NOT NULL
);

-- ---------------------------------------------------------------------------
-- Completions (no uniqueness: completing twice is two rows)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS completed_quests (
    user_id INTEGER NOT NULL REFERENCES users(id),
    quest_id INTEGER NOT NULL REFERENCES quests(id)
);

CREATE INDEX IF NOT EXISTS idx_completed_quests_user ON completed_quests(user_id);
"#;

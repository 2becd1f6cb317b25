//! Database module: models, schema and the store behind the HTTP handlers.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `store.rs`: the `QuestStore` seam and its SQLite implementation

pub mod models;
pub mod schema;
pub mod store;

pub use models::{DbQuestSummary, DbUser};
pub use schema::SQLITE_INIT;
pub use store::{QuestStore, SqliteStore};

pub mod config;
pub mod db;
pub mod error;
pub mod server;
mod utils;

pub use db::{QuestStore, SqliteStore};
pub use error::QuestboardError;

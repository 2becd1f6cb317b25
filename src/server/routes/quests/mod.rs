use crate::server::router::QuestboardState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod extract;
pub mod handlers;

use handlers::{
    complete_quest_handler, create_quest_handler, create_user_handler, user_tasks_handler,
};

pub fn router() -> Router<QuestboardState> {
    Router::new()
        .route("/users", post(create_user_handler))
        .route("/quests", post(create_quest_handler))
        .route("/complete-quest", post(complete_quest_handler))
        .route("/user/", get(user_tasks_handler))
        .route("/user", get(user_tasks_handler))
}

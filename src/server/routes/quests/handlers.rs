use super::extract::{JsonBody, UserTasksQuery};
use crate::error::QuestboardError;
use crate::server::router::QuestboardState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use questboard_schema::{CompletedQuest, Quest, User, UserTasks};
use tracing::info;

/// `POST /users`: responds with the submitted record, not the generated id.
pub(super) async fn create_user_handler(
    State(state): State<QuestboardState>,
    JsonBody(user): JsonBody<User>,
) -> Result<(StatusCode, Json<User>), QuestboardError> {
    let id = state.store.create_user(&user).await?;
    info!(id, name = %user.name, "Created user");
    Ok((StatusCode::CREATED, Json(user)))
}

/// `POST /quests`: responds with the submitted record, not the generated id.
pub(super) async fn create_quest_handler(
    State(state): State<QuestboardState>,
    JsonBody(quest): JsonBody<Quest>,
) -> Result<(StatusCode, Json<Quest>), QuestboardError> {
    let id = state.store.create_quest(&quest).await?;
    info!(id, name = %quest.name, "Created quest");
    Ok((StatusCode::CREATED, Json(quest)))
}

pub(super) async fn complete_quest_handler(
    State(state): State<QuestboardState>,
    JsonBody(completion): JsonBody<CompletedQuest>,
) -> Result<StatusCode, QuestboardError> {
    state.store.complete_quest(completion).await?;
    info!(
        user_id = completion.user_id,
        quest_id = completion.quest_id,
        "Quest completed"
    );
    Ok(StatusCode::OK)
}

pub(super) async fn user_tasks_handler(
    State(state): State<QuestboardState>,
    Query(query): Query<UserTasksQuery>,
) -> Result<Json<UserTasks>, QuestboardError> {
    let user_id = query.user_id()?;
    let tasks = state.store.user_tasks(user_id).await?;
    Ok(Json(tasks))
}

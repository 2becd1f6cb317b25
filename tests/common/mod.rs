#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode},
};
use questboard::db::SqliteStore;
use questboard_schema::Quest;
use questboard::server::router::{QuestboardState, questboard_router};
use serde_json::Value;
use std::{
    path::PathBuf,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    pub store: SqliteStore,
    pub db_path: PathBuf,
}

impl TestApp {
    pub async fn spawn(tag: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut db_path = std::env::temp_dir();
        db_path.push(format!(
            "questboard-{tag}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));

        let database_url = format!("sqlite:{}", db_path.display());
        let store = SqliteStore::connect(&database_url)
            .await
            .expect("failed to open store");
        let app = questboard_router(QuestboardState::new(Arc::new(store.clone())));

        Self {
            app,
            store,
            db_path,
        }
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> Response<Body> {
        self.app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("failed to build request"),
            )
            .await
            .expect("request failed")
    }

    pub async fn post_without_content_type(&self, uri: &str, body: &str) -> Response<Body> {
        self.app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .body(Body::from(body.to_string()))
                    .expect("failed to build request"),
            )
            .await
            .expect("request failed")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .expect("failed to build request"),
            )
            .await
            .expect("request failed")
    }

    pub async fn quest_by_id(&self, quest_id: i64) -> Quest {
        let (id, name, cost): (i64, String, i64) =
            sqlx::query_as("SELECT id, name, cost FROM quests WHERE id = ?")
                .bind(quest_id)
                .fetch_one(self.store.pool())
                .await
                .expect("quest query failed");
        Quest { id, name, cost }
    }

    pub async fn balance_of(&self, user_id: i64) -> i64 {
        sqlx::query_scalar("SELECT balance FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_one(self.store.pool())
            .await
            .expect("balance query failed")
    }

    pub async fn completion_count(&self, user_id: i64, quest_id: i64) -> i64 {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM completed_quests WHERE user_id = ? AND quest_id = ?",
        )
        .bind(user_id)
        .bind(quest_id)
        .fetch_one(self.store.pool())
        .await
        .expect("count query failed")
    }

    pub async fn cleanup(self) {
        self.store.pool().close().await;
        let wal_path = PathBuf::from(format!("{}-wal", self.db_path.to_string_lossy()));
        let shm_path = PathBuf::from(format!("{}-shm", self.db_path.to_string_lossy()));
        let _ = tokio::fs::remove_file(&wal_path).await;
        let _ = tokio::fs::remove_file(&shm_path).await;
        let _ = tokio::fs::remove_file(&self.db_path).await;
    }
}

pub async fn read_json(resp: Response<Body>) -> Value {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&body).expect("response body was not JSON")
}

pub async fn read_bytes(resp: Response<Body>) -> Vec<u8> {
    to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
        .to_vec()
}

pub fn assert_status(resp: &Response<Body>, expected: StatusCode) {
    assert_eq!(resp.status(), expected, "unexpected status");
}

use crate::error::QuestboardError;
use crate::utils::logging::debug_decoded_record;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// JSON request body decoded into `T`.
///
/// Unlike `axum::Json` the `content-type` header is not checked; any body that parses
/// as `T` is accepted. Read and parse failures both reject with
/// [`QuestboardError::Decode`] (400).
pub(crate) struct JsonBody<T>(pub(crate) T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Serialize,
{
    type Rejection = QuestboardError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| QuestboardError::Decode(e.body_text()))?;

        let body: T =
            serde_json::from_slice(&bytes).map_err(|e| QuestboardError::Decode(e.to_string()))?;

        debug_decoded_record(&body);

        Ok(JsonBody(body))
    }
}

/// Query string of `GET /user/`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct UserTasksQuery {
    pub(crate) user_id: Option<String>,
}

impl UserTasksQuery {
    /// The `user_id` parameter, required and non-empty. Not checked to be numeric.
    pub(crate) fn user_id(&self) -> Result<&str, QuestboardError> {
        self.user_id
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(QuestboardError::MissingParameter("user_id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_is_required() {
        let query = UserTasksQuery::default();
        assert!(matches!(
            query.user_id(),
            Err(QuestboardError::MissingParameter("user_id"))
        ));
    }

    #[test]
    fn empty_user_id_counts_as_missing() {
        let query = UserTasksQuery {
            user_id: Some(String::new()),
        };
        assert!(query.user_id().is_err());
    }

    #[test]
    fn user_id_passes_through_unvalidated() {
        let query = UserTasksQuery {
            user_id: Some("abc".to_string()),
        };
        assert_eq!(query.user_id().unwrap(), "abc");
    }
}

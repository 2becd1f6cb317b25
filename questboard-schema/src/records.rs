use serde::{Deserialize, Serialize};

/// A user account. `id` is assigned by storage.
///
/// Inbound bodies only need to be a JSON object of the right types: absent fields
/// decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub balance: i64,
}

/// A quest with the cost deducted from a user's balance on completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Quest {
    pub id: i64,
    pub name: String,
    pub cost: i64,
}

/// Completion request: `user_id` completed `quest_id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CompletedQuest {
    pub user_id: i64,
    pub quest_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_defaults_when_absent() {
        let user: User = serde_json::from_str(r#"{"name":"Ann","balance":100}"#).unwrap();
        assert_eq!(
            user,
            User {
                id: 0,
                name: "Ann".to_string(),
                balance: 100
            }
        );
    }

    #[test]
    fn absent_fields_decode_to_zero_values() {
        let quest: Quest = serde_json::from_str(r#"{"name":"Clean room"}"#).unwrap();
        assert_eq!(quest.cost, 0);

        let user: User = serde_json::from_str("{}").unwrap();
        assert_eq!(user, User::default());

        let completion: CompletedQuest = serde_json::from_str(r#"{"user_id":1}"#).unwrap();
        assert_eq!(
            completion,
            CompletedQuest {
                user_id: 1,
                quest_id: 0
            }
        );
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        assert!(serde_json::from_str::<User>(r#""Ann""#).is_err());
        assert!(serde_json::from_str::<User>("null").is_err());
    }

    #[test]
    fn completed_quest_rejects_string_ids() {
        let res = serde_json::from_str::<CompletedQuest>(r#"{"user_id":"1","quest_id":1}"#);
        assert!(res.is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let quest: Quest =
            serde_json::from_str(r#"{"name":"Walk dog","cost":5,"difficulty":"easy"}"#).unwrap();
        assert_eq!(quest.cost, 5);
    }
}

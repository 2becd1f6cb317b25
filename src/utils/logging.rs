use serde::Serialize;

/// Short name of a record type for log fields, e.g. `CompletedQuest`.
pub(crate) fn record_kind<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Emits a DEBUG event with the decoded request record as JSON.
///
/// Serialization is skipped entirely unless DEBUG is enabled, since every
/// mutating request passes through here.
pub(crate) fn debug_decoded_record<T>(record: &T)
where
    T: Serialize,
{
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }

    let body = serde_json::to_string(record)
        .unwrap_or_else(|error| format!("<serialize failed: {error}>"));
    tracing::debug!(record = record_kind::<T>(), %body, "Decoded request body");
}

#[cfg(test)]
mod tests {
    use super::*;
    use questboard_schema::{CompletedQuest, User};

    #[test]
    fn record_kind_strips_module_path() {
        assert_eq!(record_kind::<CompletedQuest>(), "CompletedQuest");
        assert_eq!(record_kind::<User>(), "User");
    }
}

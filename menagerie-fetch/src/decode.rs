//! Response body decoding.
//!
//! Accepted shapes:
//!
//! | Body                     | Result                              |
//! |--------------------------|-------------------------------------|
//! | `[ {...}, {...} ]`       | one record per object, in order     |
//! | `{ "animals": [ ... ] }` | same, from the envelope             |
//! | anything else            | [`FetchError::UnexpectedPayload`]   |
//!
//! Non-object list elements are skipped.

use serde_json::Value;

use menagerie_core::{AnimalRecord, QueryResult};

use crate::error::FetchError;

/// Decode a response body into records.
pub fn decode_records(body: &str) -> Result<QueryResult, FetchError> {
    let value: Value = serde_json::from_str(body)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("animals") {
            Some(Value::Array(items)) => items,
            _ => return Err(FetchError::UnexpectedPayload { found: "object" }),
        },
        other => {
            return Err(FetchError::UnexpectedPayload {
                found: json_type(&other),
            })
        }
    };

    let total = items.len();
    let records: QueryResult = items.into_iter().filter_map(AnimalRecord::from_value).collect();
    if records.len() < total {
        tracing::warn!(
            skipped = total - records.len(),
            "skipped non-object entries in animals response"
        );
    }
    Ok(records)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_of_objects() {
        let records = decode_records(r#"[{"name":"Fox"},{"name":"Wolf"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name().as_deref(), Some("Wolf"));
    }

    #[test]
    fn empty_list_is_not_an_error() {
        assert!(decode_records("[]").unwrap().is_empty());
    }

    #[test]
    fn envelope_is_unwrapped() {
        let records = decode_records(r#"{"animals":[{"name":"Fox"}]}"#).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn non_objects_in_list_are_skipped() {
        let records = decode_records(r#"[1, "fox", null, {"name":"Fox"}]"#).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = decode_records("<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)), "got: {err}");
    }

    #[test]
    fn wrong_shape_is_unexpected_payload() {
        let err = decode_records(r#"{"error":"bad"}"#).unwrap_err();
        assert!(matches!(err, FetchError::UnexpectedPayload { found: "object" }));
        let err = decode_records(r#""fox""#).unwrap_err();
        assert!(matches!(err, FetchError::UnexpectedPayload { found: "string" }));
    }
}

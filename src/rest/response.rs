//! Response envelope normalization.
//!
//! DeansList wraps most collection results in an envelope that declares how
//! many rows it carries:
//!
//! ```json
//! { "rowcount": 2, "data": [ {...}, {...} ] }
//! ```
//!
//! Endpoints that can include deleted records add a second pair:
//!
//! ```json
//! { "rowcount": 2, "data": [...], "deleted_rowcount": 1, "deleted_data": [...] }
//! ```
//!
//! Anything else is passed through unchanged. A declared count that does
//! not match its array is a broken contract on the server's side and is
//! reported as [`DeansListError::MalformedResponse`], never coerced.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::DeansListError;

const ROWCOUNT: &str = "rowcount";
const DATA: &str = "data";
const DELETED_ROWCOUNT: &str = "deleted_rowcount";
const DELETED_DATA: &str = "deleted_data";

/// A normalized response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A body without an envelope, returned unchanged.
    Value(Value),
    /// The `data` array of a `{rowcount, data}` envelope.
    Rows(Vec<Value>),
    /// Active and deleted rows from a `{rowcount, data, deleted_rowcount, deleted_data}` envelope.
    RowsWithDeleted {
        /// Active rows.
        data: Vec<Value>,
        /// Deleted rows.
        deleted: Vec<Value>,
    },
}

impl Payload {
    /// Normalizes a decoded response body.
    ///
    /// # Errors
    ///
    /// Returns [`DeansListError::MalformedResponse`] if an envelope's declared
    /// count does not match its array, a count is not a non-negative integer,
    /// or a data field is not an array.
    pub fn from_body(body: Value) -> Result<Self, DeansListError> {
        let mut map = match body {
            Value::Object(map) => map,
            other => return Ok(Self::Value(other)),
        };

        let has = |map: &Map<String, Value>, a: &str, b: &str| {
            map.contains_key(a) && map.contains_key(b)
        };

        if has(&map, ROWCOUNT, DATA) && has(&map, DELETED_ROWCOUNT, DELETED_DATA) {
            let data = take_rows(&mut map, ROWCOUNT, DATA)?;
            let deleted = take_rows(&mut map, DELETED_ROWCOUNT, DELETED_DATA)?;
            tracing::debug!("{} rows returned, {} deleted", data.len(), deleted.len());
            return Ok(Self::RowsWithDeleted { data, deleted });
        }

        if has(&map, ROWCOUNT, DATA) {
            let data = take_rows(&mut map, ROWCOUNT, DATA)?;
            tracing::debug!("{} rows returned", data.len());
            return Ok(Self::Rows(data));
        }

        Ok(Self::Value(Value::Object(map)))
    }

    /// Returns the rows of an envelope, or `None` for an unwrapped body.
    #[must_use]
    pub fn rows(&self) -> Option<&[Value]> {
        match self {
            Self::Value(_) => None,
            Self::Rows(data) | Self::RowsWithDeleted { data, .. } => Some(data),
        }
    }

    /// Returns the deleted rows, if the envelope carried them.
    #[must_use]
    pub fn deleted(&self) -> Option<&[Value]> {
        match self {
            Self::RowsWithDeleted { deleted, .. } => Some(deleted),
            _ => None,
        }
    }

    /// Splits the payload into its primary data and optional deleted rows.
    ///
    /// Rows are returned as a JSON array.
    #[must_use]
    pub fn into_parts(self) -> (Value, Option<Vec<Value>>) {
        match self {
            Self::Value(value) => (value, None),
            Self::Rows(data) => (Value::Array(data), None),
            Self::RowsWithDeleted { data, deleted } => (Value::Array(data), Some(deleted)),
        }
    }

    /// Deserializes the primary data into a caller type.
    ///
    /// For envelopes this is the `data` array; deleted rows are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`DeansListError::Deserialize`] if the data does not match `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deanslist::Payload;
    /// use serde::Deserialize;
    /// use serde_json::json;
    ///
    /// #[derive(Deserialize)]
    /// struct Term {
    ///     #[serde(rename = "TermID")]
    ///     term_id: String,
    /// }
    ///
    /// let payload = Payload::from_body(json!({"rowcount": 1, "data": [{"TermID": "3"}]})).unwrap();
    /// let terms: Vec<Term> = payload.deserialize_data().unwrap();
    /// assert_eq!(terms[0].term_id, "3");
    /// ```
    pub fn deserialize_data<T: DeserializeOwned>(self) -> Result<T, DeansListError> {
        let (data, _) = self.into_parts();
        Ok(serde_json::from_value(data)?)
    }
}

/// Removes a count/array pair from the envelope and checks they agree.
fn take_rows(
    map: &mut Map<String, Value>,
    count_key: &str,
    data_key: &str,
) -> Result<Vec<Value>, DeansListError> {
    let declared = declared_count(map.get(count_key), count_key)?;

    let rows = match map.remove(data_key) {
        Some(Value::Array(rows)) => rows,
        Some(other) => {
            return Err(DeansListError::MalformedResponse {
                reason: format!("'{data_key}' is not an array: {other}"),
            })
        }
        None => Vec::new(),
    };

    if rows.len() != declared {
        return Err(DeansListError::MalformedResponse {
            reason: format!(
                "'{count_key}' declares {declared} rows but '{data_key}' holds {}",
                rows.len()
            ),
        });
    }

    Ok(rows)
}

/// Reads a row count, accepting integers and numeric strings.
fn declared_count(value: Option<&Value>, key: &str) -> Result<usize, DeansListError> {
    let count = match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    count
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| DeansListError::MalformedResponse {
            reason: format!(
                "'{key}' is not a non-negative integer: {}",
                value.unwrap_or(&Value::Null)
            ),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_envelope_is_unwrapped() {
        let payload = Payload::from_body(json!({"rowcount": 2, "data": ["a", "b"]})).unwrap();
        assert_eq!(payload, Payload::Rows(vec![json!("a"), json!("b")]));
        assert!(payload.deleted().is_none());
    }

    #[test]
    fn test_rows_envelope_count_mismatch_is_malformed() {
        let result = Payload::from_body(json!({"rowcount": 3, "data": ["a", "b"]}));
        match result {
            Err(DeansListError::MalformedResponse { reason }) => {
                assert!(reason.contains("declares 3"));
                assert!(reason.contains("holds 2"));
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_deleted_envelope_yields_pair() {
        let payload = Payload::from_body(json!({
            "rowcount": 2,
            "data": [{"id": 1}, {"id": 2}],
            "deleted_rowcount": 1,
            "deleted_data": [{"id": 3}]
        }))
        .unwrap();

        assert_eq!(payload.rows().map(<[Value]>::len), Some(2));
        assert_eq!(payload.deleted().map(<[Value]>::len), Some(1));
    }

    #[test]
    fn test_deleted_count_mismatch_is_malformed() {
        let result = Payload::from_body(json!({
            "rowcount": 1,
            "data": [{"id": 1}],
            "deleted_rowcount": 2,
            "deleted_data": [{"id": 3}]
        }));
        assert!(matches!(result, Err(DeansListError::MalformedResponse { .. })));
    }

    #[test]
    fn test_deleted_fields_without_rowcount_pass_through() {
        let body = json!({"deleted_rowcount": 0, "deleted_data": []});
        let payload = Payload::from_body(body.clone()).unwrap();
        assert_eq!(payload, Payload::Value(body));
    }

    #[test]
    fn test_bare_values_pass_through() {
        for body in [json!([1, 2, 3]), json!({"RosterID": "12"}), json!("ok"), Value::Null] {
            assert_eq!(Payload::from_body(body.clone()).unwrap(), Payload::Value(body));
        }
    }

    #[test]
    fn test_string_rowcount_is_accepted() {
        let payload = Payload::from_body(json!({"rowcount": "1", "data": [{}]})).unwrap();
        assert_eq!(payload.rows().map(<[Value]>::len), Some(1));
    }

    #[test]
    fn test_negative_rowcount_is_malformed() {
        let result = Payload::from_body(json!({"rowcount": -1, "data": []}));
        assert!(matches!(result, Err(DeansListError::MalformedResponse { .. })));
    }

    #[test]
    fn test_non_array_data_is_malformed() {
        let result = Payload::from_body(json!({"rowcount": 1, "data": {"id": 1}}));
        match result {
            Err(DeansListError::MalformedResponse { reason }) => {
                assert!(reason.contains("not an array"));
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_into_parts() {
        let payload = Payload::RowsWithDeleted {
            data: vec![json!(1)],
            deleted: vec![json!(2)],
        };
        let (data, deleted) = payload.into_parts();
        assert_eq!(data, json!([1]));
        assert_eq!(deleted, Some(vec![json!(2)]));
    }

    #[test]
    fn test_deserialize_data_type_mismatch() {
        let payload = Payload::Rows(vec![json!("not a number")]);
        let result: Result<Vec<u32>, _> = payload.deserialize_data();
        assert!(matches!(result, Err(DeansListError::Deserialize(_))));
    }
}

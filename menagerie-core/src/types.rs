//! Domain types for animal lookups.
//!
//! Records come from a third-party API with no schema guarantee, so
//! [`AnimalRecord`] keeps the raw JSON object and exposes tolerant accessors
//! instead of fixed fields. Every accessor returns `None` for missing, null
//! or blank values.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// QueryTerm
// ---------------------------------------------------------------------------

/// The animal name a user searched for. Kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryTerm(pub String);

impl QueryTerm {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when the term has no non-whitespace characters.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for QueryTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for QueryTerm {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for QueryTerm {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// AnimalRecord
// ---------------------------------------------------------------------------

/// One animal entry, as returned by the API.
///
/// Commonly present keys are `name`, `taxonomy`, `locations` and
/// `characteristics`; none of them is guaranteed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimalRecord(Map<String, Value>);

/// Ordered records from a single fetch. API order, no dedup.
pub type QueryResult = Vec<AnimalRecord>;

impl AnimalRecord {
    /// Wrap a JSON value. Only objects qualify as records.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// The nested `characteristics` mapping, if it is an object.
    pub fn characteristics(&self) -> Option<&Map<String, Value>> {
        get_ci(&self.0, &["characteristics"]).and_then(Value::as_object)
    }

    /// The nested `taxonomy` mapping, if it is an object.
    pub fn taxonomy(&self) -> Option<&Map<String, Value>> {
        get_ci(&self.0, &["taxonomy"]).and_then(Value::as_object)
    }

    /// First present value among `keys`, top-level first, then inside
    /// `characteristics`. Blank strings are treated as absent.
    pub fn lookup(&self, keys: &[&str]) -> Option<&Value> {
        let value = get_ci(&self.0, keys)
            .or_else(|| self.characteristics().and_then(|ch| get_ci(ch, keys)))?;
        match value {
            Value::String(s) if s.trim().is_empty() => None,
            other => Some(other),
        }
    }

    /// Display text for the first present value among `keys`.
    ///
    /// Lists are joined with `", "`; objects have no text form.
    pub fn text(&self, keys: &[&str]) -> Option<String> {
        match self.lookup(keys)? {
            Value::Array(items) => {
                let parts: Vec<String> = items.iter().filter_map(scalar_text).collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(", "))
                }
            }
            other => scalar_text(other),
        }
    }

    /// Like [`AnimalRecord::text`], but keeps only the first list item.
    pub fn first_text(&self, keys: &[&str]) -> Option<String> {
        match self.lookup(keys)? {
            Value::Array(items) => items.iter().find_map(scalar_text),
            other => scalar_text(other),
        }
    }

    /// The record's display name.
    pub fn name(&self) -> Option<String> {
        self.text(&["name"])
    }

    /// The record's skin type, if any.
    pub fn skin_type(&self) -> Option<String> {
        self.text(&["skin_type", "skin type", "skintype"])
    }
}

/// Exact key match first, then ASCII case-insensitive. Null counts as absent.
fn get_ci<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| map.get(*k))
        .find(|v| !v.is_null())
        .or_else(|| {
            keys.iter().find_map(|k| {
                map.iter()
                    .find(|(name, v)| name.eq_ignore_ascii_case(k) && !v.is_null())
                    .map(|(_, v)| v)
            })
        })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

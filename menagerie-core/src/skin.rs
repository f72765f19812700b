//! Skin-type buckets for narrowing a result set.
//!
//! Records without a skin type fall into the [`UNKNOWN_SKIN`] bucket.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::types::AnimalRecord;

/// Bucket label for records that carry no skin type.
pub const UNKNOWN_SKIN: &str = "Unknown";

/// One skin type and how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkinTypeCount {
    pub skin_type: String,
    pub count: usize,
}

/// Which records to keep.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SkinFilter {
    #[default]
    All,
    /// Records without a skin type.
    Unknown,
    /// Records whose skin type matches, ignoring case.
    Named(String),
}

impl SkinFilter {
    /// Resolve a user choice against the listed counts.
    ///
    /// Accepts a 1-based index into `counts`, `all`, or a skin type name
    /// (case-insensitive). Returns `None` when nothing matches.
    pub fn resolve(choice: &str, counts: &[SkinTypeCount]) -> Option<SkinFilter> {
        let choice = choice.trim();
        if choice.eq_ignore_ascii_case("all") {
            return Some(SkinFilter::All);
        }
        let picked = match choice.parse::<usize>() {
            Ok(idx) if (1..=counts.len()).contains(&idx) => Some(&counts[idx - 1]),
            _ => counts
                .iter()
                .find(|c| c.skin_type.eq_ignore_ascii_case(choice)),
        }?;
        Some(SkinFilter::for_label(&picked.skin_type))
    }

    fn for_label(label: &str) -> SkinFilter {
        if label == UNKNOWN_SKIN {
            SkinFilter::Unknown
        } else {
            SkinFilter::Named(label.to_owned())
        }
    }

    pub fn matches(&self, record: &AnimalRecord) -> bool {
        match self {
            SkinFilter::All => true,
            SkinFilter::Unknown => record.skin_type().is_none(),
            SkinFilter::Named(name) => record
                .skin_type()
                .is_some_and(|s| s.eq_ignore_ascii_case(name)),
        }
    }
}

impl fmt::Display for SkinFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkinFilter::All => write!(f, "all"),
            SkinFilter::Unknown => write!(f, "{UNKNOWN_SKIN}"),
            SkinFilter::Named(name) => write!(f, "{name}"),
        }
    }
}

/// Skin type of a record, or [`UNKNOWN_SKIN`].
pub fn skin_type(record: &AnimalRecord) -> String {
    record.skin_type().unwrap_or_else(|| UNKNOWN_SKIN.to_owned())
}

/// Count records per skin type.
///
/// Sorted case-insensitively; the unknown bucket, if any, comes last.
pub fn skin_type_counts(records: &[AnimalRecord]) -> Vec<SkinTypeCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        *counts.entry(skin_type(record)).or_default() += 1;
    }
    let unknown = counts.remove(UNKNOWN_SKIN);

    let mut out: Vec<SkinTypeCount> = counts
        .into_iter()
        .map(|(skin_type, count)| SkinTypeCount { skin_type, count })
        .collect();
    out.sort_by(|a, b| {
        a.skin_type
            .to_lowercase()
            .cmp(&b.skin_type.to_lowercase())
            .then_with(|| a.skin_type.cmp(&b.skin_type))
    });
    if let Some(count) = unknown {
        out.push(SkinTypeCount {
            skin_type: UNKNOWN_SKIN.to_owned(),
            count,
        });
    }
    out
}

/// Keep the records matching `filter`, preserving order.
pub fn filter_by_skin(records: Vec<AnimalRecord>, filter: &SkinFilter) -> Vec<AnimalRecord> {
    if matches!(filter, SkinFilter::All) {
        return records;
    }
    let before = records.len();
    let kept: Vec<AnimalRecord> = records.into_iter().filter(|r| filter.matches(r)).collect();
    tracing::debug!(filter = %filter, before, after = kept.len(), "filtered by skin type");
    kept
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

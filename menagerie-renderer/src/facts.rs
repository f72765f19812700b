//! Fact lines: the labelled characteristics shown on each card.
//!
//! [`FACTS`] is the allow-list. Each row names a label, the alias keys it may
//! be stored under, and whether list values are joined or reduced to their
//! first item. Rows whose value is missing or blank produce no line.

use serde::Serialize;

use menagerie_core::AnimalRecord;

/// How a list value becomes display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// Join every item with `", "`.
    All,
    /// Keep only the first item.
    First,
}

/// One row of the fact allow-list.
#[derive(Debug, Clone, Copy)]
pub struct FactSpec {
    pub label: &'static str,
    pub keys: &'static [&'static str],
    pub pick: Pick,
}

const fn fact(label: &'static str, keys: &'static [&'static str]) -> FactSpec {
    FactSpec {
        label,
        keys,
        pick: Pick::All,
    }
}

/// Card facts, in display order.
pub const FACTS: &[FactSpec] = &[
    fact("Diet", &["diet"]),
    FactSpec {
        label: "Location",
        keys: &["locations", "location"],
        pick: Pick::First,
    },
    fact("Type", &["type"]),
    fact("Skin type", &["skin_type", "skin type", "skintype"]),
    fact("Lifespan", &["lifespan", "lifespan_in_wild", "lifespan_in_captivity"]),
    fact("Weight", &["weight", "avg_weight", "weight_range"]),
    fact("Length", &["length", "avg_length", "length_range"]),
    fact("Height", &["height", "avg_height", "height_range"]),
    fact("Top speed", &["top_speed", "speed", "max_speed"]),
    fact("Habitat", &["habitat"]),
    fact("Temperament", &["temperament", "behavior"]),
    fact("Color(s)", &["color", "colors"]),
    fact("Scientific name", &["scientific_name", "latin_name"]),
    fact("Family", &["family"]),
    fact("Order", &["order"]),
    fact("Class", &["class", "class_name"]),
    fact("Geo range", &["geo_range", "native_region", "range"]),
    fact("Conservation status", &["conservation_status", "status"]),
    fact("Fun fact", &["fun_fact", "funfact"]),
    fact("Description", &["description"]),
];

/// A labelled value ready for the card template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

impl FactSpec {
    /// This row's value in `record`, if present and non-blank.
    pub fn extract(&self, record: &AnimalRecord) -> Option<Fact> {
        let value = match self.pick {
            Pick::All => record.text(self.keys),
            Pick::First => record.first_text(self.keys),
        }?;
        Some(Fact {
            label: self.label,
            value,
        })
    }
}

/// Every fact present in `record`, in [`FACTS`] order.
pub fn facts_for(record: &AnimalRecord) -> Vec<Fact> {
    FACTS.iter().filter_map(|spec| spec.extract(record)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

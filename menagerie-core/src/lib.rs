//! Menagerie core library: domain types, skin-type grouping, configuration.
//!
//! Public API surface:
//! - [`types`]: [`QueryTerm`], [`AnimalRecord`], [`QueryResult`]
//! - [`skin`]: skin-type buckets and filtering
//! - [`config`]: API key resolution, [`ApiConfig`], on-disk [`Settings`]
//! - [`error`]: [`ConfigError`]

pub mod config;
pub mod error;
pub mod skin;
pub mod types;

pub use config::{ApiConfig, ApiKey, Settings};
pub use error::ConfigError;
pub use skin::{filter_by_skin, skin_type_counts, SkinFilter, SkinTypeCount, UNKNOWN_SKIN};
pub use types::{AnimalRecord, QueryResult, QueryTerm};

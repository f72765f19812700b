//! # menagerie-renderer
//!
//! Turns fetched animal records into HTML cards and fills the page template.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use menagerie_core::{AnimalRecord, QueryTerm};
//! use menagerie_renderer::{Renderer, Template};
//!
//! fn page(records: &[AnimalRecord]) -> Option<String> {
//!     let renderer = Renderer::new().ok()?;
//!     renderer
//!         .render(records, &Template::embedded(), &QueryTerm::from("Fox"))
//!         .ok()
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod facts;
pub mod template;

pub use engine::{card_count, render, RenderOptions, Renderer};
pub use error::{RenderError, TemplateError};
pub use facts::{facts_for, Fact, FactSpec, FACTS};
pub use template::{substitute, Template, PLACEHOLDER};

//! Tera rendering engine: [`RenderOptions`] and [`Renderer`].
//!
//! | Input            | Fragment                                   |
//! |------------------|--------------------------------------------|
//! | one or more rows | one `cards__item` per record, input order  |
//! | no rows          | a single `cards__empty` item, no cards     |
//!
//! Record text is HTML-escaped unless [`RenderOptions::escape_html`] is off.
//! The query in the empty-state block is always echoed exactly as given.

use tera::Tera;

use menagerie_core::{AnimalRecord, QueryTerm};

use crate::context::{CardCtx, EmptyCtx};
use crate::error::RenderError;
use crate::template::{substitute, Template};

// ---------------------------------------------------------------------------
// Embedded fragment templates: the `.html` suffix turns on Tera autoescape.
// ---------------------------------------------------------------------------

const CARD_TPL: &str = "card.html";
const EMPTY_TPL: &str = "empty.html";

const TPLS: &[(&str, &str)] = &[
    (CARD_TPL, include_str!("templates/card.html")),
    (EMPTY_TPL, include_str!("templates/empty.html")),
];

// ---------------------------------------------------------------------------
// RenderOptions
// ---------------------------------------------------------------------------

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `<`, `>`, `&` and quotes in record text.
    pub escape_html: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { escape_html: true }
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Turns records into card markup and fills the page template.
///
/// Stateless after construction; create once and reuse.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Renderer with default options (escaping on).
    pub fn new() -> Result<Self, RenderError> {
        Renderer::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        if !options.escape_html {
            tera.autoescape_on(vec![]);
        }
        tera.add_raw_templates(TPLS.iter().copied())?;
        Ok(Renderer { tera })
    }

    /// Markup for one record, or `None` when it has neither name nor facts.
    pub fn render_card(&self, record: &AnimalRecord) -> Result<Option<String>, RenderError> {
        let ctx = CardCtx::from_record(record);
        if ctx.is_blank() {
            return Ok(None);
        }
        let html = self.tera.render(CARD_TPL, &ctx.to_tera_context()?)?;
        Ok(Some(html))
    }

    /// The zero-results block naming `query`.
    pub fn render_empty(&self, query: &QueryTerm) -> Result<String, RenderError> {
        let ctx = EmptyCtx::new(query);
        Ok(self.tera.render(EMPTY_TPL, &ctx.to_tera_context()?)?)
    }

    /// Concatenated cards, or the empty-state block when `records` is empty.
    pub fn render_fragment(
        &self,
        records: &[AnimalRecord],
        query: &QueryTerm,
    ) -> Result<String, RenderError> {
        if records.is_empty() {
            tracing::debug!(query = %query, "no records, rendering empty state");
            return self.render_empty(query);
        }

        let mut out = String::new();
        let mut skipped = 0usize;
        for record in records {
            match self.render_card(record)? {
                Some(card) => out.push_str(&card),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::warn!(skipped, "records without name or facts were left out");
        }
        Ok(out)
    }

    /// Render `records` into `template`'s placeholder.
    pub fn render(
        &self,
        records: &[AnimalRecord],
        template: &Template,
        query: &QueryTerm,
    ) -> Result<String, RenderError> {
        template.validate()?;
        let fragment = self.render_fragment(records, query)?;
        Ok(substitute(template, &fragment)?)
    }
}

/// How many of `records` produce a card.
pub fn card_count(records: &[AnimalRecord]) -> usize {
    records
        .iter()
        .filter(|r| !CardCtx::from_record(r).is_blank())
        .count()
}

/// One-shot render with default options.
pub fn render(
    records: &[AnimalRecord],
    template: &Template,
    query: &QueryTerm,
) -> Result<String, RenderError> {
    Renderer::new()?.render(records, template, query)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Template contexts: serializable payloads for the fragment templates.

use serde::Serialize;

use menagerie_core::{AnimalRecord, QueryTerm};

use crate::error::RenderError;
use crate::facts::{facts_for, Fact};

/// Payload for one card.
#[derive(Debug, Clone, Serialize)]
pub struct CardCtx {
    pub name: Option<String>,
    pub facts: Vec<Fact>,
}

impl CardCtx {
    pub fn from_record(record: &AnimalRecord) -> Self {
        CardCtx {
            name: record.name(),
            facts: facts_for(record),
        }
    }

    /// Nothing to show: no name and no facts.
    pub fn is_blank(&self) -> bool {
        self.name.is_none() && self.facts.is_empty()
    }

    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

/// Payload for the zero-results message.
#[derive(Debug, Clone, Serialize)]
pub struct EmptyCtx {
    pub query: String,
}

impl EmptyCtx {
    pub fn new(query: &QueryTerm) -> Self {
        EmptyCtx {
            query: query.0.clone(),
        }
    }

    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

//! Central parameter struct that defines the entire edit.
//!
//! `EditParams` is the single value handed to the pipeline. Every control
//! writes here; [`render`](crate::pipeline::render::render) reads the whole
//! struct.

use serde::{Deserialize, Serialize};

use crate::adjust::filter::FilterSet;
use crate::adjust::tone::ToneParams;
use crate::error::EditError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EditParams {
    /// Brightness and contrast, applied first.
    pub tone: ToneParams,
    /// Enabled color filters, applied to the tone-adjusted pixels.
    pub filters: FilterSet,
}

impl EditParams {
    pub fn new(tone: ToneParams, filters: FilterSet) -> Self {
        Self { tone, filters }
    }

    /// Whether rendering with these params reproduces the source exactly.
    pub fn is_identity(&self) -> bool {
        self.tone.is_identity() && self.filters.is_empty()
    }

    pub fn validate(&self) -> Result<(), EditError> {
        self.tone.validate()
    }

    /// Parse and validate params from JSON.
    pub fn from_json(json: &str) -> Result<Self, crate::error::PresetError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

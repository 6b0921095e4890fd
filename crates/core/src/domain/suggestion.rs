use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct SuggestionRequest {
    /// The basic prompt to analyze
    pub basic_prompt: String,
}

impl SuggestionRequest {
    pub fn new(basic_prompt: impl Into<String>) -> Self {
        Self {
            basic_prompt: basic_prompt.into(),
        }
    }
}

/// Style, length and tone the model considers most suitable for a basic prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ParameterSuggestion {
    pub suggested_style: String,
    pub suggested_length: String,
    pub suggested_tone: String,
    /// Short explanation of why these parameters fit
    pub reasoning: String,
}

//! Output contracts declared to the model and parsing of what comes back.

use serde_json::{json, Value};

use crate::domain::{ParameterSuggestion, RefinementResult};
use crate::error::{CoreError, Result};

pub const REFINEMENT_SCHEMA_NAME: &str = "refined_prompt";
pub const SUGGESTION_SCHEMA_NAME: &str = "parameter_suggestion";

pub const REFINED_PROMPT: &str = "refinedPrompt";
pub const SUGGESTED_STYLE: &str = "suggestedStyle";
pub const SUGGESTED_LENGTH: &str = "suggestedLength";
pub const SUGGESTED_TONE: &str = "suggestedTone";
pub const REASONING: &str = "reasoning";

/// JSON schema with a single required string: the refined prompt.
pub fn refinement_output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            REFINED_PROMPT: {
                "type": "string",
                "description": "The refined prompt text, with no preamble"
            }
        },
        "required": [REFINED_PROMPT],
        "additionalProperties": false
    })
}

pub fn suggestion_output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            SUGGESTED_STYLE: {
                "type": "string",
                "description": "Suggested style for the refined prompt"
            },
            SUGGESTED_LENGTH: {
                "type": "string",
                "description": "Suggested length for the refined prompt"
            },
            SUGGESTED_TONE: {
                "type": "string",
                "description": "Suggested tone for the refined prompt"
            },
            REASONING: {
                "type": "string",
                "description": "Why these parameters suit the basic prompt"
            }
        },
        "required": [SUGGESTED_STYLE, SUGGESTED_LENGTH, SUGGESTED_TONE, REASONING],
        "additionalProperties": false
    })
}

impl RefinementResult {
    /// Extract the refined prompt from structured model output.
    ///
    /// A missing, non-string or blank `refinedPrompt` is a contract violation.
    pub fn from_model_output(output: &Value) -> Result<Self> {
        Ok(Self {
            refined_prompt: required_string(output, REFINED_PROMPT)?,
        })
    }
}

impl ParameterSuggestion {
    pub fn from_model_output(output: &Value) -> Result<Self> {
        Ok(Self {
            suggested_style: required_string(output, SUGGESTED_STYLE)?,
            suggested_length: required_string(output, SUGGESTED_LENGTH)?,
            suggested_tone: required_string(output, SUGGESTED_TONE)?,
            reasoning: required_string(output, REASONING)?,
        })
    }
}

fn required_string(output: &Value, field: &'static str) -> Result<String> {
    output
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or(CoreError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_refined_prompt() {
        let output = json!({ "refinedPrompt": "A detailed prompt about a robot..." });
        let result = RefinementResult::from_model_output(&output).unwrap();
        assert_eq!(result.refined_prompt, "A detailed prompt about a robot...");
    }

    #[test]
    fn test_missing_refined_prompt() {
        let err = RefinementResult::from_model_output(&json!({ "prompt": "x" })).unwrap_err();
        assert!(matches!(err, CoreError::MissingField(REFINED_PROMPT)));
    }

    #[test]
    fn test_blank_or_non_string_refined_prompt() {
        assert!(RefinementResult::from_model_output(&json!({ "refinedPrompt": "  " })).is_err());
        assert!(RefinementResult::from_model_output(&json!({ "refinedPrompt": 42 })).is_err());
    }

    #[test]
    fn test_extracts_suggestion() {
        let output = json!({
            "suggestedStyle": "descriptive",
            "suggestedLength": "medium",
            "suggestedTone": "whimsical",
            "reasoning": "Stories about robots benefit from vivid detail."
        });

        let suggestion = ParameterSuggestion::from_model_output(&output).unwrap();
        assert_eq!(suggestion.suggested_style, "descriptive");
        assert_eq!(suggestion.suggested_length, "medium");
        assert_eq!(suggestion.suggested_tone, "whimsical");
    }

    #[test]
    fn test_suggestion_missing_reasoning() {
        let output = json!({
            "suggestedStyle": "descriptive",
            "suggestedLength": "medium",
            "suggestedTone": "whimsical"
        });

        let err = ParameterSuggestion::from_model_output(&output).unwrap_err();
        assert!(matches!(err, CoreError::MissingField(REASONING)));
    }

    #[test]
    fn test_schemas_declare_required_fields() {
        assert_eq!(refinement_output_schema()["required"], json!(["refinedPrompt"]));
        assert_eq!(
            suggestion_output_schema()["required"].as_array().unwrap().len(),
            4
        );
    }
}

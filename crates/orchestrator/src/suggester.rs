use std::sync::Arc;

use llm::{GenerationRequest, TextGenerator};
use promptcraft_core::output::{suggestion_output_schema, SUGGESTION_SCHEMA_NAME};
use promptcraft_core::{prompts, ParameterSuggestion, SuggestionRequest};
use tracing::{debug, error};

use crate::error::ModelInvocationError;

/// Asks the model for style, length and tone suited to a basic prompt.
#[derive(Clone)]
pub struct ParameterSuggester {
    generator: Arc<dyn TextGenerator>,
}

impl ParameterSuggester {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn suggest(
        &self,
        request: &SuggestionRequest,
    ) -> Result<ParameterSuggestion, ModelInvocationError> {
        let instruction = prompts::suggestion_instruction(request);
        debug!(instruction_len = instruction.len(), "Invoking model for parameter suggestion");

        let output = self
            .generator
            .generate(GenerationRequest::new(
                instruction,
                SUGGESTION_SCHEMA_NAME,
                suggestion_output_schema(),
            ))
            .await
            .map_err(|e| {
                error!("Suggestion model call failed: {}", e);
                ModelInvocationError::suggest(e)
            })?;

        ParameterSuggestion::from_model_output(&output).map_err(|e| {
            error!("Suggestion output violated contract: {}", e);
            ModelInvocationError::suggest(e)
        })
    }
}

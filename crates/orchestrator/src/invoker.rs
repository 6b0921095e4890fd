use std::sync::Arc;

use llm::{GenerationRequest, TextGenerator};
use promptcraft_core::output::{refinement_output_schema, REFINEMENT_SCHEMA_NAME};
use promptcraft_core::{prompts, RefinementRequest, RefinementResult};
use tracing::{debug, error};

use crate::error::ModelInvocationError;

/// Sends refinement instructions to the model and extracts the refined prompt.
#[derive(Clone)]
pub struct RefinementInvoker {
    generator: Arc<dyn TextGenerator>,
}

impl RefinementInvoker {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// One model call, no retries. Expects a request that already passed
    /// validation.
    pub async fn refine(
        &self,
        request: &RefinementRequest,
    ) -> Result<RefinementResult, ModelInvocationError> {
        let instruction = prompts::refinement_instruction(request);
        debug!(
            with_parameters = request.instruction_mode().has_parameters(),
            instruction_len = instruction.len(),
            "Invoking model for refinement"
        );

        let output = self
            .generator
            .generate(GenerationRequest::new(
                instruction,
                REFINEMENT_SCHEMA_NAME,
                refinement_output_schema(),
            ))
            .await
            .map_err(|e| {
                error!("Refinement model call failed: {}", e);
                ModelInvocationError::refine(e)
            })?;

        RefinementResult::from_model_output(&output).map_err(|e| {
            error!("Refinement output violated contract: {}", e);
            ModelInvocationError::refine(e)
        })
    }
}

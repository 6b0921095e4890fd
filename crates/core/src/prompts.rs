//! Instruction text sent to the generative model.
//!
//! Every builder here is a pure function of its input, so the same request
//! always produces byte-identical instructions.

use crate::domain::{InstructionMode, RefinementParameters, RefinementRequest, SuggestionRequest};

const NOT_SPECIFIED: &str = "not specified";

const REFINER_PREAMBLE: &str = "You are an expert prompt engineer. Your task is to transform a user's basic idea into a prompt for a generative AI model.";

const REFINED_PROMPT_ONLY: &str = r#"Output requirements:
- The output must be solely the refined prompt text.
- Do not include any preamble, explanation, commentary or surrounding quotes.
- Do not address the user or describe what you changed."#;

/// Build the refinement instruction for a validated request.
pub fn refinement_instruction(request: &RefinementRequest) -> String {
    let idea = request.idea_text.trim();

    match request.instruction_mode() {
        InstructionMode::WithoutParameters => without_parameters(idea),
        InstructionMode::WithParameters(parameters) => with_parameters(idea, &parameters),
    }
}

fn without_parameters(idea: &str) -> String {
    format!(
        r#"{REFINER_PREAMBLE}

Basic idea:
"""
{idea}
"""

No additional parameters were provided. Based on the basic idea alone, generate a generally effective and detailed prompt that gives the model clear context and a concrete task.

{REFINED_PROMPT_ONLY}"#
    )
}

fn with_parameters(idea: &str, parameters: &RefinementParameters) -> String {
    let style = parameters.style.as_deref().unwrap_or(NOT_SPECIFIED);
    let length = parameters.length.as_deref().unwrap_or(NOT_SPECIFIED);
    let tone = parameters.tone.as_deref().unwrap_or(NOT_SPECIFIED);

    format!(
        r#"{REFINER_PREAMBLE}

Basic idea:
"""
{idea}
"""

Refine the basic idea into a detailed prompt that follows these parameters exactly:
- Desired style: {style}
- Desired length: {length}
- Desired tone: {tone}

{REFINED_PROMPT_ONLY}"#
    )
}

/// Build the instruction asking the model to suggest style, length and tone.
pub fn suggestion_instruction(request: &SuggestionRequest) -> String {
    let basic_prompt = request.basic_prompt.trim();

    format!(
        r#"You are an expert prompt engineer. Analyze the basic prompt below and suggest the style, length and tone that would make a refined version of it most effective for a generative AI model.

Basic prompt:
"""
{basic_prompt}
"""

Keep each suggestion short (a few words). Give a brief reasoning of one or two sentences explaining why these parameters fit the prompt."#
    )
}

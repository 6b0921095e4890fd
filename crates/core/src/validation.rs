use crate::domain::{RefinementRequest, SuggestionRequest};
use crate::error::ValidationErrors;

pub const MIN_IDEA_LENGTH: usize = 10;

pub const IDEA_TEXT_FIELD: &str = "idea_text";
pub const BASIC_PROMPT_FIELD: &str = "basic_prompt";

pub const IDEA_REQUIRED: &str = "Please enter a prompt idea.";
pub const IDEA_TOO_SHORT: &str = "Prompt idea must be at least 10 characters long.";
pub const BASIC_PROMPT_REQUIRED: &str = "Please enter a basic prompt to analyze.";

/// Check a refinement form before anything leaves the process.
///
/// Only the idea text is constrained; style, length and tone are free-form.
/// Length is counted in characters, not bytes.
pub fn validate_refinement(request: &RefinementRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let idea = request.idea_text.as_str();

    if idea.trim().is_empty() {
        errors.add(IDEA_TEXT_FIELD, IDEA_REQUIRED);
    } else if idea.chars().count() < MIN_IDEA_LENGTH {
        errors.add(IDEA_TEXT_FIELD, IDEA_TOO_SHORT);
    }

    errors.into_result()
}

pub fn validate_suggestion(request: &SuggestionRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if request.basic_prompt.trim().is_empty() {
        errors.add(BASIC_PROMPT_FIELD, BASIC_PROMPT_REQUIRED);
    }

    errors.into_result()
}

//! Domain types, validation rules and instruction building for prompt refinement.

pub mod domain;
pub mod error;
pub mod output;
pub mod prompts;
pub mod validation;

pub use domain::{
    InstructionMode, ParameterSuggestion, RefinementParameters, RefinementRequest,
    RefinementResult, SuggestionRequest,
};
pub use error::{CoreError, Result, ValidationErrors};
pub use validation::{validate_refinement, validate_suggestion, MIN_IDEA_LENGTH};

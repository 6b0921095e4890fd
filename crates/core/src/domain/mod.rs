pub mod refinement;
pub mod suggestion;

pub use refinement::{InstructionMode, RefinementParameters, RefinementRequest, RefinementResult};
pub use suggestion::{ParameterSuggestion, SuggestionRequest};

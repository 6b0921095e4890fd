use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw refinement form values as submitted by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct RefinementRequest {
    /// The basic prompt idea to refine
    pub idea_text: String,
    /// Desired style (e.g. "narrative", "technical")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Desired length (e.g. "short", "one paragraph")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    /// Desired tone (e.g. "formal", "playful")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
}

impl RefinementRequest {
    pub fn new(idea_text: impl Into<String>) -> Self {
        Self {
            idea_text: idea_text.into(),
            ..Default::default()
        }
    }

    pub fn with_parameters(
        mut self,
        style: impl Into<String>,
        length: impl Into<String>,
        tone: impl Into<String>,
    ) -> Self {
        self.style = Some(style.into());
        self.length = Some(length.into());
        self.tone = Some(tone.into());
        self
    }

    /// Collapse the optional style/length/tone fields into an [`InstructionMode`].
    ///
    /// Blank values count as absent. When every parameter is absent the mode is
    /// [`InstructionMode::WithoutParameters`], so an all-empty parameter set and
    /// a missing one produce the same instruction.
    pub fn instruction_mode(&self) -> InstructionMode {
        let style = normalize(self.style.as_deref());
        let length = normalize(self.length.as_deref());
        let tone = normalize(self.tone.as_deref());

        if style.is_none() && length.is_none() && tone.is_none() {
            InstructionMode::WithoutParameters
        } else {
            InstructionMode::WithParameters(RefinementParameters {
                style,
                length,
                tone,
            })
        }
    }
}

/// Style, length and tone after normalization. Always travel together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefinementParameters {
    pub style: Option<String>,
    pub length: Option<String>,
    pub tone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstructionMode {
    WithParameters(RefinementParameters),
    WithoutParameters,
}

impl InstructionMode {
    pub fn has_parameters(&self) -> bool {
        matches!(self, Self::WithParameters(_))
    }
}

/// Output of a successful refinement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct RefinementResult {
    pub refined_prompt: String,
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

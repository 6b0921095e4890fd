use thiserror::Error;

#[derive(Debug, Error)]
pub enum AntiAbuseError {
    #[error("No anti-abuse token was provided for action '{action}'")]
    MissingToken { action: String },

    #[error("Token rejected by verification service: {codes:?}")]
    Rejected { codes: Vec<String> },

    #[error("Token was issued for action '{actual}', expected '{expected}'")]
    ActionMismatch { expected: String, actual: String },

    #[error("Verification response carried no score")]
    MissingScore,

    #[error("Token score {score} is below the required {min_score}")]
    LowScore { score: f32, min_score: f32 },

    #[error("Verification service unavailable: {0}")]
    Unavailable(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type AntiAbuseResult<T> = Result<T, AntiAbuseError>;

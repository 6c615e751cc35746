use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationsApiError {
    InvalidPrompt(String),
    SubmissionFailed,
    PollFailed,
    TimedOut,
}

impl GenerationsApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::InvalidPrompt(message) => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: message.to_string(),
            },
            Self::SubmissionFailed | Self::PollFailed => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to generate image.".to_string(),
            },
            Self::TimedOut => ApiError {
                code: StatusCode::GATEWAY_TIMEOUT,
                message: "Generation timed out.".to_string(),
            },
        }
    }
}

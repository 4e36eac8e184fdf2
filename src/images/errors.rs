use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ImagesApiError {
    InvalidRequest(String),
    UpstreamRejected(String),
    UpstreamUnreachable(String),
}

impl ImagesApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::InvalidRequest(message) => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: message.to_string(),
            },
            Self::UpstreamRejected(text) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: ["HuggingFace API Error: ", text.as_str()].concat(),
            },
            Self::UpstreamUnreachable(message) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: message.to_string(),
            },
        }
    }
}

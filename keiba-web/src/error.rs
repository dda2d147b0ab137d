//! Error types for the web front.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::views::layout;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The race API could not be reached.
    #[error("Race API communication error: {0}")]
    Communication(String),

    /// The race API answered with an error.
    #[error("Race API error: {0}")]
    Backend(String),

    /// The race API answered with a body we could not decode.
    #[error("Invalid response from race API: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Communication(_) | Error::Backend(_) | Error::InvalidResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = layout::page(
            "Error",
            &layout::error_banner(&self.to_string()),
        );
        (status, Html(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(Error::Communication("refused".into()).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(Error::Backend("boom".into()).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(Error::InvalidResponse("eof".into()).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(Error::InvalidRequest("bad".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::Internal("oops".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_renders_html() {
        let response = Error::Backend("model not loaded".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let content_type = response.headers().get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }
}

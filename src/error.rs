//! Application error type.
//!
//! Errors are answered the same way as every other response of this server:
//! an HTML page-message fragment. The client is told not to swap it into the
//! request target.

use axum::{
    http::{HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::web::htmx::HX_RESWAP;
use crate::web::templates::{PageMessage, Severity};
use askama::Template;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Unprocessable { message: String },
    #[error("{message}")]
    Internal { message: String },
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::Unprocessable {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show in the browser.
    fn public_message(&self) -> String {
        match self {
            Self::NotFound { message } | Self::Unprocessable { message } => message.clone(),
            Self::Internal { .. } | Self::Render(_) => "Something went wrong".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let fragment = PageMessage::new(Severity::Danger, self.public_message());
        let body = match fragment.render() {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(error = %e, "failed to render error fragment");
                String::from("Something went wrong")
            }
        };

        (
            status,
            [(HX_RESWAP, HeaderValue::from_static("none"))],
            Html(body),
        )
            .into_response()
    }
}

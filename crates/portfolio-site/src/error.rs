use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use maud::html;
use portfolio_common::error::CommonError;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Common(#[from] CommonError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::Common(CommonError::UnknownSection(_)) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = html! {
            p class="error" { (status.canonical_reason().unwrap_or("Error")) ": " (self.to_string()) }
        };
        (status, Html(body.into_string())).into_response()
    }
}

use crate::config::ConfigError;
use crate::content::ContentError;
use crate::page::render::mount_error_document;
use crate::page::PageError;
use crate::telemetry::TelemetryError;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Content(ContentError),
    Page(PageError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Content(ContentError::UnknownCollection(_))
            | AppError::Page(PageError::UnknownSection(_)) => StatusCode::NOT_FOUND,
            AppError::Content(
                ContentError::NotFilterable { .. } | ContentError::Filter(_),
            ) => StatusCode::BAD_REQUEST,
            AppError::Page(err) if !err.is_mount_failure() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Content(err) => write!(f, "content error: {}", err),
            AppError::Page(err) => write!(f, "page error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Content(err) => Some(err),
            AppError::Page(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // a page that cannot mount is replaced wholesale by the error document
        if let AppError::Page(err) = &self {
            if err.is_mount_failure() {
                tracing::error!(error = %err, "page failed to mount");
                let html = mount_error_document(&err.to_string());
                return (
                    status,
                    [(header::CONTENT_TYPE, mime::TEXT_HTML_UTF_8.as_ref())],
                    html,
                )
                    .into_response();
            }
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<ContentError> for AppError {
    fn from(value: ContentError) -> Self {
        Self::Content(value)
    }
}

impl From<PageError> for AppError {
    fn from(value: PageError) -> Self {
        Self::Page(value)
    }
}

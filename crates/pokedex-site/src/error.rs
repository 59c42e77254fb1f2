//! Error types for rendering, site generation, and the preview server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur while rendering pages or writing the site.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A template failed to load or render.
    #[error("template error: {0}")]
    Template(String),

    /// Reading or writing a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File or directory involved.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },

    /// `catalog.json` could not be written or read back.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SiteError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Errors returned by preview request handlers.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// A page could not be rendered or read.
    #[error(transparent)]
    Site(#[from] SiteError),
}

impl IntoResponse for PreviewError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Site(SiteError::Io { .. }) => (StatusCode::NOT_FOUND, self.to_string()),
            Self::Site(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };
        tracing::warn!(status = status.as_u16(), error = %message, "preview request failed");
        (status, message).into_response()
    }
}

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use serde_json::Value;
use thiserror::Error as ThisError;
use tracing::{error, warn};

#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<Value>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(json!({"message": message})),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<(StatusCode, &str)> for Error {
    fn from((code, msg): (StatusCode, &str)) -> Self {
        Self::new(code, msg)
    }
}

impl From<SeasonError> for Error {
    fn from(error: SeasonError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, &error.to_string())
    }
}

impl From<StatsError> for Error {
    fn from(error: StatsError) -> Self {
        error!("season page build failed: {error}");
        Self::new(StatusCode::BAD_GATEWAY, "Failed to load season data")
    }
}

impl From<ProjectsError> for Error {
    fn from(error: ProjectsError) -> Self {
        warn!("{error}");
        Self::new(StatusCode::NOT_FOUND, &error.to_string())
    }
}

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum SeasonError {
    #[error("invalid season identifier: {0:?}")]
    Invalid(String),
}

/// Failures of the external stats client. Every variant fails the page build.
#[derive(Debug, ThisError)]
pub enum StatsError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("upstream returned status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("malformed response from {url}: {message}")]
    Malformed { url: String, message: String },

    #[error("invalid {field} value {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("rate limiter closed")]
    RateLimiterClosed,
}

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, ThisError)]
pub enum ProjectsError {
    #[error("failed to read project catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse project catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate project slug {0:?}")]
    DuplicateSlug(String),

    #[error("project {0:?} not found")]
    NotFound(String),
}

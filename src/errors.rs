use axum::http::StatusCode;
use thiserror::Error;

/// Failure talking to the bookstore backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx answer; `message` is what the backend said, verbatim.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A 2xx answer without the body the caller needed.
    #[error("{0} not found")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Status the console answers with when this error ends a request.
    pub fn response_status(&self) -> StatusCode {
        match self.status() {
            Some(StatusCode::NOT_FOUND) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Client-side validation failure, caught before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct FormError(pub &'static str);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid CONSOLE_DASHBOARD_MODE '{0}', expected 'strict' or 'lenient'")]
    DashboardMode(String),

    #[error("BOOKSTORE_API_URL must start with http:// or https://, got '{0}'")]
    ApiUrl(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        Self {
            status: err.response_status(),
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_from_backend_keeps_status() {
        let err = ApiError::Status {
            status: StatusCode::NOT_FOUND,
            message: "Book not found".into(),
        };
        let app: AppError = err.into();
        assert_eq!(app.status, StatusCode::NOT_FOUND);
        assert_eq!(app.message, "Book not found");
    }

    #[test]
    fn other_backend_failures_become_bad_gateway() {
        let err = ApiError::Decode("expected array".into());
        let app: AppError = err.into();
        assert_eq!(app.status, StatusCode::BAD_GATEWAY);
        assert!(app.message.contains("expected array"));
    }
}

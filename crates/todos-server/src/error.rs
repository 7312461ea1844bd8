use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use todos_core::TodoError;

// ---------------------------------------------------------------------------
// Internal sentinel for sanitized 500s
// ---------------------------------------------------------------------------

/// Private sentinel error type carrying a user-facing message through the
/// `anyhow::Error` chain. Used where the raw cause must stay in the log —
/// the read endpoint answers with this instead of the datastore error.
#[derive(Debug)]
struct InternalError(String);

impl std::fmt::Display for InternalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for InternalError {}

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 500 with the given user-facing message, hiding the
    /// underlying cause.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self(InternalError(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(i) = self.0.downcast_ref::<InternalError>() {
            let body = serde_json::json!({ "error": i.0.clone() });
            return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response();
        }

        let status = if let Some(e) = self.0.downcast_ref::<TodoError>() {
            match e {
                TodoError::TodoNotFound(_) => StatusCode::NOT_FOUND,
                TodoError::TitleEmpty
                | TodoError::TitleTooLong { .. }
                | TodoError::InvalidId(_) => StatusCode::BAD_REQUEST,
                TodoError::HomeNotFound
                | TodoError::Db(_)
                | TodoError::Io(_)
                | TodoError::Yaml(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

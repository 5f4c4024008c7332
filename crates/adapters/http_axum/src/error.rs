//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use userbase_domain::error::{UserbaseError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`UserbaseError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(UserbaseError);

impl From<UserbaseError> for ApiError {
    fn from(err: UserbaseError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

// Any body axum cannot decode (bad JSON, wrong field types, missing
// content type) is a client error.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedPayload(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            UserbaseError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            UserbaseError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            UserbaseError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use userbase_domain::error::NotFoundError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_map_validation_to_bad_request() {
        let response = ApiError::from(ValidationError::MissingField("name")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "missing required field: name"
        );
    }

    #[tokio::test]
    async fn should_map_not_found_to_404() {
        let err = UserbaseError::from(NotFoundError {
            entity: "User",
            id: "3".to_string(),
        });
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "User 3 not found");
    }

    #[tokio::test]
    async fn should_hide_storage_detail() {
        let err = UserbaseError::Storage("connection refused at 10.0.0.5".into());
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "internal server error");
    }
}

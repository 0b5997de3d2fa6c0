use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::completion::errors::CompletionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CompletionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CompletionError::EmptyQuestion => (StatusCode::BAD_REQUEST, "ValidationError"),
            CompletionError::Transport(_) => (StatusCode::SERVICE_UNAVAILABLE, "TransportError"),
            CompletionError::Timeout => (StatusCode::GATEWAY_TIMEOUT, "TimeoutError"),
            CompletionError::Service { .. } => (StatusCode::BAD_GATEWAY, "ServiceError"),
            CompletionError::MalformedResponse => {
                (StatusCode::INTERNAL_SERVER_ERROR, "ServiceError")
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_timeout_to_gateway_timeout() {
        let (status, json) = CompletionError::Timeout.into_error_response();

        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(json.0.name, "TimeoutError");
        assert_eq!(json.0.message, "completion.timeout");
    }

    #[test]
    fn should_keep_service_message() {
        let (status, json) =
            CompletionError::service(404, "The model does not exist").into_error_response();

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            json.0.message,
            "completion.service_error: 404 The model does not exist"
        );
    }
}

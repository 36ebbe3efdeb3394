//! Uniform JSON envelope for API responses.
//!
//! Success: `{"success": true, "message": ..., "data": ...}`
//! Error:   `{"success": false, "message": ..., "errors": ...}`

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

/// Envelope for successful responses.
#[derive(Debug, Serialize)]
pub struct SuccessBody<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

/// Envelope for failed responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    pub errors: Option<Value>,
}

/// Formats a success envelope with the given status.
pub fn success_response<T: Serialize>(
    data: Option<T>,
    message: impl Into<String>,
    code: StatusCode,
) -> Response {
    let body = SuccessBody {
        success: true,
        message: message.into(),
        data,
    };

    (code, Json(body)).into_response()
}

/// Formats an error envelope with the given status.
pub fn error_response(message: impl Into<String>, code: StatusCode, errors: Option<Value>) -> Response {
    let body = ErrorBody {
        success: false,
        message: message.into(),
        errors,
    };

    (code, Json(body)).into_response()
}

/// Success envelope with the default message and status.
pub fn ok<T: Serialize>(data: T) -> Response {
    success_response(Some(data), "Success", StatusCode::OK)
}

/// Success envelope carrying only a message.
pub fn message(message: impl Into<String>) -> Response {
    success_response(None::<Value>, message, StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_body_shape() {
        let body = SuccessBody {
            success: true,
            message: "Created".to_string(),
            data: Some(json!({ "id": "abc" })),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "success": true, "message": "Created", "data": { "id": "abc" } })
        );
    }

    #[test]
    fn test_success_body_without_data() {
        let body: SuccessBody<Value> = SuccessBody {
            success: true,
            message: "Deleted".to_string(),
            data: None,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "success": true, "message": "Deleted", "data": null })
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            success: false,
            message: "Error".to_string(),
            errors: None,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "success": false, "message": "Error", "errors": null })
        );
    }

    #[test]
    fn test_response_status() {
        let response = success_response(Some(json!({ "id": "1" })), "Created", StatusCode::CREATED);
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = error_response("Error", StatusCode::BAD_REQUEST, None);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        assert_eq!(message("Updated").status(), StatusCode::OK);
        assert_eq!(ok(json!({})).status(), StatusCode::OK);
    }
}

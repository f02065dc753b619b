use actix_web::{error::JsonPayloadError, HttpRequest};
use serde::Serialize;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let api_err = match err {
        JsonPayloadError::ContentType => {
            ApiError::bad_request("request body must be application/json")
        }
        JsonPayloadError::Deserialize(e) => {
            ApiError::bad_request(format!("invalid request body: {}", e))
        }
        other => ApiError::bad_request(other.to_string()),
    };
    api_err.into()
}

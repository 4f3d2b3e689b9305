use actix_web::{
    error::{JsonPayloadError, PathError},
    HttpRequest, HttpResponse,
};
use serde::Serialize;

use crate::error::AppError;

/// Envelope for operations whose outcome is reported in the body rather than
/// through the status code.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResponseDto<T> {
    Success {
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<T>,
        #[serde(skip_serializing_if = "Option::is_none")]
        msg: Option<String>,
    },
    Error {
        msg: String,
    },
}

impl<T: Serialize> ResponseDto<T> {
    pub fn success(data: T) -> Self {
        Self::Success {
            data: Some(data),
            msg: None,
        }
    }

    pub fn fail(msg: impl Into<String>) -> Self {
        Self::Error { msg: msg.into() }
    }
}

impl ResponseDto<()> {
    pub fn message(msg: impl Into<String>) -> Self {
        Self::Success {
            data: None,
            msg: Some(msg.into()),
        }
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let app_err = match err {
        JsonPayloadError::ContentType => AppError::param_error("content type must be application/json"),
        JsonPayloadError::Deserialize(e) => AppError::param_error(format!("invalid request body: {}", e)),
        other => AppError::param_error(format!("invalid request body: {}", other)),
    };
    app_err.into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::param_error(format!("invalid path parameter: {}", err)).into()
}

pub fn response_from_error(err: &AppError) -> HttpResponse {
    use actix_web::ResponseError;

    HttpResponse::build(err.status_code()).json(ResponseDto::<()>::fail(err.msg()))
}

//! Form extractor that returns errors as JSON, plus field parsers

use axum::{
    Form as AxumForm, Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};

/// Wrapper around `axum::Form` whose rejections use the API error format
#[derive(Debug, Clone, Copy, Default)]
pub struct Form<T>(pub T);

/// Form rejection error that returns API error format
#[derive(Debug)]
pub struct FormRejection {
    status: StatusCode,
    message: String,
}

impl IntoResponse for FormRejection {
    fn into_response(self) -> Response {
        let response = ApiErrorResponse {
            error: ApiErrorDetail {
                message: self.message,
                error_type: ApiErrorType::InvalidRequestError,
                param: None,
                code: Some("form_parse_error".to_string()),
            },
        };

        (self.status, Json(response)).into_response()
    }
}

impl<S, T> FromRequest<S> for Form<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = FormRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumForm::<T>::from_request(req, state).await {
            Ok(AxumForm(value)) => Ok(Form(value)),
            Err(rejection) => Err(FormRejection {
                status: rejection.status(),
                message: format_rejection_message(&rejection),
            }),
        }
    }
}

fn format_rejection_message(rejection: &axum::extract::rejection::FormRejection) -> String {
    use axum::extract::rejection::FormRejection::*;

    match rejection {
        InvalidFormContentType(_) => {
            "Missing Content-Type header. Expected 'application/x-www-form-urlencoded'."
                .to_string()
        }
        FailedToDeserializeForm(err) => format!("Invalid form data: {}", err.body_text()),
        FailedToDeserializeFormBody(err) => format!("Invalid form data: {}", err.body_text()),
        BytesRejection(err) => format!("Failed to read request body: {}", err.body_text()),
        _ => "Invalid form request".to_string(),
    }
}

/// Parse a required decimal field
pub fn required_decimal(param: &str, raw: Option<&str>) -> Result<f64, ApiError> {
    optional_decimal(param, raw)?.ok_or_else(|| missing(param))
}

/// Parse an optional decimal field; blank counts as absent
pub fn optional_decimal(param: &str, raw: Option<&str>) -> Result<Option<f64>, ApiError> {
    let Some(raw) = present(raw) else {
        return Ok(None);
    };

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(ApiError::bad_request(format!("'{}' must be a number, got '{}'", param, raw))
            .with_param(param)
            .with_code("invalid_number")),
    }
}

/// Parse a required integer field
pub fn required_integer(param: &str, raw: Option<&str>) -> Result<i64, ApiError> {
    let raw = present(raw).ok_or_else(|| missing(param))?;

    raw.parse::<i64>().map_err(|_| {
        ApiError::bad_request(format!("'{}' must be an integer, got '{}'", param, raw))
            .with_param(param)
            .with_code("invalid_integer")
    })
}

/// Checkbox-style flag: true for `true`, `1`, `yes`, `on` or `y`
pub fn parse_flag(raw: Option<&str>) -> bool {
    present(raw).is_some_and(|value| {
        matches!(
            value.to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "on" | "y"
        )
    })
}

/// Trimmed non-blank value
pub fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn missing(param: &str) -> ApiError {
    ApiError::bad_request(format!("Missing required field '{}'", param))
        .with_param(param)
        .with_code("missing_field")
}

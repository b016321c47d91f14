use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use shared::errors::ErrorResponse;
use validator::{Validate, ValidationErrors};

/// JSON extractor that runs `validator` rules and answers malformed or
/// invalid bodies with the standard failure envelope.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(json_value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let status = rejection.status();
                (
                    status,
                    axum::Json(ErrorResponse::failed(
                        rejection.body_text(),
                        status.as_u16(),
                    )),
                )
            })?;

        json_value.validate().map_err(|validation_errors| {
            (
                StatusCode::BAD_REQUEST,
                axum::Json(ErrorResponse::failed(
                    format_validation_errors(&validation_errors),
                    400,
                )),
            )
        })?;

        Ok(Self(json_value))
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut error_messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match error.code.as_ref() {
                    "length" => "Invalid length".to_string(),
                    "range" => "Value out of range".to_string(),
                    _ => format!("Invalid {field}"),
                });
            error_messages.push(format!("{field}: {message}"));
        }
    }

    if error_messages.is_empty() {
        "Validation failed".to_string()
    } else {
        error_messages.join("; ")
    }
}

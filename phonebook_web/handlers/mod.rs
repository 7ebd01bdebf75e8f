mod contacts;
mod reports;

pub use contacts::{
    add_contact_information, create_contact, delete_contact, get_contact, list_contacts,
    location_statistics, remove_contact_information,
};
pub use reports::{get_report, list_reports, request_report};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use phonebook_types::errors::ApplicationError;

/// Bridges domain errors to HTTP responses: Validation -> 400,
/// NotFound -> 404, everything else -> 500 with the detail kept in the logs.
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self(err)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ApplicationError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApplicationError::NotFound { .. } => (StatusCode::NOT_FOUND, self.0.to_string()),
            err => {
                tracing::error!("Request failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

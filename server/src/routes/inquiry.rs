//! Contact form submission route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use inquiry::{InquiryForm, SubmitResponse};

use crate::services::inquiry as inquiry_svc;
use crate::state::AppState;

/// `POST /api/inquiry`: deliver a contact form submission.
///
/// Responds `422` when a required field is empty. Otherwise responds `200`
/// once the delivery attempt has finished, whatever its outcome.
pub async fn submit_inquiry(State(state): State<AppState>, Json(form): Json<InquiryForm>) -> Response {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        tracing::debug!(?missing, "rejecting incomplete inquiry");
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(SubmitResponse::incomplete(missing))).into_response();
    }

    let _outcome = inquiry_svc::deliver_inquiry(state.notifier.as_ref(), &state.recipient, &form).await;
    (StatusCode::OK, Json(SubmitResponse::accepted())).into_response()
}

#[cfg(test)]
#[path = "inquiry_test.rs"]
mod tests;

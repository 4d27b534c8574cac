//! Axum route handlers for the Swipe API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::errors::{AppError, PayloadError};
use crate::state::AppState;
use crate::swipe::models::{JobApplication, SwipeRequest};
use crate::swipe::service::process_swipe;

/// POST /api/swipes
///
/// Records a like or pass. A like may auto-submit an application or save the job;
/// a pass is acknowledged without touching any upstream service.
pub async fn handle_swipe(
    State(state): State<AppState>,
    payload: Result<Json<SwipeRequest>, JsonRejection>,
) -> Result<Json<JobApplication>, AppError> {
    let Json(request) = payload.map_err(invalid_payload)?;

    let application = process_swipe(&state, request).await?;

    Ok(Json(application))
}

/// Every body that fails to decode is a 422 carrying the decoder's reason.
fn invalid_payload(rejection: JsonRejection) -> AppError {
    let kind = match &rejection {
        JsonRejection::JsonDataError(_) => "json_data",
        JsonRejection::JsonSyntaxError(_) => "json_syntax",
        JsonRejection::MissingJsonContentType(_) => "content_type",
        JsonRejection::BytesRejection(_) => "body",
        _ => "unknown",
    };

    AppError::InvalidPayload(vec![PayloadError {
        kind: kind.to_string(),
        msg: rejection.body_text(),
    }])
}

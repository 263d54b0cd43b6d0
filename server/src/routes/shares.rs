//! Share REST routes, including the tracking callback.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::routes::auth::AuthUser;
use crate::routes::campaigns::campaign_error_to_status;
use crate::services::campaign;
use crate::services::share::{self, ShareError, ShareRow};
use crate::services::webhook::{self, ShareCreatedPayload};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ShareResponse {
    pub id: i64,
    pub campaign_id: i64,
    pub code: String,
    pub success: bool,
    pub created_at_ms: i64,
}

fn to_response(row: ShareRow) -> ShareResponse {
    ShareResponse {
        id: row.id,
        campaign_id: row.campaign_id,
        code: row.code,
        success: row.success,
        created_at_ms: row.created_at_ms,
    }
}

/// `GET /api/campaigns/{id}/shares` — list all shares for a campaign.
pub async fn list_shares(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(campaign_id): Path<i64>,
) -> Result<Json<Vec<ShareResponse>>, StatusCode> {
    campaign::ensure_campaign_owner(&state.pool, campaign_id, auth.user.id)
        .await
        .map_err(campaign_error_to_status)?;

    let rows = share::list_shares(&state.pool, campaign_id)
        .await
        .map_err(share_error_to_status)?;

    Ok(Json(rows.into_iter().map(to_response).collect()))
}

/// `POST /api/campaigns/{id}/shares` — issue a share code for a campaign.
///
/// The campaign's webhook is notified from a spawned task; delivery failures
/// are logged and never affect this response.
pub async fn create_share(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(campaign_id): Path<i64>,
) -> Result<(StatusCode, Json<ShareResponse>), StatusCode> {
    let campaign = campaign::fetch_campaign(&state.pool, campaign_id, auth.user.id)
        .await
        .map_err(campaign_error_to_status)?;

    let row = share::create_share(&state.pool, campaign_id)
        .await
        .map_err(share_error_to_status)?;

    let payload = ShareCreatedPayload { campaign_id, share_id: row.id, code: row.code.clone() };
    let http = state.http.clone();
    tokio::spawn(async move {
        if let Err(e) = webhook::notify_share_created(&http, &campaign.webhook_url, &payload).await {
            tracing::warn!(campaign_id, error = %e, "webhook delivery failed");
        }
    });

    Ok((StatusCode::CREATED, Json(to_response(row))))
}

/// `POST /api/shares/{code}/success` — tracking callback flipping the success
/// flag. Unauthenticated; the unguessable code is the capability.
pub async fn mark_share_success(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    share::mark_share_success(&state.pool, &code)
        .await
        .map_err(share_error_to_status)?;

    Ok(Json(serde_json::json!({ "ok": true })))
}

pub(crate) fn share_error_to_status(err: ShareError) -> StatusCode {
    match err {
        ShareError::NotFound(_) => StatusCode::NOT_FOUND,
        ShareError::CodeExhausted | ShareError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "shares_test.rs"]
mod tests;

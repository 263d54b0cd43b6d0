//! Campaign REST routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::routes::auth::AuthUser;
use crate::services::campaign::{self, CampaignError, CampaignInput, CampaignRow};
use crate::state::AppState;

#[derive(Serialize)]
pub struct CampaignResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub webhook_url: String,
    pub tweet_pattern: String,
    pub created_at_ms: i64,
}

fn to_response(row: CampaignRow) -> CampaignResponse {
    CampaignResponse {
        id: row.id,
        name: row.name,
        description: row.description,
        webhook_url: row.webhook_url,
        tweet_pattern: row.tweet_pattern,
        created_at_ms: row.created_at_ms,
    }
}

/// `GET /api/campaigns` — list the current user's campaigns, newest first.
pub async fn list_campaigns(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<CampaignResponse>>, StatusCode> {
    let rows = campaign::list_campaigns(&state.pool, auth.user.id)
        .await
        .map_err(campaign_error_to_status)?;

    Ok(Json(rows.into_iter().map(to_response).collect()))
}

/// `POST /api/campaigns` — create a new campaign.
pub async fn create_campaign(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CampaignInput>,
) -> Result<(StatusCode, Json<CampaignResponse>), StatusCode> {
    let row = campaign::create_campaign(&state.pool, auth.user.id, &body)
        .await
        .map_err(campaign_error_to_status)?;

    Ok((StatusCode::CREATED, Json(to_response(row))))
}

/// `GET /api/campaigns/{id}` — fetch one campaign.
pub async fn get_campaign(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(campaign_id): Path<i64>,
) -> Result<Json<CampaignResponse>, StatusCode> {
    let row = campaign::fetch_campaign(&state.pool, campaign_id, auth.user.id)
        .await
        .map_err(campaign_error_to_status)?;

    Ok(Json(to_response(row)))
}

/// `PUT /api/campaigns/{id}` — replace all editable campaign fields.
pub async fn update_campaign(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(campaign_id): Path<i64>,
    Json(body): Json<CampaignInput>,
) -> Result<Json<CampaignResponse>, StatusCode> {
    let row = campaign::update_campaign(&state.pool, campaign_id, auth.user.id, &body)
        .await
        .map_err(campaign_error_to_status)?;

    Ok(Json(to_response(row)))
}

/// `DELETE /api/campaigns/{id}` — delete a campaign and its shares.
pub async fn delete_campaign(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(campaign_id): Path<i64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    campaign::delete_campaign(&state.pool, campaign_id, auth.user.id)
        .await
        .map_err(campaign_error_to_status)?;

    Ok(Json(serde_json::json!({ "ok": true })))
}

pub(crate) fn campaign_error_to_status(err: CampaignError) -> StatusCode {
    match err {
        CampaignError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CampaignError::NotFound(_) => StatusCode::NOT_FOUND,
        CampaignError::Forbidden(_) => StatusCode::FORBIDDEN,
        CampaignError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod tests;

//! Campaign store — CRUD with per-user ownership scoping.
//!
//! DESIGN
//! ======
//! Every query is scoped by the owning user: listing filters on `owner_id`,
//! and single-row operations first resolve the row's owner so a foreign
//! campaign yields `Forbidden` rather than silently matching nothing. This is
//! the capability check the views rely on for "current user" scoping.

use sqlx::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    #[error("invalid campaign: {0}")]
    Invalid(&'static str),
    #[error("campaign not found: {0}")]
    NotFound(i64),
    #[error("campaign not owned by requester: {0}")]
    Forbidden(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from campaign queries. `created_at_ms` is milliseconds since
/// the Unix epoch, computed in SQL so no date-time types cross the boundary.
#[derive(Debug, Clone)]
pub struct CampaignRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub webhook_url: String,
    pub tweet_pattern: String,
    pub created_at_ms: i64,
}

/// Editable campaign fields — one typed field per attribute, validated before
/// anything reaches the database.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CampaignInput {
    pub name: String,
    pub description: Option<String>,
    pub webhook_url: String,
    pub tweet_pattern: String,
}

pub(crate) fn validate_input(input: &CampaignInput) -> Result<(), CampaignError> {
    if input.name.trim().is_empty() {
        return Err(CampaignError::Invalid("name must not be empty"));
    }
    if !input.webhook_url.starts_with("http://") && !input.webhook_url.starts_with("https://") {
        return Err(CampaignError::Invalid("webhook_url must be an http(s) URL"));
    }
    if input.tweet_pattern.trim().is_empty() {
        return Err(CampaignError::Invalid("tweet_pattern must not be empty"));
    }
    Ok(())
}

// =============================================================================
// CRUD
// =============================================================================

/// Create a new campaign owned by `owner_id`.
///
/// # Errors
///
/// Returns `Invalid` if the input fails validation, or a database error if
/// the insert fails.
pub async fn create_campaign(
    pool: &PgPool,
    owner_id: i64,
    input: &CampaignInput,
) -> Result<CampaignRow, CampaignError> {
    validate_input(input)?;

    let (id, created_at_ms) = sqlx::query_as::<_, (i64, i64)>(
        "INSERT INTO campaigns (owner_id, name, description, webhook_url, tweet_pattern)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT",
    )
    .bind(owner_id)
    .bind(&input.name)
    .bind(&input.description)
    .bind(&input.webhook_url)
    .bind(&input.tweet_pattern)
    .fetch_one(pool)
    .await?;

    Ok(CampaignRow {
        id,
        name: input.name.clone(),
        description: input.description.clone(),
        webhook_url: input.webhook_url.clone(),
        tweet_pattern: input.tweet_pattern.clone(),
        created_at_ms,
    })
}

/// List all campaigns owned by `owner_id`, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_campaigns(pool: &PgPool, owner_id: i64) -> Result<Vec<CampaignRow>, CampaignError> {
    let rows = sqlx::query_as::<_, (i64, String, Option<String>, String, String, i64)>(
        "SELECT id, name, description, webhook_url, tweet_pattern,
                (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT
         FROM campaigns
         WHERE owner_id = $1
         ORDER BY created_at DESC, id DESC",
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, description, webhook_url, tweet_pattern, created_at_ms)| CampaignRow {
            id,
            name,
            description,
            webhook_url,
            tweet_pattern,
            created_at_ms,
        })
        .collect())
}

/// Fetch one campaign by id, checking ownership.
///
/// # Errors
///
/// `NotFound` if no such campaign, `Forbidden` if it belongs to another user.
pub async fn fetch_campaign(pool: &PgPool, campaign_id: i64, user_id: i64) -> Result<CampaignRow, CampaignError> {
    let row = sqlx::query_as::<_, (i64, String, Option<String>, String, String, i64)>(
        "SELECT owner_id, name, description, webhook_url, tweet_pattern,
                (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT
         FROM campaigns
         WHERE id = $1",
    )
    .bind(campaign_id)
    .fetch_optional(pool)
    .await?
    .ok_or(CampaignError::NotFound(campaign_id))?;

    let (owner_id, name, description, webhook_url, tweet_pattern, created_at_ms) = row;
    if owner_id != user_id {
        return Err(CampaignError::Forbidden(campaign_id));
    }

    Ok(CampaignRow { id: campaign_id, name, description, webhook_url, tweet_pattern, created_at_ms })
}

/// Verify that `campaign_id` exists and is owned by `user_id`.
///
/// # Errors
///
/// `NotFound` if no such campaign, `Forbidden` on an ownership mismatch.
pub async fn ensure_campaign_owner(pool: &PgPool, campaign_id: i64, user_id: i64) -> Result<(), CampaignError> {
    let owner = sqlx::query_as::<_, (i64,)>("SELECT owner_id FROM campaigns WHERE id = $1")
        .bind(campaign_id)
        .fetch_optional(pool)
        .await?
        .ok_or(CampaignError::NotFound(campaign_id))?;

    if owner.0 != user_id {
        return Err(CampaignError::Forbidden(campaign_id));
    }
    Ok(())
}

/// Update all editable fields of a campaign.
///
/// # Errors
///
/// `Invalid` on validation failure, `NotFound`/`Forbidden` per ownership.
pub async fn update_campaign(
    pool: &PgPool,
    campaign_id: i64,
    user_id: i64,
    input: &CampaignInput,
) -> Result<CampaignRow, CampaignError> {
    validate_input(input)?;
    ensure_campaign_owner(pool, campaign_id, user_id).await?;

    let (created_at_ms,) = sqlx::query_as::<_, (i64,)>(
        "UPDATE campaigns
         SET name = $2, description = $3, webhook_url = $4, tweet_pattern = $5
         WHERE id = $1
         RETURNING (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT",
    )
    .bind(campaign_id)
    .bind(&input.name)
    .bind(&input.description)
    .bind(&input.webhook_url)
    .bind(&input.tweet_pattern)
    .fetch_one(pool)
    .await?;

    Ok(CampaignRow {
        id: campaign_id,
        name: input.name.clone(),
        description: input.description.clone(),
        webhook_url: input.webhook_url.clone(),
        tweet_pattern: input.tweet_pattern.clone(),
        created_at_ms,
    })
}

/// Delete a campaign by id. Shares cascade at the schema level.
///
/// # Errors
///
/// `NotFound`/`Forbidden` per ownership, or a database error.
pub async fn delete_campaign(pool: &PgPool, campaign_id: i64, user_id: i64) -> Result<(), CampaignError> {
    ensure_campaign_owner(pool, campaign_id, user_id).await?;

    sqlx::query("DELETE FROM campaigns WHERE id = $1")
        .bind(campaign_id)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
#[path = "campaign_test.rs"]
mod tests;

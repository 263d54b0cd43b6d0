//! Share store — code issuance, listing, and success tracking.
//!
//! DESIGN
//! ======
//! Share codes are the opaque tokens embedded in posted tweets, so they must
//! be unique system-wide. Uniqueness is enforced by the database index; on a
//! collision the insert is retried with a fresh code. The success flag is
//! flipped only through `mark_share_success`, keyed by the code itself — the
//! unguessable code is the capability held by the tracking callback.

use rand::Rng;
use sqlx::PgPool;

const CODE_LEN: usize = 10;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const CODE_INSERT_ATTEMPTS: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("share not found: {0}")]
    NotFound(String),
    #[error("could not issue a unique share code")]
    CodeExhausted,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from share queries.
#[derive(Debug, Clone)]
pub struct ShareRow {
    pub id: i64,
    pub campaign_id: i64,
    pub code: String,
    pub success: bool,
    pub created_at_ms: i64,
}

/// Generate a fresh share code from the unambiguous alphabet.
#[must_use]
pub fn generate_share_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Create a share for `campaign_id` with a freshly issued unique code.
///
/// # Errors
///
/// `CodeExhausted` if every attempt collided, or a database error.
pub async fn create_share(pool: &PgPool, campaign_id: i64) -> Result<ShareRow, ShareError> {
    for _ in 0..CODE_INSERT_ATTEMPTS {
        let code = generate_share_code();
        let inserted = sqlx::query_as::<_, (i64, i64)>(
            "INSERT INTO shares (campaign_id, code)
             VALUES ($1, $2)
             RETURNING id, (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT",
        )
        .bind(campaign_id)
        .bind(&code)
        .fetch_one(pool)
        .await;

        match inserted {
            Ok((id, created_at_ms)) => {
                return Ok(ShareRow { id, campaign_id, code, success: false, created_at_ms });
            }
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                tracing::debug!(campaign_id, "share code collision, retrying");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(ShareError::CodeExhausted)
}

/// List all shares for a campaign, oldest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_shares(pool: &PgPool, campaign_id: i64) -> Result<Vec<ShareRow>, ShareError> {
    let rows = sqlx::query_as::<_, (i64, String, bool, i64)>(
        "SELECT id, code, success, (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT
         FROM shares
         WHERE campaign_id = $1
         ORDER BY created_at ASC, id ASC",
    )
    .bind(campaign_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, code, success, created_at_ms)| ShareRow { id, campaign_id, code, success, created_at_ms })
        .collect())
}

/// Flip the success flag for the share identified by `code`. Idempotent.
///
/// # Errors
///
/// `NotFound` if no share carries the code, or a database error.
pub async fn mark_share_success(pool: &PgPool, code: &str) -> Result<(), ShareError> {
    let updated = sqlx::query("UPDATE shares SET success = TRUE WHERE code = $1")
        .bind(code)
        .execute(pool)
        .await?;

    if updated.rows_affected() == 0 {
        return Err(ShareError::NotFound(code.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "share_test.rs"]
mod tests;

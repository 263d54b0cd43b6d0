//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON responses field for field so serde
//! round-trips stay lossless. Timestamps cross the wire as milliseconds since
//! the Unix epoch.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A tweet campaign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    /// Optional free-form description; absent or null on the wire maps to `None`.
    #[serde(default)]
    pub description: Option<String>,
    /// Endpoint notified when a share is created for this campaign.
    pub webhook_url: String,
    /// Template merged with a share code into final postable text.
    pub tweet_pattern: String,
    pub created_at_ms: i64,
}

/// One issued, trackable instance of a campaign's tweet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub id: i64,
    pub campaign_id: i64,
    /// Unique opaque token embedded in the posted tweet.
    pub code: String,
    /// Flipped by the external tracking callback once the share lands.
    pub success: bool,
    pub created_at_ms: i64,
}

/// Editable campaign fields sent to create/update endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignInput {
    pub name: String,
    pub description: Option<String>,
    pub webhook_url: String,
    pub tweet_pattern: String,
}

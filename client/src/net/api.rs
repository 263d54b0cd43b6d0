//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics; every store
//! error is terminal at the calling view, which decides how to surface it.

#![allow(clippy::unused_async)]

use super::types::{Campaign, CampaignInput, Share, User};

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Request a login access code for `email` via
/// `POST /api/auth/email/request-code`. Returns the echoed code, if the
/// server is configured to echo it.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn request_login_code(email: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/email/request-code")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("code request failed: {}", resp.status()));
        }
        #[derive(serde::Deserialize)]
        struct CodeResponse {
            #[serde(default)]
            code: Option<String>,
        }
        let body: CodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// Verify an access code via `POST /api/auth/email/verify-code`, which sets
/// the session cookie on success.
///
/// # Errors
///
/// Returns an error string if verification fails.
pub async fn verify_login_code(email: &str, code: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "code": code });
        let resp = gloo_net::http::Request::post("/api/auth/email/verify-code")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("verification failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch the current user's campaigns from `GET /api/campaigns`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_campaigns() -> Result<Vec<Campaign>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/campaigns")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("campaign list failed: {}", resp.status()));
        }
        resp.json::<Vec<Campaign>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one campaign from `GET /api/campaigns/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the campaign is missing.
pub async fn fetch_campaign(id: i64) -> Result<Campaign, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/campaigns/{id}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("campaign fetch failed: {}", resp.status()));
        }
        resp.json::<Campaign>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Create a campaign via `POST /api/campaigns`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn create_campaign(input: &CampaignInput) -> Result<Campaign, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/campaigns")
            .json(input)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("campaign create failed: {}", resp.status()));
        }
        resp.json::<Campaign>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err("not available on server".to_owned())
    }
}

/// Update a campaign via `PUT /api/campaigns/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn update_campaign(id: i64, input: &CampaignInput) -> Result<Campaign, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/campaigns/{id}");
        let resp = gloo_net::http::Request::put(&url)
            .json(input)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("campaign update failed: {}", resp.status()));
        }
        resp.json::<Campaign>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, input);
        Err("not available on server".to_owned())
    }
}

/// Delete a campaign via `DELETE /api/campaigns/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn delete_campaign(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/campaigns/{id}");
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("campaign delete failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Fetch all shares for a campaign from `GET /api/campaigns/{id}/shares`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_shares(campaign_id: i64) -> Result<Vec<Share>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/campaigns/{campaign_id}/shares");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("share list failed: {}", resp.status()));
        }
        resp.json::<Vec<Share>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = campaign_id;
        Err("not available on server".to_owned())
    }
}

/// Issue a new share for a campaign via `POST /api/campaigns/{id}/shares`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn create_share(campaign_id: i64) -> Result<Share, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/campaigns/{campaign_id}/shares");
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("share create failed: {}", resp.status()));
        }
        resp.json::<Share>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = campaign_id;
        Err("not available on server".to_owned())
    }
}

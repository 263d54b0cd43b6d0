//! Campaign form state — typed fields, validation, and the submit guard.
//!
//! DESIGN
//! ======
//! One field per campaign attribute, validated into a typed `CampaignInput`
//! before anything reaches the store boundary. The `submitting` flag is the
//! single in-flight guard shared by the submit and delete controls; it is
//! claimed through `try_begin_submit` so a second trigger while a request is
//! outstanding is a no-op.

#[cfg(test)]
#[path = "campaign_form_test.rs"]
mod campaign_form_test;

use crate::net::types::{Campaign, CampaignInput};

/// Validation failures surfaced inline in the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    EmptyName,
    InvalidWebhookUrl,
    EmptyTweetPattern,
}

impl FormError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyName => "Campaign name is required.",
            Self::InvalidWebhookUrl => "Webhook URL must start with http:// or https://.",
            Self::EmptyTweetPattern => "Tweet pattern is required.",
        }
    }
}

/// Editable form fields plus the in-flight submit flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignFormState {
    pub name: String,
    pub description: String,
    pub webhook_url: String,
    pub tweet_pattern: String,
    pub submitting: bool,
}

impl CampaignFormState {
    /// Pre-populate every field from an existing campaign (edit mode).
    #[must_use]
    pub fn from_campaign(campaign: &Campaign) -> Self {
        Self {
            name: campaign.name.clone(),
            description: campaign.description.clone().unwrap_or_default(),
            webhook_url: campaign.webhook_url.clone(),
            tweet_pattern: campaign.tweet_pattern.clone(),
            submitting: false,
        }
    }

    /// Validate the fields into a typed store input.
    ///
    /// # Errors
    ///
    /// Returns the first failing `FormError`.
    pub fn validate(&self) -> Result<CampaignInput, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }

        let webhook_url = self.webhook_url.trim();
        if !webhook_url.starts_with("http://") && !webhook_url.starts_with("https://") {
            return Err(FormError::InvalidWebhookUrl);
        }

        if self.tweet_pattern.trim().is_empty() {
            return Err(FormError::EmptyTweetPattern);
        }

        let description = self.description.trim();
        Ok(CampaignInput {
            name: name.to_owned(),
            description: if description.is_empty() { None } else { Some(description.to_owned()) },
            webhook_url: webhook_url.to_owned(),
            tweet_pattern: self.tweet_pattern.clone(),
        })
    }

    /// Claim the in-flight flag. Returns false (and changes nothing) while a
    /// request is already outstanding.
    pub fn try_begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Release the in-flight flag; called on every exit path.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}

use super::*;

fn filled_form() -> CampaignFormState {
    CampaignFormState {
        name: "Launch".into(),
        description: String::new(),
        webhook_url: "https://x.test/hook".into(),
        tweet_pattern: "Hello #tag".into(),
        submitting: false,
    }
}

fn sample_campaign() -> Campaign {
    Campaign {
        id: 7,
        name: "Launch".into(),
        description: Some("Product launch push".into()),
        webhook_url: "https://x.test/hook".into(),
        tweet_pattern: "Hello #tag".into(),
        created_at_ms: 1_700_000_000_000,
    }
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn validate_produces_typed_input() {
    let input = filled_form().validate().unwrap();
    assert_eq!(input.name, "Launch");
    assert_eq!(input.description, None);
    assert_eq!(input.webhook_url, "https://x.test/hook");
    assert_eq!(input.tweet_pattern, "Hello #tag");
}

#[test]
fn validate_trims_name_and_keeps_description() {
    let mut form = filled_form();
    form.name = "  Launch  ".into();
    form.description = "  Product launch push  ".into();
    let input = form.validate().unwrap();
    assert_eq!(input.name, "Launch");
    assert_eq!(input.description, Some("Product launch push".to_owned()));
}

#[test]
fn validate_rejects_empty_name() {
    let mut form = filled_form();
    form.name = "   ".into();
    assert_eq!(form.validate().unwrap_err(), FormError::EmptyName);
}

#[test]
fn validate_rejects_non_http_webhook_url() {
    let mut form = filled_form();
    form.webhook_url = "x.test/hook".into();
    assert_eq!(form.validate().unwrap_err(), FormError::InvalidWebhookUrl);

    form.webhook_url = "ftp://x.test/hook".into();
    assert_eq!(form.validate().unwrap_err(), FormError::InvalidWebhookUrl);
}

#[test]
fn validate_rejects_empty_tweet_pattern() {
    let mut form = filled_form();
    form.tweet_pattern = "\n".into();
    assert_eq!(form.validate().unwrap_err(), FormError::EmptyTweetPattern);
}

#[test]
fn validate_preserves_tweet_pattern_verbatim() {
    let mut form = filled_form();
    form.tweet_pattern = "🚀 line one\nhttps://example.com  ".into();
    let input = form.validate().unwrap();
    assert_eq!(input.tweet_pattern, "🚀 line one\nhttps://example.com  ");
}

// =============================================================================
// from_campaign
// =============================================================================

#[test]
fn from_campaign_prepopulates_every_field() {
    let form = CampaignFormState::from_campaign(&sample_campaign());
    assert_eq!(form.name, "Launch");
    assert_eq!(form.description, "Product launch push");
    assert_eq!(form.webhook_url, "https://x.test/hook");
    assert_eq!(form.tweet_pattern, "Hello #tag");
    assert!(!form.submitting);
}

#[test]
fn from_campaign_maps_missing_description_to_empty() {
    let mut campaign = sample_campaign();
    campaign.description = None;
    let form = CampaignFormState::from_campaign(&campaign);
    assert_eq!(form.description, "");
}

// =============================================================================
// submit guard
// =============================================================================

#[test]
fn try_begin_submit_claims_flag_once() {
    let mut form = filled_form();
    assert!(form.try_begin_submit());
    // Second trigger while the request is outstanding is a no-op.
    assert!(!form.try_begin_submit());
    assert!(form.submitting);
}

#[test]
fn finish_submit_releases_flag_for_retry() {
    let mut form = filled_form();
    assert!(form.try_begin_submit());
    form.finish_submit();
    assert!(!form.submitting);
    assert!(form.try_begin_submit());
}

use super::*;

#[test]
fn campaign_error_to_status_maps_invalid() {
    let err = CampaignError::Invalid("name must not be empty");
    assert_eq!(campaign_error_to_status(err), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn campaign_error_to_status_maps_not_found() {
    assert_eq!(campaign_error_to_status(CampaignError::NotFound(1)), StatusCode::NOT_FOUND);
}

#[test]
fn campaign_error_to_status_maps_forbidden() {
    assert_eq!(campaign_error_to_status(CampaignError::Forbidden(1)), StatusCode::FORBIDDEN);
}

#[test]
fn campaign_response_serializes_all_fields() {
    let row = CampaignRow {
        id: 5,
        name: "Launch".into(),
        description: None,
        webhook_url: "https://x.test/hook".into(),
        tweet_pattern: "Hello #tag".into(),
        created_at_ms: 1_700_000_000_000,
    };
    let json = serde_json::to_value(to_response(row)).unwrap();
    assert_eq!(json["id"], 5);
    assert_eq!(json["name"], "Launch");
    assert!(json["description"].is_null());
    assert_eq!(json["webhook_url"], "https://x.test/hook");
    assert_eq!(json["tweet_pattern"], "Hello #tag");
    assert_eq!(json["created_at_ms"], 1_700_000_000_000_i64);
}

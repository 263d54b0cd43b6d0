use super::*;

#[test]
fn campaign_parses_with_null_description() {
    let json = r#"{"id":3,"name":"Launch","description":null,"webhook_url":"https://x.test/hook","tweet_pattern":"Hello #tag","created_at_ms":1700000000000}"#;
    let campaign: Campaign = serde_json::from_str(json).unwrap();
    assert_eq!(campaign.id, 3);
    assert_eq!(campaign.description, None);
    assert_eq!(campaign.tweet_pattern, "Hello #tag");
}

#[test]
fn campaign_parses_with_missing_description() {
    let json = r#"{"id":3,"name":"Launch","webhook_url":"https://x.test/hook","tweet_pattern":"Hello #tag","created_at_ms":0}"#;
    let campaign: Campaign = serde_json::from_str(json).unwrap();
    assert_eq!(campaign.description, None);
}

#[test]
fn share_parses_wire_shape() {
    let json = r#"{"id":9,"campaign_id":3,"code":"ABCDE23456","success":true,"created_at_ms":1700000000000}"#;
    let share: Share = serde_json::from_str(json).unwrap();
    assert_eq!(share.campaign_id, 3);
    assert_eq!(share.code, "ABCDE23456");
    assert!(share.success);
}

#[test]
fn campaign_input_serializes_none_description_as_null() {
    let input = CampaignInput {
        name: "Launch".into(),
        description: None,
        webhook_url: "https://x.test/hook".into(),
        tweet_pattern: "Hello #tag".into(),
    };
    let json = serde_json::to_value(&input).unwrap();
    assert!(json["description"].is_null());
    assert_eq!(json["name"], "Launch");
}

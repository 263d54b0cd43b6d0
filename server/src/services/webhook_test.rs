use super::*;

#[test]
fn share_created_payload_shape() {
    let payload = ShareCreatedPayload { campaign_id: 3, share_id: 11, code: "ABCDE23456".into() };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["campaign_id"], 3);
    assert_eq!(json["share_id"], 11);
    assert_eq!(json["code"], "ABCDE23456");
    assert_eq!(json.as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn notify_share_created_fails_against_unroutable_endpoint() {
    let http = reqwest::Client::new();
    let payload = ShareCreatedPayload { campaign_id: 1, share_id: 1, code: "ABCDE23456".into() };

    // Nothing listens on the discard port; connect is refused immediately.
    let result = notify_share_created(&http, "http://127.0.0.1:9/hook", &payload).await;
    assert!(matches!(result, Err(WebhookError::Delivery(_))));
}

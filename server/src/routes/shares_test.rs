use super::*;

#[test]
fn share_error_to_status_maps_not_found() {
    let err = ShareError::NotFound("ABCDE23456".into());
    assert_eq!(share_error_to_status(err), StatusCode::NOT_FOUND);
}

#[test]
fn share_error_to_status_maps_exhaustion_to_server_error() {
    assert_eq!(share_error_to_status(ShareError::CodeExhausted), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn share_response_serializes_all_fields() {
    let row = ShareRow {
        id: 9,
        campaign_id: 4,
        code: "ABCDE23456".into(),
        success: false,
        created_at_ms: 1_700_000_000_000,
    };
    let json = serde_json::to_value(to_response(row)).unwrap();
    assert_eq!(json["id"], 9);
    assert_eq!(json["campaign_id"], 4);
    assert_eq!(json["code"], "ABCDE23456");
    assert_eq!(json["success"], false);
    assert_eq!(json["created_at_ms"], 1_700_000_000_000_i64);
}

use super::*;

#[tokio::test]
async fn test_endpoint_returns_the_fixed_greeting() {
    let Json(body) = test_message().await;
    assert_eq!(body.message, TEST_MESSAGE);
}

#[test]
fn test_response_serializes_a_message_field() {
    let body = TestResponse {
        message: "ok".to_owned(),
    };
    let json = serde_json::to_value(&body).expect("serializable");
    assert_eq!(json, serde_json::json!({ "message": "ok" }));
}

#[test]
fn router_builds_without_panicking() {
    let _ = app();
}

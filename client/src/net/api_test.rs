use super::*;

#[test]
fn endpoints_live_under_the_api_prefix() {
    for endpoint in [
        TEST_ENDPOINT,
        CAPTION_ENDPOINT,
        NUTRITION_ENDPOINT,
        AUGMENT_ENDPOINT,
    ] {
        assert!(endpoint.starts_with("/api/"), "{endpoint}");
    }
}

#[test]
fn analysis_stages_share_the_analyze_prefix() {
    for endpoint in [CAPTION_ENDPOINT, NUTRITION_ENDPOINT, AUGMENT_ENDPOINT] {
        assert!(endpoint.starts_with("/api/analyze/"), "{endpoint}");
    }
}

#[test]
fn request_failed_message_names_endpoint_and_status() {
    assert_eq!(
        request_failed_message("/api/test", 503),
        "/api/test request failed: 503"
    );
}

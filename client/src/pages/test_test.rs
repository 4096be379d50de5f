use super::*;

#[test]
fn success_shows_the_message_and_no_error() {
    let (message, error) = display_state(&Ok("ok".to_owned()));
    assert_eq!(message.as_deref(), Some("ok"));
    assert!(error.is_none());
}

#[test]
fn failure_shows_the_fixed_string_and_no_message() {
    let (message, error) = display_state(&Err("connection refused".to_owned()));
    assert!(message.is_none());
    assert_eq!(error, Some(CONNECT_FAILED_TEXT));
}

#[test]
fn failure_detail_never_reaches_the_display() {
    let (_, error) = display_state(&Err("secret internal detail".to_owned()));
    assert_eq!(error, Some("Failed to connect to the backend"));
}

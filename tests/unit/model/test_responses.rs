use assert_json_diff::assert_json_eq;
use instagram_client::error::AppError;
use instagram_client::model::responses::TokenResponse;
use serde_json::json;

#[test]
fn token_response_keeps_user_and_extra_fields() {
    let value = json!({
        "access_token": "fb2e77d.47a0479900504cb3ab4a1f626d174d2d",
        "user": {
            "id": "1574083",
            "username": "snoopdogg",
            "full_name": "Snoop Dogg",
            "profile_picture": "..."
        },
        "token_type": "bearer"
    });

    let token = TokenResponse::try_from(value.clone()).unwrap();
    assert_eq!(token.access_token, "fb2e77d.47a0479900504cb3ab4a1f626d174d2d");
    assert_eq!(token.user_id(), Some("1574083"));
    assert_eq!(token.username(), Some("snoopdogg"));
    assert_eq!(token.extra.get("token_type"), Some(&json!("bearer")));

    assert_json_eq!(serde_json::to_value(&token).unwrap(), value);
}

#[test]
fn token_response_without_user() {
    let token = TokenResponse::try_from(json!({"access_token": "abc"})).unwrap();
    assert_eq!(token.user, None);
    assert_eq!(token.username(), None);
    assert!(token.extra.is_empty());
}

#[test]
fn token_response_without_access_token_is_malformed() {
    let err = TokenResponse::try_from(json!({"user": {"id": "1"}})).unwrap_err();
    match err {
        AppError::MalformedResponse(msg) => assert!(msg.contains("access_token")),
        other => panic!("Unexpected error: {:?}", other),
    }
}

use super::*;

#[test]
fn api_auth_response_deserializes_camel_case() {
    let json = r#"{
        "userId": "u-42",
        "userEmail": "a@b.com",
        "userRole": "admin",
        "accessToken": "at",
        "refreshToken": "rt"
    }"#;
    let parsed: ApiAuthResponse = serde_json::from_str(json).expect("valid body");
    assert_eq!(parsed.user_id, "u-42");
    assert_eq!(parsed.user_email, "a@b.com");
    assert_eq!(parsed.user_role, "admin");
    assert_eq!(parsed.access_token, "at");
    assert_eq!(parsed.refresh_token, "rt");
}

#[test]
fn api_auth_response_serializes_camel_case() {
    let body = ApiAuthResponse {
        user_id: "u-42".to_owned(),
        user_email: "a@b.com".to_owned(),
        user_role: "admin".to_owned(),
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
    };
    let json = serde_json::to_value(&body).expect("serializes");
    assert_eq!(json["userId"], "u-42");
    assert_eq!(json["refreshToken"], "rt");
}

#[test]
fn api_auth_response_missing_field_is_an_error() {
    let json = r#"{ "userId": "u-42" }"#;
    assert!(serde_json::from_str::<ApiAuthResponse>(json).is_err());
}

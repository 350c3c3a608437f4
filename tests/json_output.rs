use serde_json::Value;

use usage_gate::Error;
use usage_gate::models::{AuthResponse, ErrorBody, StatusResponse, UsageSummary};

#[test]
fn auth_response_shape() {
    let json: Value = serde_json::to_value(AuthResponse::authenticated("a@x.com")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "email": "a@x.com",
            "status": "authenticated",
            "message": "Login successful"
        })
    );
}

#[test]
fn status_response_shapes() {
    let created: Value = serde_json::to_value(StatusResponse::created("n@x.com")).unwrap();
    assert_eq!(created["status"], "created");
    assert_eq!(created["message"], "User n@x.com created successfully");

    let logged: Value = serde_json::to_value(StatusResponse::logged()).unwrap();
    assert_eq!(logged["status"], "logged");
}

#[test]
fn usage_summary_keys() {
    let summary = UsageSummary {
        email: "a@x.com".to_string(),
        total_questions: 5,
        total_cost: 0.75,
        sessions: 2,
        last_activity: "2025-06-01T17:30:00.000000".to_string(),
    };
    let json: Value = serde_json::to_value(&summary).unwrap();
    for key in [
        "email",
        "total_questions",
        "total_cost",
        "sessions",
        "last_activity",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(json["total_cost"], 0.75);
}

#[test]
fn error_body_uses_detail() {
    let body: Value = serde_json::to_value(ErrorBody::from(&Error::InvalidCredentials)).unwrap();
    assert_eq!(body, serde_json::json!({"detail": "Invalid credentials"}));

    let dup: Value =
        serde_json::to_value(ErrorBody::from(&Error::UserAlreadyExists("a@x.com".into())))
            .unwrap();
    assert_eq!(dup["detail"], "User already exists");
}

use super::*;

// =============================================================
// UserRecord
// =============================================================

#[test]
fn user_record_deserializes_provider_field_names() {
    let user: UserRecord = serde_json::from_value(serde_json::json!({
        "displayName": "Lan",
        "photoURL": "https://cdn.example/lan.png"
    }))
    .unwrap();
    assert_eq!(user.display_name.as_deref(), Some("Lan"));
    assert_eq!(user.photo_url.as_deref(), Some("https://cdn.example/lan.png"));
    assert!(user.authenticated);
}

#[test]
fn user_record_tolerates_null_profile_fields() {
    let user: UserRecord = serde_json::from_value(serde_json::json!({
        "displayName": null,
        "photoURL": null
    }))
    .unwrap();
    assert_eq!(user, UserRecord::signed_in(None, None));
}

#[test]
fn user_record_default_is_not_authenticated() {
    assert!(!UserRecord::default().authenticated);
}

// =============================================================
// ServerReply
// =============================================================

fn reply(raw: &str) -> ServerReply {
    ServerReply::from_value(&serde_json::from_str(raw).unwrap())
}

#[test]
fn server_reply_reads_message() {
    let reply = reply(r#"{"message":"ok"}"#);
    assert_eq!(reply.message_text().as_deref(), Some("ok"));
    assert_eq!(reply.detail_text(), None);
}

#[test]
fn server_reply_non_string_message_renders_as_json() {
    assert_eq!(reply(r#"{"message":123}"#).message_text().as_deref(), Some("123"));
}

#[test]
fn server_reply_detail_string_is_used_verbatim() {
    assert_eq!(
        reply(r#"{"detail":"bad credentials"}"#).detail_text().as_deref(),
        Some("bad credentials")
    );
}

#[test]
fn server_reply_structured_detail_renders_as_json() {
    let text = reply(r#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#)
        .detail_text()
        .unwrap();
    assert!(text.starts_with('['));
    assert!(text.contains("field required"));
}

#[test]
fn server_reply_null_fields_are_absent() {
    let reply = reply(r#"{"message":null,"detail":null}"#);
    assert_eq!(reply.message_text(), None);
    assert_eq!(reply.detail_text(), None);
}

#[test]
fn server_reply_from_non_object_has_no_fields() {
    for raw in [r#""ok""#, "[]", "42", "null"] {
        assert_eq!(reply(raw), ServerReply::default(), "body {raw}");
    }
}

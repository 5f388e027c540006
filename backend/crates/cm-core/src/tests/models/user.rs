use crate::{CoreError, User, UserFields, parse_user_id};

fn bob() -> User {
    User::new(UserFields::new(
        Some("Bob".to_string()),
        Some("b@y.com".to_string()),
        Some("555".to_string()),
    ))
}

#[test]
fn test_user_new_assigns_fresh_id() {
    let first = bob();
    let second = bob();

    assert_ne!(first.id, second.id);
    assert_eq!(first.name.as_deref(), Some("Bob"));
    assert_eq!(first.email.as_deref(), Some("b@y.com"));
    assert_eq!(first.number.as_deref(), Some("555"));
}

#[test]
fn test_serialize_omits_absent_fields() {
    let user = User::new(UserFields {
        name: Some("Ann".to_string()),
        ..Default::default()
    });

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["id"], user.id.to_string());
    assert_eq!(json["name"], "Ann");
    assert!(json.get("email").is_none());
    assert!(json.get("number").is_none());
}

#[test]
fn test_parse_user_id_valid() {
    let user = bob();
    let parsed = parse_user_id(&user.id.to_string()).unwrap();
    assert_eq!(parsed, user.id);
}

#[test]
fn test_parse_user_id_invalid() {
    match parse_user_id("not-a-uuid") {
        Err(CoreError::InvalidUserId { value, .. }) => assert_eq!(value, "not-a-uuid"),
        other => panic!("Expected InvalidUserId, got {:?}", other),
    }
}

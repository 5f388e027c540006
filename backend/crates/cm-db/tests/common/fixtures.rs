use cm_core::UserFields;

/// Fields with every value provided
pub fn fields(name: &str, email: &str, number: &str) -> UserFields {
    UserFields::new(
        Some(name.to_string()),
        Some(email.to_string()),
        Some(number.to_string()),
    )
}

pub fn bob_fields() -> UserFields {
    fields("Bob", "b@y.com", "555")
}

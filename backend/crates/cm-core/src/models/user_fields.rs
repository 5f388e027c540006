use crate::deserialize_text;

use serde::{Deserialize, Serialize};

/// The writable subset of a [`crate::User`].
///
/// Used both as the insert payload and as the merge patch: a `None` field
/// is "not provided" and leaves the stored value untouched on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    #[serde(
        default,
        deserialize_with = "deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<String>,
}

impl UserFields {
    pub fn new(name: Option<String>, email: Option<String>, number: Option<String>) -> Self {
        Self {
            name,
            email,
            number,
        }
    }

    /// True when no field is provided (an update would be a no-op)
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.number.is_none()
    }
}

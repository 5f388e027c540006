//! User entity - a single contact record.

use crate::{CoreError, Result as CoreErrorResult, UserFields};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored contact.
///
/// Only `id` is guaranteed. The text fields are optional: a record created
/// from an empty body is valid and simply has nothing to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store on insert, immutable afterwards
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

impl User {
    /// Create a new user with a fresh id from the provided fields
    pub fn new(fields: UserFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            email: fields.email,
            number: fields.number,
        }
    }
}

/// Parse a user id from its path/string form.
#[track_caller]
pub fn parse_user_id(value: &str) -> CoreErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|source| CoreError::InvalidUserId {
        value: value.to_string(),
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

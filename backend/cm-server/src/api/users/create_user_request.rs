use cm_core::UserFields;

use serde::Deserialize;

/// POST body. Must be a JSON object; every field is optional.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(flatten)]
    pub fields: UserFields,
}

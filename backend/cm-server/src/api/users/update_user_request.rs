use cm_core::UserFields;

use serde::Deserialize;

/// PUT body. Only the keys present are merged into the stored user.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(flatten)]
    pub fields: UserFields,
}

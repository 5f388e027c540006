use serde::Serialize;

pub const USER_DELETED_MESSAGE: &str = "User deleted";

/// Delete acknowledgement, identical whether or not the user existed
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn user_deleted() -> Self {
        Self {
            message: USER_DELETED_MESSAGE.to_string(),
        }
    }
}

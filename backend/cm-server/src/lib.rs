pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::json_body::JsonBody,
    extractors::path_id::PathId,
    users::{
        create_user_request::CreateUserRequest,
        delete_response::DeleteResponse,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        users::{create_user, delete_user, get_user, list_users, update_user},
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;

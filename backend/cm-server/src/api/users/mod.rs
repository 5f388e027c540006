pub mod create_user_request;
pub mod delete_response;
pub mod update_user_request;
pub mod user_dto;
pub mod users;

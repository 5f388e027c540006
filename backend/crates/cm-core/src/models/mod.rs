pub mod text_field;
pub mod user;
pub mod user_fields;

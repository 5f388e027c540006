pub mod error;
pub mod models;


pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::text_field::deserialize_text;
pub use models::user::{User, parse_user_id};
pub use models::user_fields::UserFields;

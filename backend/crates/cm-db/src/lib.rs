pub mod connection;
pub mod error;
pub mod repositories;
pub mod store;

pub use connection::pool::{ConnectionSettings, open_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
pub use store::UserStore;

/// Embedded schema migrations for the contact database.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

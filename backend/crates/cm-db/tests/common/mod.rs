#![allow(dead_code)]

pub mod fixtures;
pub mod test_db;

pub use fixtures::{bob_fields, fields};
pub use test_db::create_test_pool;

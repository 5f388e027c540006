pub mod json_body;
pub mod path_id;

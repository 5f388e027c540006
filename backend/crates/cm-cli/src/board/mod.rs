//! The contact board: a list of contacts plus a single add/edit form.
//!
//! State changes only through [`BoardEvent`]s applied by
//! [`ContactBoard::apply`]; the async operations talk to the server and
//! turn each outcome into an event.

pub mod board_command;
pub mod board_event;
pub mod contact;
pub mod contact_api;
pub mod contact_board;
pub mod contact_form;
pub mod form_mode;
pub mod render;

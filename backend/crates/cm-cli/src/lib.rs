//! cm-cli library
//!
//! The HTTP client for the contact API and the contact board state
//! machine driven by `cm board`.

pub mod board;
pub(crate) mod client;


pub use board::{
    board_command::BoardCommand,
    board_event::BoardEvent,
    contact::{Contact, ContactField},
    contact_api::ContactApi,
    contact_board::ContactBoard,
    contact_form::ContactForm,
    form_mode::FormMode,
};
pub use client::{CliClientResult, Client, ClientError};

/// Server used when neither `--server` nor a port file is available
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

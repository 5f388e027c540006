use crate::{Contact, ContactField};

/// Everything that can change board state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A list fetch succeeded
    Loaded(Vec<Contact>),
    FieldChanged(ContactField, String),
    /// Edit selected on a row
    EditStarted(Contact),
    /// Create or update succeeded
    Submitted,
    /// Delete of this id succeeded
    Deleted(String),
    Cancelled,
    /// A request failed; nothing else changes
    Failed(String),
}

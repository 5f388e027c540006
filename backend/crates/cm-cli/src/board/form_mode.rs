/// What a submit does
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    /// Submit creates a new contact
    #[default]
    Listing,
    /// Submit updates the contact with this id
    Editing(String),
}

impl FormMode {
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            FormMode::Listing => None,
            FormMode::Editing(id) => Some(id),
        }
    }
}

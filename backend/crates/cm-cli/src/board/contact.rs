use serde::Deserialize;

/// One row of the board. Fields the server omits show as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub number: String,
}

/// An editable form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Number,
}

impl ContactField {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "number" => Some(ContactField::Number),
            _ => None,
        }
    }
}

use crate::{Contact, ContactField};

use cm_core::UserFields;

/// The form's current text. Submitted as-is, empty strings included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub number: String,
}

impl ContactForm {
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            email: contact.email.clone(),
            number: contact.number.clone(),
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Number => self.number = value,
        }
    }

    pub fn to_fields(&self) -> UserFields {
        UserFields::new(
            Some(self.name.clone()),
            Some(self.email.clone()),
            Some(self.number.clone()),
        )
    }
}

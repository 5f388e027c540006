use crate::{CliClientResult, ClientError, Contact, ContactApi, ContactForm};

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

/// In-process stand-in for the server, with the same absent-id behavior
#[derive(Default)]
pub(crate) struct FakeApi {
    contacts: Mutex<Vec<Contact>>,
    next_id: AtomicUsize,
    fail: AtomicBool,
    pub(crate) list_calls: AtomicUsize,
}

impl FakeApi {
    pub(crate) fn with_contacts(contacts: Vec<Contact>) -> Self {
        let next_id = contacts.len();
        Self {
            contacts: Mutex::new(contacts),
            next_id: AtomicUsize::new(next_id),
            ..Default::default()
        }
    }

    /// Make every following call fail with an API error
    pub(crate) fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn stored(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    fn check(&self) -> CliClientResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ClientError::api(
                503,
                "SERVICE_UNAVAILABLE",
                "Database unavailable",
            ));
        }
        Ok(())
    }
}

pub(crate) fn contact(id: &str, name: &str, email: &str, number: &str) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        number: number.to_string(),
    }
}

#[async_trait]
impl ContactApi for FakeApi {
    async fn list(&self) -> CliClientResult<Vec<Contact>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.stored())
    }

    async fn create(&self, form: &ContactForm) -> CliClientResult<()> {
        self.check()?;
        let id = format!("id-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.contacts
            .lock()
            .unwrap()
            .push(contact(&id, &form.name, &form.email, &form.number));
        Ok(())
    }

    async fn update(&self, id: &str, form: &ContactForm) -> CliClientResult<()> {
        self.check()?;
        let mut contacts = self.contacts.lock().unwrap();
        if let Some(c) = contacts.iter_mut().find(|c| c.id == id) {
            c.name = form.name.clone();
            c.email = form.email.clone();
            c.number = form.number.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> CliClientResult<()> {
        self.check()?;
        self.contacts.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }
}

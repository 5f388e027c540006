use crate::{BoardEvent, Contact, ContactApi, ContactField, ContactForm, FormMode};

/// Board state plus the API it syncs with.
///
/// `users` is only ever replaced by a full re-fetch; local edits never
/// patch it directly.
pub struct ContactBoard<A: ContactApi> {
    api: A,
    users: Vec<Contact>,
    form: ContactForm,
    mode: FormMode,
    last_error: Option<String>,
}

impl<A: ContactApi> ContactBoard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            users: Vec::new(),
            form: ContactForm::default(),
            mode: FormMode::Listing,
            last_error: None,
        }
    }

    pub fn users(&self) -> &[Contact] {
        &self.users
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Apply one state transition. The only place state is written.
    pub fn apply(&mut self, event: BoardEvent) {
        match event {
            BoardEvent::Loaded(users) => {
                self.users = users;
            }
            BoardEvent::FieldChanged(field, value) => {
                self.form.set(field, value);
            }
            BoardEvent::EditStarted(contact) => {
                self.form = ContactForm::from_contact(&contact);
                self.mode = FormMode::Editing(contact.id);
            }
            BoardEvent::Submitted | BoardEvent::Cancelled => {
                self.form = ContactForm::default();
                self.mode = FormMode::Listing;
                self.last_error = None;
            }
            BoardEvent::Deleted(id) => {
                if self.mode.editing_id() == Some(id.as_str()) {
                    self.form = ContactForm::default();
                    self.mode = FormMode::Listing;
                }
                self.last_error = None;
            }
            BoardEvent::Failed(message) => {
                self.last_error = Some(message);
            }
        }
    }

    /// Fetch the full list from the server
    pub async fn load(&mut self) {
        let event = match self.api.list().await {
            Ok(users) => BoardEvent::Loaded(users),
            Err(e) => BoardEvent::Failed(e.summary()),
        };
        self.apply(event);
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.apply(BoardEvent::FieldChanged(field, value));
    }

    /// Create in Listing mode, update in Editing mode; re-fetch on success
    pub async fn submit(&mut self) {
        let result = match &self.mode {
            FormMode::Listing => self.api.create(&self.form).await,
            FormMode::Editing(id) => self.api.update(id, &self.form).await,
        };

        match result {
            Ok(()) => {
                self.apply(BoardEvent::Submitted);
                self.load().await;
            }
            Err(e) => self.apply(BoardEvent::Failed(e.summary())),
        }
    }

    /// Copy a listed contact into the form. `false` if the id is not listed.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        let Some(contact) = self.users.iter().find(|c| c.id == id).cloned() else {
            return false;
        };
        self.apply(BoardEvent::EditStarted(contact));
        true
    }

    /// Delete a contact; re-fetch on success
    pub async fn delete(&mut self, id: &str) {
        match self.api.delete(id).await {
            Ok(()) => {
                self.apply(BoardEvent::Deleted(id.to_string()));
                self.load().await;
            }
            Err(e) => self.apply(BoardEvent::Failed(e.summary())),
        }
    }

    pub fn cancel(&mut self) {
        self.apply(BoardEvent::Cancelled);
    }

    /// Id of the contact shown on 1-based `row`
    pub fn row_id(&self, row: usize) -> Option<&str> {
        row.checked_sub(1)
            .and_then(|i| self.users.get(i))
            .map(|c| c.id.as_str())
    }
}

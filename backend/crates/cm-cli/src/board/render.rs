use crate::{ContactApi, ContactBoard, FormMode};

use std::fmt::Write;

impl<A: ContactApi> ContactBoard<A> {
    /// Plain-text view of the list, the form and the last error
    pub fn render(&self) -> String {
        let mut out = String::new();

        if self.users().is_empty() {
            out.push_str("(no contacts)\n");
        }
        for (i, c) in self.users().iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>3}. {} | {} | {}",
                i + 1,
                c.name,
                c.email,
                c.number
            );
        }

        out.push('\n');
        match self.mode() {
            FormMode::Listing => out.push_str("Add contact\n"),
            FormMode::Editing(id) => {
                let _ = writeln!(out, "Edit contact {}", id);
            }
        }
        let form = self.form();
        let _ = writeln!(out, "  name:   {}", form.name);
        let _ = writeln!(out, "  email:  {}", form.email);
        let _ = writeln!(out, "  number: {}", form.number);

        if let Some(error) = self.last_error() {
            let _ = writeln!(out, "\nError: {}", error);
        }

        out
    }
}

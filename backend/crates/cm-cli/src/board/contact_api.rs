use crate::{CliClientResult, Client, Contact, ContactForm};

use async_trait::async_trait;

/// The server calls the board needs
#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn list(&self) -> CliClientResult<Vec<Contact>>;

    async fn create(&self, form: &ContactForm) -> CliClientResult<()>;

    async fn update(&self, id: &str, form: &ContactForm) -> CliClientResult<()>;

    async fn delete(&self, id: &str) -> CliClientResult<()>;
}

#[async_trait]
impl ContactApi for Client {
    async fn list(&self) -> CliClientResult<Vec<Contact>> {
        let value = self.list_users().await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn create(&self, form: &ContactForm) -> CliClientResult<()> {
        self.create_user(&form.to_fields()).await?;
        Ok(())
    }

    async fn update(&self, id: &str, form: &ContactForm) -> CliClientResult<()> {
        self.update_user(id, &form.to_fields()).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> CliClientResult<()> {
        self.delete_user(id).await?;
        Ok(())
    }
}

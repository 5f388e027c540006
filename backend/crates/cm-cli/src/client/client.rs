use crate::{CliClientResult, ClientError};

use cm_core::UserFields;

use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;

const USERS_PATH: &str = "/api/users";

/// HTTP client for the cm-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:5000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and turn non-success responses into `ClientError::Api`
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::from_response(status.as_u16(), &text));
        }

        Ok(serde_json::from_str(&text)?)
    }

    fn user_path(id: &str) -> String {
        format!("{}/{}", USERS_PATH, id)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// List all users
    pub async fn list_users(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, USERS_PATH);
        self.execute(req).await
    }

    /// Get a user by ID (`null` when no such user)
    pub async fn get_user(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &Self::user_path(id));
        self.execute(req).await
    }

    /// Create a user from the provided fields
    pub async fn create_user(&self, fields: &UserFields) -> CliClientResult<Value> {
        let req = self.request(Method::POST, USERS_PATH).json(fields);
        self.execute(req).await
    }

    /// Merge the provided fields into a user (`null` when no such user)
    pub async fn update_user(&self, id: &str, fields: &UserFields) -> CliClientResult<Value> {
        let req = self.request(Method::PUT, &Self::user_path(id)).json(fields);
        self.execute(req).await
    }

    /// Delete a user
    pub async fn delete_user(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &Self::user_path(id));
        self.execute(req).await
    }
}

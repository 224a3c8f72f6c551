use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder, Response};
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{interpret_response, ApiError, ChangePasswordRequest, ProfileUpdate, User};

use super::config::ClientConfig;
use crate::state::PasswordApi;

/// API client for communicating with the backend server
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create an API client for the configured backend
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// Fetch the signed-in user
    pub async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        let request = Request::get(&self.url("/auth/me"))
            .header("Authorization", &Self::bearer(token));
        let payload = Self::read(request.send().await).await?;
        Self::decode(payload)
    }

    /// Apply a partial profile update and return the stored user
    pub async fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<User, ApiError> {
        let request = Request::put(&self.url("/auth/me"))
            .header("Authorization", &Self::bearer(token))
            .json(update)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        let payload = Self::read(request.send().await).await?;
        Self::decode(payload)
    }

    async fn read(response: Result<Response, gloo::net::Error>) -> Result<Value, ApiError> {
        let response = response.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        interpret_response(status, &body).inspect_err(|e| {
            debug!(target: "api", "Request failed: {}", e);
        })
    }

    fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
        serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn authorized_post(&self, path: &str, token: &str) -> RequestBuilder {
        Request::post(&self.url(path)).header("Authorization", &Self::bearer(token))
    }
}

#[async_trait(?Send)]
impl PasswordApi for ApiClient {
    async fn change_password(
        &self,
        token: &str,
        request: &ChangePasswordRequest,
    ) -> Result<(), ApiError> {
        let request = self
            .authorized_post("/auth/change-password", token)
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        Self::read(request.send().await).await.map(|_| ())
    }
}

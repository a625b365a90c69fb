use crate::{CliClientResult, ClientError};

use pilot_core::{NewPilotRequest, OptionField};

use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;

/// HTTP client for the pilot-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:5000")
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

    /// Execute request and handle errors
    ///
    /// Error bodies are `{"error": "<message>"}`; anything else falls back to
    /// the status reason.
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| body.get("error")?.as_str().map(String::from))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(serde_json::from_str(&text)?)
    }

    // =========================================================================
    // Pilot request operations
    // =========================================================================

    /// Submit a validated pilot request
    pub async fn submit_pilot_request(&self, request: &NewPilotRequest) -> CliClientResult<Value> {
        let req = self
            .request(Method::POST, "/api/pilot-requests")
            .json(request);
        self.execute(req).await
    }

    /// List every pilot request, newest first
    pub async fn list_pilot_requests(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/pilot-requests");
        self.execute(req).await
    }

    /// Fetch the option catalog, or only the list for `field`
    pub async fn list_pilot_options(&self, field: Option<OptionField>) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/pilot-options");
        let mut catalog = self.execute(req).await?;

        Ok(match field {
            Some(field) => catalog
                .get_mut(field.as_str())
                .map(Value::take)
                .unwrap_or(Value::Array(Vec::new())),
            None => catalog,
        })
    }
}

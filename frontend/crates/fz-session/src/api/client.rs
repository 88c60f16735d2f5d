use crate::api::{AccountRecord, ApiError, Result as ApiResult};
use crate::identity::{ClientProfile, FreelancerProfile, deserialize_optional_identifier};
use crate::session::RegisterRequest;

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP client for the Freelanza REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://localhost:8080")
    /// * `timeout` - Per-request timeout; None keeps the reqwest default
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ApiResult<Self> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| ApiError::url(format!("'{base_url}': {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::url(format!("'{base_url}' cannot be a base URL")));
        }

        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            client: builder.build()?,
        })
    }

    pub fn from_config(config: &fz_config::ApiConfig) -> ApiResult<Self> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an absolute URL from path segments. Segments are percent-encoded,
    /// so emails and ids can be passed as-is.
    pub fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::url(format!("'{}' cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn token_endpoint(&self, segments: &[&str], token: &str) -> ApiResult<Url> {
        let mut url = self.endpoint(segments)?;
        url.query_pairs_mut().append_pair("token", token);
        Ok(url)
    }

    /// Send a request and return the raw body.
    ///
    /// Non-2xx responses become `ApiError::Api` carrying whatever message the
    /// backend put in the body.
    async fn execute(&self, req: reqwest::RequestBuilder) -> ApiResult<String> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("Backend responded {status}");
            return Err(ApiError::api_error(
                status.as_u16(),
                extract_error_message(&body),
            ));
        }

        Ok(body)
    }

    async fn execute_json<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ApiResult<T> {
        let body = self.execute(req).await?;
        Ok(serde_json::from_str(&body)?)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Exchange credentials for a token. `Ok(None)` when the backend accepted
    /// the request but returned no token.
    pub async fn issue_token(&self, username: &str, password: &str) -> ApiResult<Option<String>> {
        #[derive(Serialize)]
        struct TokenRequest<'a> {
            username: &'a str,
            password: &'a str,
        }

        let url = self.endpoint(&["api", "auth", "token"])?;
        let req = self
            .client
            .request(Method::POST, url)
            .json(&TokenRequest { username, password });
        let body = self.execute(req).await?;

        Ok(extract_token(&body))
    }

    /// Check a token with the backend. `Ok(false)` when the backend answers
    /// with an explicit `false`; rejections surface as `ApiError::Api`.
    pub async fn validate_token(&self, token: &str) -> ApiResult<bool> {
        let url = self.token_endpoint(&["api", "auth", "validate"], token)?;
        let body = self.execute(self.client.request(Method::GET, url)).await?;

        Ok(!body.trim().eq_ignore_ascii_case("false"))
    }

    /// Fetch the account behind a token.
    pub async fn fetch_account(&self, token: &str) -> ApiResult<AccountRecord> {
        let url = self.token_endpoint(&["api", "auth", "user"], token)?;
        self.execute_json(self.client.request(Method::GET, url)).await
    }

    /// Create an account. Returns the backend's success message.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<String> {
        let url = self.endpoint(&["api", "auth", "register"])?;
        let req = self.client.request(Method::POST, url).json(request);
        let body = self.execute(req).await?;

        Ok(extract_message(&body).unwrap_or_default())
    }

    // =========================================================================
    // Role-specific identifier lookups
    // =========================================================================

    /// Resolve the freelancer ID for an account email
    pub async fn freelancer_id_by_email(&self, email: &str) -> ApiResult<String> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct FreelancerIdResponse {
            #[serde(default, deserialize_with = "deserialize_optional_identifier")]
            freelancer_id: Option<String>,
        }

        let url = self.endpoint(&["api", "freelancers", "email", email])?;
        let response: FreelancerIdResponse = self
            .execute_json(self.client.request(Method::GET, url))
            .await?;

        response
            .freelancer_id
            .ok_or_else(|| ApiError::missing_field("freelancerId"))
    }

    /// Resolve the client ID for an account email
    pub async fn client_id_by_email(&self, email: &str) -> ApiResult<String> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct ClientIdResponse {
            #[serde(default, deserialize_with = "deserialize_optional_identifier")]
            client_id: Option<String>,
        }

        let url = self.endpoint(&["api", "clients", "email", email])?;
        let response: ClientIdResponse = self
            .execute_json(self.client.request(Method::GET, url))
            .await?;

        response
            .client_id
            .ok_or_else(|| ApiError::missing_field("clientId"))
    }

    // =========================================================================
    // Profile Operations
    // =========================================================================

    /// Get a client profile by client ID
    pub async fn get_client(&self, client_id: &str) -> ApiResult<ClientProfile> {
        let url = self.endpoint(&["api", "clients", client_id])?;
        self.execute_json(self.client.request(Method::GET, url)).await
    }

    /// Get a freelancer profile by freelancer ID
    pub async fn get_freelancer(&self, freelancer_id: &str) -> ApiResult<FreelancerProfile> {
        let url = self.endpoint(&["api", "freelancers", freelancer_id])?;
        self.execute_json(self.client.request(Method::GET, url)).await
    }

    /// Replace a client profile
    pub async fn update_client(
        &self,
        client_id: &str,
        profile: &ClientProfile,
    ) -> ApiResult<ClientProfile> {
        let url = self.endpoint(&["api", "clients", client_id])?;
        let req = self.client.request(Method::PUT, url).json(profile);
        self.execute_json(req).await
    }

    /// Replace a freelancer profile
    pub async fn update_freelancer(
        &self,
        freelancer_id: &str,
        profile: &FreelancerProfile,
    ) -> ApiResult<FreelancerProfile> {
        let url = self.endpoint(&["api", "freelancers", freelancer_id])?;
        let req = self.client.request(Method::PUT, url).json(profile);
        self.execute_json(req).await
    }
}

/// Pull a human-readable message out of an error body.
///
/// Checks a JSON `message` field, then a JSON `error` string, then falls back
/// to the plain-text body.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    extract_message(body).filter(|m| !m.is_empty())
}

fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| {
                map.get(*key)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
            })
            .map(str::to_string),
        Ok(Value::String(s)) => Some(s.trim().to_string()),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Accepts `{"token": "..."}`, a JSON string, or a bare text body.
pub(crate) fn extract_token(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let token = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => map.get("token").and_then(Value::as_str).map(str::to_string),
        Ok(Value::String(s)) => Some(s),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_string()),
    };

    token.filter(|t| !t.trim().is_empty())
}

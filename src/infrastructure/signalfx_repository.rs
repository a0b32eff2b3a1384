// SignalFx REST repository implementation
use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::dashboard::ENDPOINT;
use crate::domain::error::RemoteError;
use crate::domain::resolution::DashboardSearchResults;
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;

const TOKEN_HEADER: &str = "X-SF-Token";

/// Talks to the dashboard REST API. The inner client is the shared session:
/// clone the repository (or reuse it) to keep connections and auth together.
#[derive(Debug, Clone)]
pub struct SignalFxRepository {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct WrittenDashboard {
    id: String,
}

impl SignalFxRepository {
    pub fn new(base_url: String, token: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, token)
    }

    pub fn with_client(client: reqwest::Client, base_url: String, token: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn search_url(&self, name: &str) -> String {
        format!("{}/dashboard?name={}", self.base_url, urlencoding::encode(name))
    }

    fn create_url(&self) -> String {
        format!("{}{}", self.base_url, ENDPOINT)
    }

    fn update_url(&self, id: &str) -> String {
        format!("{}/dashboard/{}", self.base_url, urlencoding::encode(id))
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<reqwest::Response, RemoteError> {
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .header(TOKEN_HEADER, &self.token)
            .header("Accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(RemoteError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("{} answered {}: {}", url, status, body);
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn write(&self, method: Method, url: &str, body: &Value) -> Result<String, RemoteError> {
        let written = self
            .send(method, url, Some(body))
            .await?
            .json::<WrittenDashboard>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(written.id)
    }
}

#[async_trait]
impl DashboardRepository for SignalFxRepository {
    async fn search(&self, name: &str) -> Result<DashboardSearchResults, RemoteError> {
        let url = self.search_url(name);
        let results = self
            .send(Method::GET, &url, None)
            .await?
            .json::<DashboardSearchResults>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;

        tracing::debug!("Search for '{}' returned count {}", name, results.count);
        Ok(results)
    }

    async fn create(&self, body: &Value) -> Result<String, RemoteError> {
        self.write(Method::POST, &self.create_url(), body).await
    }

    async fn update(&self, id: &str, body: &Value) -> Result<String, RemoteError> {
        self.write(Method::PUT, &self.update_url(id), body).await
    }
}

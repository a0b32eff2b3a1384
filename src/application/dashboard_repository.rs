// Repository trait for remote dashboard access
use crate::domain::error::RemoteError;
use crate::domain::resolution::DashboardSearchResults;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Search dashboards by name. The remote may also return partial matches.
    async fn search(&self, name: &str) -> Result<DashboardSearchResults, RemoteError>;

    /// Create a dashboard from its wire body, returning the new remote id
    async fn create(&self, body: &Value) -> Result<String, RemoteError>;

    /// Replace the dashboard stored under `id`, returning its remote id
    async fn update(&self, id: &str, body: &Value) -> Result<String, RemoteError>;
}

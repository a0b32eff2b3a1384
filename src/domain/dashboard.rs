// Dashboard domain model
use super::chart::ChartDefinition;
use super::error::DashboardError;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Create endpoint for simple dashboards, relative to the API base URL.
pub const ENDPOINT: &str = "/dashboard/simple";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardDefinition {
    pub name: Option<String>,
    pub description: Option<String>,
    pub charts: Vec<ChartDefinition>,
    /// Set once the dashboard has been created or updated remotely.
    pub remote_id: Option<String>,
    pub extra: BTreeMap<String, Value>,
}

impl DashboardDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn endpoint(&self) -> &'static str {
        ENDPOINT
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends charts after any already present, keeping their order.
    pub fn with_charts<I>(mut self, charts: I) -> Self
    where
        I: IntoIterator<Item = ChartDefinition>,
    {
        self.charts.extend(charts);
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// The dashboard name, which must be set and non-empty before any remote lookup.
    pub fn require_name(&self) -> Result<&str, DashboardError> {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(DashboardError::InvalidRequest(
                "dashboard name must be set before it can be published".to_string(),
            )),
        }
    }

    /// Looks up a top-level option of the serialized dashboard.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self.to_body() {
            Value::Object(mut body) => body.remove(key),
            _ => None,
        }
    }

    pub fn get_or(&self, key: &str, default: Value) -> Value {
        self.get(key).unwrap_or(default)
    }

    pub fn to_body(&self) -> Value {
        let mut body: Map<String, Value> = self
            .extra
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        if let Some(name) = &self.name {
            body.insert("name".to_string(), json!(name));
        }
        if let Some(description) = &self.description {
            body.insert("description".to_string(), json!(description));
        }
        body.insert(
            "charts".to_string(),
            Value::Array(self.charts.iter().map(ChartDefinition::to_body).collect()),
        );

        Value::Object(body)
    }

    pub fn to_json(&self) -> Result<String, DashboardError> {
        Ok(serde_json::to_string(&self.to_body())?)
    }
}

// Configuration - API credentials and the dashboards to publish
use crate::domain::chart::{ChartDefinition, ChartKind, PlotType};
use crate::domain::dashboard::DashboardDefinition;
use crate::domain::resolution::{PublishOptions, ResolutionMode};
use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_BASE_URL: &str = "https://api.signalfx.com/v2";

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub api: ApiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub token: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardsConfig {
    #[serde(default)]
    pub mode: ResolutionMode,
    #[serde(default)]
    pub dry_run: bool,
    /// Values substituted into `${name}` placeholders of chart programs.
    #[serde(default)]
    pub variables: HashMap<String, String>,
    #[serde(default)]
    pub dashboards: Vec<DashboardConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub charts: Vec<ChartConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    pub name: String,
    pub program: String,
    pub description: Option<String>,
    #[serde(default)]
    pub kind: ChartKind,
    pub plot_type: Option<PlotType>,
}

impl DashboardsConfig {
    pub fn publish_options(&self) -> PublishOptions {
        PublishOptions::new(self.mode).dry_run(self.dry_run)
    }

    pub fn definitions(&self) -> Vec<DashboardDefinition> {
        self.dashboards
            .iter()
            .map(|dashboard| dashboard.to_definition(&self.variables))
            .collect()
    }
}

impl DashboardConfig {
    pub fn to_definition(&self, vars: &HashMap<String, String>) -> DashboardDefinition {
        let mut definition = DashboardDefinition::new()
            .with_name(prepare_program(&self.name, vars))
            .with_charts(self.charts.iter().map(|chart| chart.to_definition(vars)));
        if let Some(description) = &self.description {
            definition = definition.with_description(prepare_program(description, vars));
        }
        definition
    }
}

impl ChartConfig {
    pub fn to_definition(&self, vars: &HashMap<String, String>) -> ChartDefinition {
        let mut chart = ChartDefinition::new(self.kind)
            .with_name(self.name.clone())
            .with_program(prepare_program(&self.program, vars));
        if let Some(description) = &self.description {
            chart = chart.with_description(description.clone());
        }
        if let Some(plot_type) = self.plot_type {
            chart = chart.with_default_plot_type(plot_type);
        }
        chart
    }
}

/// API settings from `config/signalfx` (optional), overridden by
/// `SIGNALFX_API__TOKEN` / `SIGNALFX_API__BASE_URL`.
pub fn load_api_config() -> anyhow::Result<ApiConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/signalfx").required(false))
        .add_source(
            config::Environment::with_prefix("SIGNALFX")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_dashboards_config() -> anyhow::Result<DashboardsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboards"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Replace template variables in a chart program
pub fn prepare_program(program: &str, vars: &HashMap<String, String>) -> String {
    let mut result = program.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

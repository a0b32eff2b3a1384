// Chart domain model
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// How a time series chart draws its plots by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlotType {
    LineChart,
    AreaChart,
    ColumnChart,
    Histogram,
}

impl PlotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlotType::LineChart => "LineChart",
            PlotType::AreaChart => "AreaChart",
            PlotType::ColumnChart => "ColumnChart",
            PlotType::Histogram => "Histogram",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartKind {
    #[default]
    TimeSeriesChart,
    SingleValue,
    List,
    Text,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::TimeSeriesChart => "TimeSeriesChart",
            ChartKind::SingleValue => "SingleValue",
            ChartKind::List => "List",
            ChartKind::Text => "Text",
        }
    }
}

/// A single chart on a dashboard. The resolver never looks inside it; it is
/// only serialized into the dashboard body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ChartDefinition {
    pub name: Option<String>,
    pub program_text: Option<String>,
    pub description: Option<String>,
    pub kind: ChartKind,
    pub default_plot_type: Option<PlotType>,
}

impl ChartDefinition {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn time_series() -> Self {
        Self::new(ChartKind::TimeSeriesChart)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program_text = Some(program.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default_plot_type(mut self, plot_type: PlotType) -> Self {
        self.default_plot_type = Some(plot_type);
        self
    }

    pub fn to_body(&self) -> Value {
        let mut options = Map::new();
        options.insert("type".to_string(), json!(self.kind.as_str()));
        if let Some(plot_type) = self.default_plot_type {
            options.insert("defaultPlotType".to_string(), json!(plot_type.as_str()));
        }

        let mut body = Map::new();
        if let Some(name) = &self.name {
            body.insert("name".to_string(), json!(name));
        }
        if let Some(program) = &self.program_text {
            body.insert("programText".to_string(), json!(program));
        }
        if let Some(description) = &self.description {
            body.insert("description".to_string(), json!(description));
        }
        body.insert("options".to_string(), Value::Object(options));

        Value::Object(body)
    }
}

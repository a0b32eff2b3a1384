// Resolution domain model - how a named dashboard relates to what already exists remotely
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingDashboardRecord {
    pub id: String,
    pub name: String,
    /// Everything else the remote returned for this dashboard.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl ExistingDashboardRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            metadata: Map::new(),
        }
    }
}

/// Raw answer of a dashboard search. The listing may contain partial name matches.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardSearchResults {
    pub count: u64,
    #[serde(default)]
    pub results: Vec<ExistingDashboardRecord>,
}

impl DashboardSearchResults {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn into_records(self) -> Vec<ExistingDashboardRecord> {
        if self.count == 0 {
            Vec::new()
        } else {
            self.results
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionResult {
    NoMatch,
    ExactSingleMatch(ExistingDashboardRecord),
    ExactMultipleMatches(Vec<ExistingDashboardRecord>),
}

/// Classifies a listing against the requested name. Only exact name equality
/// counts; partial matches from the search never block creation.
pub fn classify(name: &str, records: &[ExistingDashboardRecord]) -> ResolutionResult {
    let mut exact: Vec<ExistingDashboardRecord> = records
        .iter()
        .filter(|record| record.name == name)
        .cloned()
        .collect();

    match exact.len() {
        0 => ResolutionResult::NoMatch,
        1 => ResolutionResult::ExactSingleMatch(exact.remove(0)),
        _ => ResolutionResult::ExactMultipleMatches(exact),
    }
}

pub fn has_multiple_matches(name: &str, records: &[ExistingDashboardRecord]) -> bool {
    records.iter().filter(|record| record.name == name).count() > 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMode {
    /// Fail when the dashboard already exists.
    #[default]
    Plain,
    /// Overwrite an existing dashboard without asking.
    Force,
    /// Ask the operator before overwriting.
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PublishOptions {
    pub mode: ResolutionMode,
    pub dry_run: bool,
}

impl PublishOptions {
    pub fn new(mode: ResolutionMode) -> Self {
        Self {
            mode,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteAction {
    Create,
    Update { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Created { id: String },
    Updated { id: String },
    /// The write that would have been issued, with its JSON body.
    DryRun { action: WriteAction, body: String },
}

impl PublishOutcome {
    pub fn remote_id(&self) -> Option<&str> {
        match self {
            PublishOutcome::Created { id } | PublishOutcome::Updated { id } => Some(id),
            PublishOutcome::DryRun { .. } => None,
        }
    }
}

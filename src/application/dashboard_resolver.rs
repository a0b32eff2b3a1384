// Dashboard resolver - Use case for publishing a dashboard by name
use crate::application::confirmation::Confirmation;
use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::dashboard::DashboardDefinition;
use crate::domain::error::{DashboardError, RemoteError};
use crate::domain::resolution::{
    classify, ExistingDashboardRecord, PublishOptions, PublishOutcome, ResolutionMode,
    ResolutionResult, WriteAction,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardResolver {
    repository: Arc<dyn DashboardRepository>,
    confirmation: Arc<dyn Confirmation>,
}

impl DashboardResolver {
    pub fn new(
        repository: Arc<dyn DashboardRepository>,
        confirmation: Arc<dyn Confirmation>,
    ) -> Self {
        Self {
            repository,
            confirmation,
        }
    }

    /// List remote dashboards whose name matches `name`, partial matches included.
    /// A 404 from the remote is an empty listing.
    pub async fn fetch_existing(
        &self,
        name: &str,
    ) -> Result<Vec<ExistingDashboardRecord>, DashboardError> {
        if name.trim().is_empty() {
            return Err(DashboardError::InvalidRequest(
                "cannot look up dashboards without a name".to_string(),
            ));
        }

        match self.repository.search(name).await {
            Ok(results) => Ok(results.into_records()),
            Err(RemoteError::NotFound(detail)) => {
                tracing::debug!("No dashboards found for '{}': {}", name, detail);
                Ok(Vec::new())
            }
            Err(source) => Err(DashboardError::RemoteRead {
                name: name.to_string(),
                source,
            }),
        }
    }

    /// Create the dashboard, or overwrite the one existing dashboard with the same
    /// name when `options.mode` allows it. Listing state is re-read on every call.
    pub async fn resolve(
        &self,
        definition: &mut DashboardDefinition,
        options: PublishOptions,
    ) -> Result<PublishOutcome, DashboardError> {
        let name = definition.require_name()?.to_string();
        let records = self.fetch_existing(&name).await?;
        tracing::debug!("Listing for '{}' returned {} dashboards", name, records.len());

        let action = match classify(&name, &records) {
            ResolutionResult::NoMatch => WriteAction::Create,
            ResolutionResult::ExactMultipleMatches(matches) => {
                return Err(DashboardError::MultipleExactMatches {
                    name,
                    ids: matches.into_iter().map(|record| record.id).collect(),
                });
            }
            ResolutionResult::ExactSingleMatch(record) => match options.mode {
                ResolutionMode::Plain => {
                    return Err(DashboardError::AlreadyExists {
                        name,
                        id: record.id,
                    });
                }
                ResolutionMode::Force => WriteAction::Update { id: record.id },
                ResolutionMode::Interactive => {
                    if self.ask_overwrite(&name, &record.id).await? {
                        WriteAction::Update { id: record.id }
                    } else {
                        tracing::info!("Overwrite of '{}' declined", name);
                        return Err(DashboardError::AlreadyExists {
                            name,
                            id: record.id,
                        });
                    }
                }
            },
        };

        let body = definition.to_body();

        if options.dry_run {
            tracing::info!("Dry run for '{}': skipping {:?}", name, action);
            return Ok(PublishOutcome::DryRun {
                action,
                body: serde_json::to_string(&body)?,
            });
        }

        let outcome = match action {
            WriteAction::Create => {
                let id = self
                    .repository
                    .create(&body)
                    .await
                    .map_err(DashboardError::RemoteWrite)?;
                tracing::info!("Created dashboard '{}' ({})", name, id);
                PublishOutcome::Created { id }
            }
            WriteAction::Update { id } => {
                let id = self
                    .repository
                    .update(&id, &body)
                    .await
                    .map_err(DashboardError::RemoteWrite)?;
                tracing::info!("Updated dashboard '{}' ({})", name, id);
                PublishOutcome::Updated { id }
            }
        };

        definition.remote_id = outcome.remote_id().map(str::to_string);
        Ok(outcome)
    }

    /// Resolve each definition in turn. One failure does not stop the rest.
    pub async fn publish_all(
        &self,
        definitions: &mut [DashboardDefinition],
        options: PublishOptions,
    ) -> Vec<Result<PublishOutcome, DashboardError>> {
        let mut results = Vec::with_capacity(definitions.len());
        for definition in definitions.iter_mut() {
            results.push(self.resolve(definition, options).await);
        }
        results
    }

    async fn ask_overwrite(&self, name: &str, id: &str) -> Result<bool, DashboardError> {
        let confirmation = Arc::clone(&self.confirmation);
        let prompt = format!("Dashboard '{}' already exists (id {}). Overwrite it?", name, id);

        tokio::task::spawn_blocking(move || confirmation.confirm(&prompt))
            .await
            .map_err(|e| DashboardError::Confirmation(e.to_string()))
    }
}

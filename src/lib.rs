// Build dashboards locally and publish them to SignalFx by name
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::confirmation::{Confirmation, FixedAnswer};
pub use application::dashboard_repository::DashboardRepository;
pub use application::dashboard_resolver::DashboardResolver;
pub use domain::chart::{ChartDefinition, ChartKind, PlotType};
pub use domain::dashboard::DashboardDefinition;
pub use domain::error::{DashboardError, RemoteError};
pub use domain::resolution::{
    classify, ExistingDashboardRecord, PublishOptions, PublishOutcome, ResolutionMode,
    ResolutionResult, WriteAction,
};

// Application layer - Ports and the publishing use case
pub mod confirmation;
pub mod dashboard_repository;
pub mod dashboard_resolver;

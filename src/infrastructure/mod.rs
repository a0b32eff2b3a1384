// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod signalfx_repository;
pub mod terminal_confirmation;

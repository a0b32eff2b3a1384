// Domain layer - Dashboard definitions and the rules for matching them remotely
pub mod chart;
pub mod dashboard;
pub mod error;
pub mod resolution;

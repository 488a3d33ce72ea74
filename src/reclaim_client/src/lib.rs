pub mod recovery_service;
pub mod telemetry;

pub use recovery_service::{RecoveryService, ServiceError};

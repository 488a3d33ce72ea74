pub mod config;
pub mod http;
pub mod navigation;

pub use http::{MockRecoveryGateway, StorefrontApiClient};
pub use navigation::{NoopNavigator, RecordingNavigator};

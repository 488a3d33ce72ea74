pub mod mock_recovery_gateway;
pub mod storefront_api_client;

pub use mock_recovery_gateway::MockRecoveryGateway;
pub use storefront_api_client::StorefrontApiClient;

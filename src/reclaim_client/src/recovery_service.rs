use thiserror::Error;

use reclaim_adapters::{StorefrontApiClient, config::ClientSettings};
use reclaim_application::{RequestOtpFlow, ResetPasswordFlow, VerifyEmailFlow};
use reclaim_core::{Navigator, Route, Session, VerificationLink};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Entry point wiring the flows to the storefront backend.
///
/// Owns one shared HTTP client; every flow instance gets cheap clones of
/// the gateway and navigator, so flows stay independent of each other as
/// required - they share no mutable state.
pub struct RecoveryService<N>
where
    N: Navigator + Clone,
{
    gateway: StorefrontApiClient,
    navigator: N,
}

impl<N> RecoveryService<N>
where
    N: Navigator + Clone,
{
    pub fn from_settings(settings: &ClientSettings, navigator: N) -> Result<Self, ServiceError> {
        let http_client = reqwest::Client::builder()
            .timeout(settings.api.timeout())
            .build()?;

        Ok(Self {
            gateway: StorefrontApiClient::new(settings.api.base_url.clone(), http_client),
            navigator,
        })
    }

    /// A fresh phase-1 flow for the request-OTP view.
    pub fn request_otp_flow(&self) -> RequestOtpFlow<StorefrontApiClient, N> {
        RequestOtpFlow::new(self.gateway.clone(), self.navigator.clone())
    }

    /// A fresh phase-2 flow for the reset-password view.
    pub fn reset_password_flow(&self) -> ResetPasswordFlow<StorefrontApiClient, N> {
        ResetPasswordFlow::new(self.gateway.clone(), self.navigator.clone())
    }

    /// A handler for an email-verification link.
    pub fn verify_email_flow(&self, link: VerificationLink) -> VerifyEmailFlow<StorefrontApiClient> {
        VerifyEmailFlow::new(self.gateway.clone(), link)
    }

    /// A handler for an inbound `/user/{id}/verify/{token}` path, if it
    /// parses.
    pub fn verify_email_flow_from_path(
        &self,
        path: &str,
    ) -> Option<VerifyEmailFlow<StorefrontApiClient>> {
        VerificationLink::from_path(path).map(|link| self.verify_email_flow(link))
    }

    /// Decide where a navigation lands, evaluating the session snapshot
    /// once. Routes the session does not allow fall back to the login view.
    pub fn resolve(&self, session: &Session, requested: Route) -> Route {
        if session.allows(&requested) {
            requested
        } else {
            Route::Login
        }
    }

    /// Resolve and perform a navigation in one step.
    pub fn navigate(&self, session: &Session, requested: Route) {
        self.navigator.navigate(self.resolve(session, requested));
    }
}

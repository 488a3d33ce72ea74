//! Port trait for the recovery backend collaborator.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    link::VerificationLink,
    recovery::{RecoveryRequest, RecoveryVerification},
};

/// Discriminated failure at the collaborator boundary, replacing duck-typed
/// probing of optional nested message fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The server answered with an error-shaped response; the message is
    /// surfaced to the user verbatim.
    #[error("{message}")]
    Server { message: String },
    /// Transport failure, malformed response, or an error response without
    /// a usable message; surfaced via the flow's generic fallback.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl GatewayError {
    /// The user-visible message for this error, falling back to `generic`
    /// when the server did not provide one.
    pub fn surface<'a>(&'a self, generic: &'a str) -> &'a str {
        match self {
            GatewayError::Server { message } => message,
            GatewayError::Unexpected(_) => generic,
        }
    }
}

/// Backend endpoints consumed by the recovery flows. The `Ok` payload of
/// the two POSTs is the server-provided message.
#[async_trait]
pub trait RecoveryGateway: Send + Sync {
    /// Issue a one-time passcode for the address in `request`.
    async fn send_otp(&self, request: &RecoveryRequest) -> Result<String, GatewayError>;

    /// Verify the passcode and update the password in one call.
    async fn reset_password(
        &self,
        verification: &RecoveryVerification,
    ) -> Result<String, GatewayError>;

    /// Confirm an email-verification link. The success body is not needed
    /// by any caller.
    async fn verify_email(&self, link: &VerificationLink) -> Result<(), GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_surface_verbatim() {
        let err = GatewayError::Server {
            message: "Invalid OTP".to_string(),
        };
        assert_eq!(err.surface("Error resetting password."), "Invalid OTP");
    }

    #[test]
    fn unexpected_errors_surface_the_generic_fallback() {
        let err = GatewayError::Unexpected("connection refused".to_string());
        assert_eq!(
            err.surface("Error requesting OTP."),
            "Error requesting OTP."
        );
    }
}

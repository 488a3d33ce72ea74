//! Transient payloads for the two recovery phases.
//!
//! Both are built per submission and dropped when the network call
//! resolves; nothing here is persisted.

use secrecy::Secret;

/// Phase 1: ask the backend to issue a one-time passcode for this address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryRequest {
    pub email: String,
}

impl RecoveryRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Phase 2: the combined passcode check and password update.
///
/// The new password stays behind `Secret` until the serialization boundary;
/// `Debug` output redacts it.
pub struct RecoveryVerification {
    pub email: String,
    pub otp: String,
    pub new_password: Secret<String>,
}

impl RecoveryVerification {
    pub fn new(
        email: impl Into<String>,
        otp: impl Into<String>,
        new_password: Secret<String>,
    ) -> Self {
        Self {
            email: email.into(),
            otp: otp.into(),
            new_password,
        }
    }
}

impl std::fmt::Debug for RecoveryVerification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecoveryVerification")
            .field("email", &self.email)
            .field("otp", &self.otp)
            .field("new_password", &"[REDACTED]")
            .finish()
    }
}

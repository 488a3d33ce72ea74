use reclaim_core::{LinkStatus, RecoveryGateway, VerificationLink};

/// Consumes a `(userId, token)` pair from an inbound link and confirms it
/// against the backend. Independent of the OTP flows.
///
/// The token is opaque; no client-side validation happens before the call.
/// Re-activating issues a fresh call each time - prior results are not
/// memoized, and idempotent handling of an already-used token is the
/// backend's contract.
pub struct VerifyEmailFlow<G>
where
    G: RecoveryGateway,
{
    gateway: G,
    link: VerificationLink,
    status: LinkStatus,
    active: bool,
}

impl<G> VerifyEmailFlow<G>
where
    G: RecoveryGateway,
{
    pub fn new(gateway: G, link: VerificationLink) -> Self {
        Self {
            gateway,
            link,
            status: LinkStatus::Pending,
            active: true,
        }
    }

    pub fn status(&self) -> LinkStatus {
        self.status
    }

    pub fn link(&self) -> &VerificationLink {
        &self.link
    }

    /// Issue one verification call and record its outcome.
    ///
    /// A completion arriving after `teardown` is discarded instead of
    /// touching released state.
    #[tracing::instrument(name = "VerifyEmailFlow::activate", skip(self), fields(user_id = %self.link.user_id))]
    pub async fn activate(&mut self) {
        let result = self.gateway.verify_email(&self.link).await;
        if !self.active {
            tracing::debug!("verification completed after teardown, discarding");
            return;
        }
        match result {
            Ok(()) => {
                self.status = LinkStatus::Verified;
            }
            Err(error) => {
                tracing::warn!(%error, "email verification failed");
                self.status = LinkStatus::Invalid;
            }
        }
    }

    /// Mark the owning view as gone; late completions become no-ops.
    pub fn teardown(&mut self) {
        self.active = false;
    }
}

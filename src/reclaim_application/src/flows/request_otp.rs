use reclaim_core::{
    FlowState, Navigator, RecoveryGateway, RecoveryRequest, Route, validate_email,
};

/// Fallback shown when the server gave no usable message.
const GENERIC_FAILURE: &str = "Error requesting OTP.";

/// Phase 1 of the recovery journey: collect an email, validate it, ask the
/// backend to issue a one-time passcode, and hand the user over to the
/// reset view on success.
///
/// The flow owns its state; callers observe it through `state()` and
/// `email_error()` and disable the trigger while `is_loading()`.
pub struct RequestOtpFlow<G, N>
where
    G: RecoveryGateway,
    N: Navigator,
{
    gateway: G,
    navigator: N,
    state: FlowState,
    email_error: String,
}

impl<G, N> RequestOtpFlow<G, N>
where
    G: RecoveryGateway,
    N: Navigator,
{
    pub fn new(gateway: G, navigator: N) -> Self {
        Self {
            gateway,
            navigator,
            state: FlowState::Idle,
            email_error: String::new(),
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn email_error(&self) -> &str {
        &self.email_error
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Run the issuance flow for `email`.
    ///
    /// Validation always completes before any dispatch; invalid input sets
    /// the field error and never touches the network. Success is terminal
    /// for this instance and navigates to the reset view; failure surfaces
    /// the server message (or the generic fallback) and leaves the flow
    /// resubmittable.
    #[tracing::instrument(name = "RequestOtpFlow::request_otp", skip_all)]
    pub async fn request_otp(&mut self, email: &str) {
        self.email_error.clear();
        self.state = FlowState::Validating;

        let error = validate_email(email);
        if !error.is_empty() {
            self.email_error = error;
            self.state = FlowState::Idle;
            return;
        }

        self.state = FlowState::Submitting;

        let request = RecoveryRequest::new(email);
        match self.gateway.send_otp(&request).await {
            Ok(message) => {
                tracing::info!("OTP issued, moving to reset view");
                self.state = FlowState::Success(message);
                self.navigator.navigate(Route::ResetPassword);
            }
            Err(error) => {
                tracing::warn!(%error, "OTP issuance failed");
                self.state = FlowState::Failure(error.surface(GENERIC_FAILURE).to_string());
            }
        }
    }
}

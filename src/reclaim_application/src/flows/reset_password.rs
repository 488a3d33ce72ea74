use secrecy::{ExposeSecret, Secret};

use reclaim_core::{
    FieldErrors, FlowState, Navigator, RecoveryGateway, RecoveryVerification, Route,
    validate_reset,
};

/// Fallback shown when the server gave no usable message.
const GENERIC_FAILURE: &str = "Error resetting password.";

/// Phase 2 of the recovery journey: verify the passcode and set the new
/// password in one combined submission, then redirect to login.
pub struct ResetPasswordFlow<G, N>
where
    G: RecoveryGateway,
    N: Navigator,
{
    gateway: G,
    navigator: N,
    state: FlowState,
    errors: FieldErrors,
}

impl<G, N> ResetPasswordFlow<G, N>
where
    G: RecoveryGateway,
    N: Navigator,
{
    pub fn new(gateway: G, navigator: N) -> Self {
        Self {
            gateway,
            navigator,
            state: FlowState::Idle,
            errors: FieldErrors::default(),
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Run the combined verification-and-reset submission.
    ///
    /// All three fields are validated before any network access; if any
    /// fails, the full error map is stored and nothing is sent. On server
    /// failure the passcode is not invalidated client-side: the server is
    /// the sole authority on OTP validity and the same code may be
    /// resubmitted.
    #[tracing::instrument(name = "ResetPasswordFlow::submit_reset", skip_all)]
    pub async fn submit_reset(&mut self, email: &str, otp: &str, new_password: &Secret<String>) {
        self.state = FlowState::Validating;

        self.errors = validate_reset(email, otp, new_password.expose_secret());
        if !self.errors.is_clean() {
            self.state = FlowState::Idle;
            return;
        }

        self.state = FlowState::Submitting;

        let verification = RecoveryVerification::new(email, otp, new_password.clone());
        match self.gateway.reset_password(&verification).await {
            Ok(message) => {
                tracing::info!("password reset succeeded, redirecting to login");
                self.state = FlowState::Success(message);
                self.navigator.navigate(Route::Login);
            }
            Err(error) => {
                tracing::warn!(%error, "password reset failed");
                self.state = FlowState::Failure(error.surface(GENERIC_FAILURE).to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reclaim_core::{GatewayError, RecoveryRequest, VerificationLink};
    use std::sync::{Arc, Mutex};

    type ResetCall = (String, String, String);

    #[derive(Clone)]
    struct MockGateway {
        response: Arc<Result<String, GatewayError>>,
        calls: Arc<Mutex<Vec<ResetCall>>>,
    }

    impl MockGateway {
        fn replying(response: Result<String, GatewayError>) -> Self {
            Self {
                response: Arc::new(response),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn calls(&self) -> Vec<ResetCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RecoveryGateway for MockGateway {
        async fn send_otp(&self, _request: &RecoveryRequest) -> Result<String, GatewayError> {
            unimplemented!()
        }

        async fn reset_password(
            &self,
            verification: &RecoveryVerification,
        ) -> Result<String, GatewayError> {
            self.calls.lock().unwrap().push((
                verification.email.clone(),
                verification.otp.clone(),
                verification.new_password.expose_secret().clone(),
            ));
            self.response.as_ref().clone()
        }

        async fn verify_email(&self, _link: &VerificationLink) -> Result<(), GatewayError> {
            unimplemented!()
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNavigator {
        visited: Arc<Mutex<Vec<Route>>>,
    }

    impl RecordingNavigator {
        fn visited(&self) -> Vec<Route> {
            self.visited.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.visited.lock().unwrap().push(route);
        }
    }

    fn password(value: &str) -> Secret<String> {
        Secret::from(value.to_string())
    }

    #[tokio::test]
    async fn one_invalid_field_fills_the_whole_map_and_sends_nothing() {
        let gateway = MockGateway::replying(Ok("done".to_string()));
        let mut flow = ResetPasswordFlow::new(gateway.clone(), RecordingNavigator::default());

        flow.submit_reset("user@test.com", "12345", &password("Abcdef1!"))
            .await;

        assert!(flow.errors().email.is_empty());
        assert_eq!(flow.errors().otp, "OTP must be 6 digits");
        assert!(flow.errors().password.is_empty());
        assert_eq!(flow.state(), &FlowState::Idle);
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn all_invalid_fields_are_reported_together() {
        let gateway = MockGateway::replying(Ok("done".to_string()));
        let mut flow = ResetPasswordFlow::new(gateway.clone(), RecordingNavigator::default());

        flow.submit_reset("", "", &password("")).await;

        assert_eq!(flow.errors().email, "Email is required");
        assert_eq!(flow.errors().otp, "OTP is required");
        assert_eq!(flow.errors().password, "Password is required");
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn valid_submission_sends_the_combined_payload_once() {
        let gateway = MockGateway::replying(Ok("Password updated".to_string()));
        let navigator = RecordingNavigator::default();
        let mut flow = ResetPasswordFlow::new(gateway.clone(), navigator.clone());

        flow.submit_reset("user@test.com", "123456", &password("Abcdef1!"))
            .await;

        assert_eq!(
            gateway.calls(),
            [(
                "user@test.com".to_string(),
                "123456".to_string(),
                "Abcdef1!".to_string()
            )]
        );
        assert_eq!(
            flow.state(),
            &FlowState::Success("Password updated".to_string())
        );
        assert_eq!(navigator.visited(), [Route::Login]);
    }

    #[tokio::test]
    async fn rejected_otp_surfaces_the_server_message_and_stays_resubmittable() {
        let gateway = MockGateway::replying(Err(GatewayError::Server {
            message: "Invalid OTP".to_string(),
        }));
        let navigator = RecordingNavigator::default();
        let mut flow = ResetPasswordFlow::new(gateway.clone(), navigator.clone());

        flow.submit_reset("user@test.com", "123456", &password("Abcdef1!"))
            .await;

        assert_eq!(flow.state(), &FlowState::Failure("Invalid OTP".to_string()));
        assert!(flow.state().can_submit());
        assert!(!flow.is_loading());
        assert!(navigator.visited().is_empty());

        // The OTP is not invalidated client-side; the same code goes out
        // again untouched.
        flow.submit_reset("user@test.com", "123456", &password("Abcdef1!"))
            .await;
        assert_eq!(gateway.calls().len(), 2);
        assert_eq!(gateway.calls()[1].1, "123456");
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn log_output_never_contains_the_submitted_credentials() {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let gateway = MockGateway::replying(Err(GatewayError::Server {
            message: "Invalid OTP".to_string(),
        }));
        let mut flow = ResetPasswordFlow::new(gateway, RecordingNavigator::default());

        flow.submit_reset("user@test.com", "998877", &password("Tr0pical!"))
            .await;

        let captured = logs.contents();
        assert!(!captured.is_empty());
        assert!(!captured.contains("998877"));
        assert!(!captured.contains("Tr0pical!"));
    }

    #[tokio::test]
    async fn transport_failure_surfaces_the_generic_fallback() {
        let gateway =
            MockGateway::replying(Err(GatewayError::Unexpected("timeout".to_string())));
        let mut flow = ResetPasswordFlow::new(gateway, RecordingNavigator::default());

        flow.submit_reset("user@test.com", "123456", &password("Abcdef1!"))
            .await;

        assert_eq!(
            flow.state(),
            &FlowState::Failure("Error resetting password.".to_string())
        );
    }
}

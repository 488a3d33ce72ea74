use std::sync::{Arc, Mutex};

use reclaim_core::{
    GatewayError, RecoveryGateway, RecoveryRequest, RecoveryVerification, VerificationLink,
};

/// In-memory `RecoveryGateway` with programmable responses and recorded
/// calls. Defaults to success on every endpoint.
#[derive(Debug, Clone)]
pub struct MockRecoveryGateway {
    send_otp_response: Result<String, GatewayError>,
    reset_password_response: Result<String, GatewayError>,
    verify_email_response: Result<(), GatewayError>,
    otp_requests: Arc<Mutex<Vec<String>>>,
    reset_requests: Arc<Mutex<Vec<(String, String)>>>,
    verified_links: Arc<Mutex<Vec<VerificationLink>>>,
}

impl Default for MockRecoveryGateway {
    fn default() -> Self {
        Self {
            send_otp_response: Ok("OTP sent".to_string()),
            reset_password_response: Ok("Password updated".to_string()),
            verify_email_response: Ok(()),
            otp_requests: Arc::new(Mutex::new(Vec::new())),
            reset_requests: Arc::new(Mutex::new(Vec::new())),
            verified_links: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockRecoveryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_send_otp(mut self, response: Result<String, GatewayError>) -> Self {
        self.send_otp_response = response;
        self
    }

    pub fn with_reset_password(mut self, response: Result<String, GatewayError>) -> Self {
        self.reset_password_response = response;
        self
    }

    pub fn with_verify_email(mut self, response: Result<(), GatewayError>) -> Self {
        self.verify_email_response = response;
        self
    }

    /// Emails the OTP endpoint was called with, in order.
    pub fn otp_requests(&self) -> Vec<String> {
        self.otp_requests.lock().unwrap().clone()
    }

    /// `(email, otp)` pairs the reset endpoint was called with. The
    /// password is deliberately not recorded.
    pub fn reset_requests(&self) -> Vec<(String, String)> {
        self.reset_requests.lock().unwrap().clone()
    }

    pub fn verified_links(&self) -> Vec<VerificationLink> {
        self.verified_links.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RecoveryGateway for MockRecoveryGateway {
    async fn send_otp(&self, request: &RecoveryRequest) -> Result<String, GatewayError> {
        self.otp_requests.lock().unwrap().push(request.email.clone());
        self.send_otp_response.clone()
    }

    async fn reset_password(
        &self,
        verification: &RecoveryVerification,
    ) -> Result<String, GatewayError> {
        self.reset_requests
            .lock()
            .unwrap()
            .push((verification.email.clone(), verification.otp.clone()));
        self.reset_password_response.clone()
    }

    async fn verify_email(&self, link: &VerificationLink) -> Result<(), GatewayError> {
        self.verified_links.lock().unwrap().push(link.clone());
        self.verify_email_response.clone()
    }
}

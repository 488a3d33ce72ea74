use reqwest::{Client, Response, Url};
use secrecy::ExposeSecret;

use reclaim_core::{
    GatewayError, RecoveryGateway, RecoveryRequest, RecoveryVerification, VerificationLink,
};

const SEND_OTP_PATH: &str = "/api/send-otp";
const RESET_PASSWORD_PATH: &str = "/api/verify-otp-and-update-password";

/// `RecoveryGateway` backed by the storefront REST API.
///
/// Cheap to clone; the underlying `reqwest::Client` is shared.
#[derive(Clone)]
pub struct StorefrontApiClient {
    http_client: Client,
    base_url: String,
}

impl StorefrontApiClient {
    pub fn new(base_url: String, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        let base =
            Url::parse(&self.base_url).map_err(|e| GatewayError::Unexpected(e.to_string()))?;
        base.join(path)
            .map_err(|e| GatewayError::Unexpected(e.to_string()))
    }

    /// Extract the server message from a `{ "message": ... }` body.
    ///
    /// Non-2xx responses carrying a message become `GatewayError::Server`
    /// so the flows can surface it verbatim; anything else is `Unexpected`.
    async fn message_from(&self, response: Response) -> Result<String, GatewayError> {
        let status = response.status();
        if status.is_success() {
            let body: MessageResponse = response
                .json()
                .await
                .map_err(|e| GatewayError::Unexpected(e.to_string()))?;
            Ok(body.message)
        } else {
            match response.json::<MessageResponse>().await {
                Ok(body) => Err(GatewayError::Server {
                    message: body.message,
                }),
                Err(_) => Err(GatewayError::Unexpected(format!("server returned {status}"))),
            }
        }
    }
}

#[async_trait::async_trait]
impl RecoveryGateway for StorefrontApiClient {
    #[tracing::instrument(name = "Requesting OTP issuance", skip_all)]
    async fn send_otp(&self, request: &RecoveryRequest) -> Result<String, GatewayError> {
        let url = self.endpoint(SEND_OTP_PATH)?;

        let response = self
            .http_client
            .post(url)
            .json(&SendOtpRequest {
                email: &request.email,
            })
            .send()
            .await
            .map_err(|e| GatewayError::Unexpected(e.to_string()))?;

        self.message_from(response).await
    }

    #[tracing::instrument(name = "Submitting password reset", skip_all)]
    async fn reset_password(
        &self,
        verification: &RecoveryVerification,
    ) -> Result<String, GatewayError> {
        let url = self.endpoint(RESET_PASSWORD_PATH)?;

        // The secret leaves `Secret` only here, at the wire boundary.
        let response = self
            .http_client
            .post(url)
            .json(&ResetPasswordRequest {
                email: &verification.email,
                otp: &verification.otp,
                new_password: verification.new_password.expose_secret(),
            })
            .send()
            .await
            .map_err(|e| GatewayError::Unexpected(e.to_string()))?;

        self.message_from(response).await
    }

    #[tracing::instrument(name = "Verifying email link", skip_all, fields(user_id = %link.user_id))]
    async fn verify_email(&self, link: &VerificationLink) -> Result<(), GatewayError> {
        let url = self.endpoint(&format!(
            "/api/user/{}/verify/{}",
            link.user_id, link.token
        ))?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| GatewayError::Unexpected(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            // The `{ "data": ... }` success body is not needed.
            return Ok(());
        }
        match response.json::<MessageResponse>().await {
            Ok(body) => Err(GatewayError::Server {
                message: body.message,
            }),
            Err(_) => Err(GatewayError::Unexpected(format!("server returned {status}"))),
        }
    }
}

#[derive(serde::Serialize, Debug)]
struct SendOtpRequest<'a> {
    email: &'a str,
}

#[derive(serde::Serialize)]
struct ResetPasswordRequest<'a> {
    email: &'a str,
    otp: &'a str,
    #[serde(rename = "newPassword")]
    new_password: &'a str,
}

#[derive(serde::Deserialize, Debug)]
struct MessageResponse {
    message: String,
}

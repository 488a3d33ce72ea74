pub mod flows;

pub use flows::{
    request_otp::RequestOtpFlow, reset_password::ResetPasswordFlow,
    verify_email::VerifyEmailFlow,
};

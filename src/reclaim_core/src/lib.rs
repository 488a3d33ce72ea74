pub mod domain;
pub mod flow;
pub mod ports;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    link::VerificationLink,
    recovery::{RecoveryRequest, RecoveryVerification},
    session::Session,
};

pub use flow::{FlowState, LinkStatus};

pub use ports::{
    gateway::{GatewayError, RecoveryGateway},
    navigator::{Navigator, Route},
};

pub use validation::{
    FieldErrors, validate_email, validate_otp, validate_password, validate_reset,
};

//! # Reclaim - Credential Recovery Client Library
//!
//! This is a facade crate that re-exports all public APIs from the recovery
//! client components. Use this crate to get access to the whole
//! credential-recovery and identity-verification core in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! reclaim = { path = "../reclaim" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `FlowState`, `FieldErrors`, `VerificationLink`, etc.
//! - **Port traits**: `RecoveryGateway`, `Navigator`
//! - **Flows**: `RequestOtpFlow`, `ResetPasswordFlow`, `VerifyEmailFlow`
//! - **Adapters**: `StorefrontApiClient`, `MockRecoveryGateway`, navigators
//! - **Service**: `RecoveryService` - the main entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use reclaim_core::*;
}

// Re-export most commonly used core types at the root level
pub use reclaim_core::{
    FieldErrors, FlowState, LinkStatus, RecoveryRequest, RecoveryVerification, Route, Session,
    VerificationLink,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use reclaim_core::ports::{
        gateway::{GatewayError, RecoveryGateway},
        navigator::Navigator,
    };
}

// Re-export port traits at root level
pub use reclaim_core::{GatewayError, Navigator, RecoveryGateway};

// ============================================================================
// Validation Engine
// ============================================================================

/// Pure validation predicates
pub mod validation {
    pub use reclaim_core::validation::*;
}

pub use reclaim_core::{validate_email, validate_otp, validate_password, validate_reset};

// ============================================================================
// Flows (Application Layer)
// ============================================================================

/// Application flows
pub mod flows {
    pub use reclaim_application::*;
}

// Re-export flows at root level
pub use reclaim_application::{RequestOtpFlow, ResetPasswordFlow, VerifyEmailFlow};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP gateway implementations
    pub mod http {
        pub use reclaim_adapters::http::*;
    }

    /// Navigation implementations
    pub mod navigation {
        pub use reclaim_adapters::navigation::*;
    }

    /// Configuration
    pub mod config {
        pub use reclaim_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use reclaim_adapters::{
    MockRecoveryGateway, NoopNavigator, RecordingNavigator, StorefrontApiClient,
    config::{ApiSettings, ClientSettings},
};

// ============================================================================
// Recovery Service (Main Entry Point)
// ============================================================================

/// Main recovery service
pub use reclaim_client::{RecoveryService, ServiceError, telemetry};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

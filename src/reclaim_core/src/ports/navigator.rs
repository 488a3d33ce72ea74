//! Client-visible route surface and the navigation port.

use crate::domain::link::VerificationLink;

/// Views the recovery core navigates between. `Login` is the terminal
/// redirect target for a successful reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    RequestOtp,
    ResetPassword,
    VerifyEmail(VerificationLink),
    AdminDashboard,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::RequestOtp => "/forgot-password".to_string(),
            Route::ResetPassword => "/reset-password".to_string(),
            Route::VerifyEmail(link) => {
                format!("/user/{}/verify/{}", link.user_id, link.token)
            }
            Route::AdminDashboard => "/admin/dashboard".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::RequestOtp | Route::ResetPassword | Route::AdminDashboard
        )
    }

    pub fn requires_admin(&self) -> bool {
        matches!(self, Route::AdminDashboard)
    }
}

/// Port for the host's navigation. Implementations must be cheap and
/// infallible; a navigation that cannot happen is the host's concern.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

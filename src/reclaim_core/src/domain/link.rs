//! The `(userId, token)` pair carried by an email-verification link.

/// Sourced from the inbound `/user/{id}/verify/{token}` route; immutable
/// for the lifetime of the handler that consumes it. The token is opaque
/// and never validated client-side.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VerificationLink {
    pub user_id: String,
    pub token: String,
}

impl VerificationLink {
    pub fn new(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            token: token.into(),
        }
    }

    /// Parse a link out of an inbound route path.
    ///
    /// Returns `None` when the path does not match the
    /// `/user/{id}/verify/{token}` shape or a segment is empty.
    pub fn from_path(path: &str) -> Option<Self> {
        let mut segments = path.trim_start_matches('/').split('/');
        match (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) {
            (Some("user"), Some(id), Some("verify"), Some(token), None)
                if !id.is_empty() && !token.is_empty() =>
            {
                Some(Self::new(id, token))
            }
            _ => None,
        }
    }
}

//! Per-flow state tags.
//!
//! Each flow instance owns exactly one `FlowState` at a time; rendering and
//! side effects switch on the tag. This replaces juggling separate
//! `loading`/`message`/`error` fields, which allowed impossible combinations
//! such as a loading spinner next to a success banner.

/// Lifecycle of a single submission flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowState {
    /// Nothing attempted yet.
    #[default]
    Idle,
    /// Synchronous field validation in progress; never skipped before a
    /// dispatch.
    Validating,
    /// A single network request is outstanding.
    Submitting,
    /// Terminal for this instance; carries the server-provided message.
    Success(String),
    /// Recoverable resting state; carries the surfaced message. A new
    /// submission may start from here.
    Failure(String),
}

impl FlowState {
    /// True only while a request is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, FlowState::Submitting)
    }

    /// Whether the trigger should be enabled. Concurrency is prevented at
    /// the call-site by disabling the trigger, not by internal guards.
    pub fn can_submit(&self) -> bool {
        matches!(self, FlowState::Idle | FlowState::Failure(_))
    }

    /// The user-visible message, if this state carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            FlowState::Success(msg) | FlowState::Failure(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Outcome of the email-verification link handler.
///
/// `Pending` is explicit: an in-flight verification is distinguishable from
/// a confirmed one instead of optimistically rendering success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStatus {
    #[default]
    Pending,
    Verified,
    Invalid,
}

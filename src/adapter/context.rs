//! Invocation-scoped deadline context.

use std::time::{Duration, SystemTime};

/// Cancellation/deadline signal for one invocation.
///
/// Carried into the synthetic request as an extension so the handler can
/// observe how much execution time the platform granted. The adapter
/// pipeline enforces nothing itself; honoring the deadline is the handler's
/// responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    /// Platform-assigned id for this invocation.
    pub request_id: String,
    /// Absolute deadline, if the platform provided one.
    pub deadline: Option<SystemTime>,
}

impl InvocationContext {
    pub fn new(request_id: impl Into<String>, deadline: Option<SystemTime>) -> Self {
        Self {
            request_id: request_id.into(),
            deadline,
        }
    }

    /// Time left before the platform cuts the invocation off, `None` when no
    /// deadline was supplied or it has already passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .and_then(|deadline| deadline.duration_since(SystemTime::now()).ok())
    }
}

impl From<lambda_runtime::Context> for InvocationContext {
    fn from(ctx: lambda_runtime::Context) -> Self {
        // The platform reports the deadline as epoch milliseconds; zero means
        // none was set.
        let deadline = (ctx.deadline > 0)
            .then(|| SystemTime::UNIX_EPOCH + Duration::from_millis(ctx.deadline));
        Self {
            request_id: ctx.request_id,
            deadline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_without_deadline() {
        let ctx = InvocationContext::new("req-1", None);
        assert_eq!(ctx.remaining(), None);
    }

    #[test]
    fn test_remaining_with_future_deadline() {
        let deadline = SystemTime::now() + Duration::from_secs(30);
        let ctx = InvocationContext::new("req-1", Some(deadline));
        let remaining = ctx.remaining().unwrap();
        assert!(remaining <= Duration::from_secs(30));
        assert!(remaining > Duration::from_secs(25));
    }

    #[test]
    fn test_remaining_with_elapsed_deadline() {
        let deadline = SystemTime::now() - Duration::from_secs(1);
        let ctx = InvocationContext::new("req-1", Some(deadline));
        assert_eq!(ctx.remaining(), None);
    }
}

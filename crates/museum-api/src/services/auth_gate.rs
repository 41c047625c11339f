//! Authorization gate shared by the gated review operations

use crate::context::RequestContext;
use async_trait::async_trait;
use museum_core::constants::UNAUTHENTICATED_MESSAGE;
use museum_core::AppError;

/// An operation invoked with arguments `A` on behalf of a request.
#[async_trait]
pub trait Operation<A: Send + 'static>: Send + Sync {
    type Output: Send;

    async fn call(&self, args: A, ctx: &RequestContext) -> Result<Self::Output, AppError>;
}

/// Runs the wrapped operation only for authenticated callers.
///
/// Anonymous calls fail with `Unauthorized` before the inner operation runs, so they
/// cause no lookup, mutation or event. The wrapper holds no state.
#[derive(Debug, Clone, Copy)]
pub struct RequireAuthenticated<O>(O);

#[async_trait]
impl<A, O> Operation<A> for RequireAuthenticated<O>
where
    A: Send + 'static,
    O: Operation<A>,
{
    type Output = O::Output;

    async fn call(&self, args: A, ctx: &RequestContext) -> Result<Self::Output, AppError> {
        if !ctx.authed() {
            return Err(AppError::Unauthorized(UNAUTHENTICATED_MESSAGE.to_string()));
        }
        self.0.call(args, ctx).await
    }
}

/// Wrap `operation` so it only runs for authenticated callers.
pub fn require_authenticated<O>(operation: O) -> RequireAuthenticated<O> {
    RequireAuthenticated(operation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::TestHarness;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Echo {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Operation<u32> for Echo {
        type Output = u32;

        async fn call(&self, args: u32, _ctx: &RequestContext) -> Result<u32, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(args * 2)
        }
    }

    #[tokio::test]
    async fn test_anonymous_call_never_reaches_inner_operation() {
        let harness = TestHarness::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let gated = require_authenticated(Echo {
            calls: calls.clone(),
        });

        let err = gated.call(21, &harness.anonymous_context()).await.unwrap_err();

        match err {
            AppError::Unauthorized(msg) => assert_eq!(msg, UNAUTHENTICATED_MESSAGE),
            other => panic!("expected Unauthorized, got {:?}", other),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_authenticated_call_is_forwarded_unchanged() {
        let harness = TestHarness::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let gated = require_authenticated(Echo {
            calls: calls.clone(),
        });

        let result = gated.call(21, &harness.authed_context()).await.unwrap();

        assert_eq!(result, 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

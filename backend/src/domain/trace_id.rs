//! Request-scoped trace identifier for correlating logs and error payloads.
//!
//! The identifier lives in Tokio task-local storage so domain code can read it
//! without threading it through every call. Task-locals are not inherited by
//! spawned tasks; wrap spawned work in [`TraceId::scope`] to keep correlation.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

/// Response header carrying the trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT: TraceId;
}

/// Per-request correlation identifier.
///
/// # Examples
/// ```
/// use school_locator::domain::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let id = TraceId::generate();
/// let seen = TraceId::scope(id, async { TraceId::current() }).await;
/// assert_eq!(seen, Some(id));
/// assert!(TraceId::current().is_none());
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The identifier currently in scope, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` in scope.
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn current_is_none_outside_a_scope() {
        assert!(TraceId::current().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn nested_scopes_shadow_the_outer_identifier() {
        let outer = TraceId::generate();
        let inner = TraceId::generate();

        let observed = TraceId::scope(outer, async move {
            let nested = TraceId::scope(inner, async { TraceId::current() }).await;
            (TraceId::current(), nested)
        })
        .await;

        assert_eq!(observed, (Some(outer), Some(inner)));
    }

    #[rstest]
    fn parses_uuid_strings() {
        let id: TraceId = "00000000-0000-0000-0000-000000000000"
            .parse()
            .expect("nil uuid parses");
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
        assert!("not-a-uuid".parse::<TraceId>().is_err());
    }
}

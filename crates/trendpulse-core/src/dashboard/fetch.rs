//! Request lifecycle shared by every fetching panel
//!
//! A panel owns a [`FetchState`] and, while mounted, a [`MountScope`].
//! [`spawn_fetch`] runs one read in the background and reports back through a
//! channel unless the scope was cancelled first.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::overview::{derive_platform_overview, PlatformRow};
use crate::api::DashboardSource;
use crate::error::{Error, Result};
use crate::models::{Draft, EngagementReport, ScheduledPost, Trend};

/// Coarse request lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Local render state of one fetching panel.
///
/// `loading` and `error` are independent: a refresh that starts while an
/// earlier error is shown displays both until it settles.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub loading: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            data: None,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    /// Request issued
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Request succeeded: replace data, clear error
    pub fn succeed(&mut self, data: T) {
        self.data = Some(data);
        self.error = None;
        self.loading = false;
    }

    /// Request failed: keep prior data
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.data.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }
}

impl<T> FetchState<Vec<T>> {
    /// Loaded items, empty until the first success
    pub fn items(&self) -> &[T] {
        self.data.as_deref().unwrap_or(&[])
    }
}

/// Identifies one mount of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

impl MountId {
    /// Allocate a process-unique id
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mount-{}", self.0)
    }
}

/// Lifetime of a mounted panel. Dropping it cancels outstanding fetches.
#[derive(Debug)]
pub struct MountScope {
    id: MountId,
    token: CancellationToken,
}

impl MountScope {
    pub fn new() -> Self {
        Self {
            id: MountId::next(),
            token: CancellationToken::new(),
        }
    }

    pub fn id(&self) -> MountId {
        self.id
    }

    /// Token fetch tasks watch for teardown
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Default for MountScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MountScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Something a panel can fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Trends,
    Drafts,
    Posts,
    Metrics,
    /// Platform status joined with the trend feed
    PlatformOverview,
}

impl Resource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trends => "trends",
            Self::Drafts => "drafts",
            Self::Posts => "posts",
            Self::Metrics => "metrics",
            Self::PlatformOverview => "platform_overview",
        }
    }

    /// Phrase used in user-facing messages
    pub fn label(self) -> &'static str {
        match self {
            Self::Trends => "trends",
            Self::Drafts => "content drafts",
            Self::Posts => "scheduled posts",
            Self::Metrics => "engagement metrics",
            Self::PlatformOverview => "platform status",
        }
    }

    /// Perform the read(s) behind this resource
    pub async fn load(self, source: &dyn DashboardSource) -> Result<Payload> {
        match self {
            Self::Trends => source.trends().await.map(Payload::Trends),
            Self::Drafts => source.drafts().await.map(Payload::Drafts),
            Self::Posts => source.posts().await.map(Payload::Posts),
            Self::Metrics => source.metrics().await.map(Payload::Metrics),
            Self::PlatformOverview => {
                let (status, trends) = tokio::try_join!(source.social_status(), source.trends())?;
                Ok(Payload::PlatformOverview(derive_platform_overview(
                    &status, &trends,
                )))
            }
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed body of a settled fetch
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Trends(Vec<Trend>),
    Drafts(Vec<Draft>),
    Posts(Vec<ScheduledPost>),
    Metrics(EngagementReport),
    PlatformOverview(Vec<PlatformRow>),
}

/// Result of one fetch, tagged with the mount that asked for it
#[derive(Debug)]
pub struct FetchOutcome {
    pub resource: Resource,
    pub mount: MountId,
    pub result: Result<Payload>,
}

/// Inline message shown for a failed fetch
pub fn failure_message(resource: Resource, error: &Error) -> String {
    format!("Failed to fetch {}: {error}", resource.label())
}

/// Fetch `resource` in the background and send the outcome on `tx`.
///
/// Nothing is sent if `scope` is cancelled before the request settles.
pub fn spawn_fetch<E>(
    source: Arc<dyn DashboardSource>,
    resource: Resource,
    scope: &MountScope,
    tx: mpsc::UnboundedSender<E>,
) -> tokio::task::JoinHandle<()>
where
    E: From<FetchOutcome> + Send + 'static,
{
    let mount = scope.id();
    let token = scope.token();

    tokio::spawn(async move {
        debug!(%resource, %mount, "fetch started");
        tokio::select! {
            () = token.cancelled() => {
                debug!(%resource, %mount, "fetch cancelled");
                metrics::counter!("trendpulse_fetch_total", "resource" => resource.as_str(), "outcome" => "cancelled")
                    .increment(1);
            }
            result = resource.load(source.as_ref()) => {
                if token.is_cancelled() {
                    return;
                }
                let outcome = if result.is_ok() { "ok" } else { "error" };
                metrics::counter!("trendpulse_fetch_total", "resource" => resource.as_str(), "outcome" => outcome)
                    .increment(1);
                if let Err(e) = &result {
                    warn!(%resource, %mount, error = %e, "fetch failed");
                }
                if tx.send(E::from(FetchOutcome { resource, mount, result })).is_err() {
                    debug!(%resource, %mount, "receiver gone, dropping outcome");
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_transitions() {
        let mut state: FetchState<Vec<u32>> = FetchState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.items().is_empty());

        state.begin();
        assert_eq!(state.phase(), Phase::Loading);

        state.succeed(vec![1, 2, 3]);
        assert_eq!(state.phase(), Phase::Success);
        assert_eq!(state.items(), &[1, 2, 3]);
    }

    #[test]
    fn failure_keeps_prior_data() {
        let mut state = FetchState::default();
        state.begin();
        state.succeed(vec!["a"]);

        state.begin();
        state.fail("Failed to fetch trends: boom");
        assert!(!state.loading);
        assert_eq!(state.items(), &["a"]);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch trends: boom"));
    }

    #[test]
    fn first_failure_leaves_data_empty() {
        let mut state: FetchState<Vec<u8>> = FetchState::default();
        state.begin();
        state.fail("nope");
        assert_eq!(state.data, None);
        assert_eq!(state.phase(), Phase::Error);
    }

    #[test]
    fn refresh_after_error_shows_loading_and_error() {
        let mut state: FetchState<Vec<u8>> = FetchState::default();
        state.fail("nope");
        state.begin();
        assert!(state.loading);
        assert!(state.error.is_some());

        state.succeed(vec![]);
        assert!(state.error.is_none());
    }

    #[test]
    fn dropping_scope_cancels_token() {
        let scope = MountScope::new();
        let token = scope.token();
        assert!(!token.is_cancelled());
        drop(scope);
        assert!(token.is_cancelled());
    }

    #[test]
    fn mount_ids_are_unique() {
        let a = MountScope::new();
        let b = MountScope::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn failure_message_names_resource() {
        let err = Error::Status {
            endpoint: "/api/posts".into(),
            status: 500,
        };
        assert_eq!(
            failure_message(Resource::Posts, &err),
            "Failed to fetch scheduled posts: /api/posts returned HTTP 500"
        );
    }
}

//! Fetch lifecycle tests: background fetches, cancellation on unmount and the
//! joined platform overview, driven through a stub `DashboardSource`.

use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use tokio::sync::{mpsc, Notify};

use trendpulse::api::DashboardSource;
use trendpulse::dashboard::{spawn_fetch, FetchOutcome, MountScope, Payload, Resource};
use trendpulse::models::{Draft, EngagementReport, Platform, PlatformStatus, ScheduledPost, Trend};
use trendpulse::tui::{ActiveTab, App, EventHandler};
use trendpulse::{Error, Result};

#[derive(Default)]
struct StubSource {
    trends: Vec<Trend>,
    status: PlatformStatus,
    fail_status: bool,
    /// When set, trend reads wait for a permit
    gate: Option<Arc<Notify>>,
}

#[async_trait]
impl DashboardSource for StubSource {
    async fn trends(&self) -> Result<Vec<Trend>> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        Ok(self.trends.clone())
    }

    async fn social_status(&self) -> Result<PlatformStatus> {
        if self.fail_status {
            return Err(Error::Status {
                endpoint: "/api/social/status".into(),
                status: 500,
            });
        }
        Ok(self.status.clone())
    }

    async fn drafts(&self) -> Result<Vec<Draft>> {
        Ok(Vec::new())
    }

    async fn posts(&self) -> Result<Vec<ScheduledPost>> {
        Ok(Vec::new())
    }

    async fn metrics(&self) -> Result<EngagementReport> {
        Ok(EngagementReport::default())
    }
}

fn sample_trends() -> Vec<Trend> {
    vec![
        Trend::new("#AIInHealthcare", Platform::LinkedIn, 45_600),
        Trend::new("#RemoteWork", Platform::LinkedIn, 8_900),
        Trend::new("#RustLang", Platform::Reddit, 12_500),
    ]
}

#[tokio::test]
async fn settled_fetch_reports_its_mount() {
    let source: Arc<dyn DashboardSource> = Arc::new(StubSource {
        trends: sample_trends(),
        ..StubSource::default()
    });
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchOutcome>();
    let scope = MountScope::new();

    spawn_fetch(source, Resource::Trends, &scope, tx).await.unwrap();

    let outcome = rx.recv().await.expect("outcome");
    assert_eq!(outcome.mount, scope.id());
    assert_eq!(outcome.resource, Resource::Trends);
    assert!(matches!(outcome.result, Ok(Payload::Trends(ref t)) if t.len() == 3));
}

#[tokio::test]
async fn unmounted_fetch_delivers_nothing() {
    let gate = Arc::new(Notify::new());
    let source: Arc<dyn DashboardSource> = Arc::new(StubSource {
        trends: sample_trends(),
        gate: Some(gate.clone()),
        ..StubSource::default()
    });
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchOutcome>();

    let scope = MountScope::new();
    let handle = spawn_fetch(source, Resource::Trends, &scope, tx);
    drop(scope);
    gate.notify_one();

    handle.await.unwrap();
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn overview_joins_status_and_trends() {
    let mut status = PlatformStatus::default();
    status.insert(Platform::LinkedIn, true);
    let source = StubSource {
        trends: sample_trends(),
        status,
        ..StubSource::default()
    };

    let Payload::PlatformOverview(rows) = Resource::PlatformOverview.load(&source).await.unwrap() else {
        panic!("expected overview rows");
    };

    assert_eq!(rows.len(), Platform::ALL.len());
    let linkedin = rows.iter().find(|r| r.platform == Platform::LinkedIn).unwrap();
    assert_eq!((linkedin.trend_count, linkedin.label()), (2, "Active"));
    let reddit = rows.iter().find(|r| r.platform == Platform::Reddit).unwrap();
    assert_eq!((reddit.trend_count, reddit.label()), (1, "Not Connected"));
}

#[tokio::test]
async fn overview_fails_when_either_read_fails() {
    let source = StubSource {
        trends: sample_trends(),
        fail_status: true,
        ..StubSource::default()
    };

    let err = Resource::PlatformOverview.load(&source).await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 500, .. }));
}

#[tokio::test]
async fn attached_app_fills_overview_and_active_tab() {
    let mut status = PlatformStatus::default();
    status.insert(Platform::Reddit, true);
    let source = Arc::new(StubSource {
        trends: sample_trends(),
        status,
        ..StubSource::default()
    });

    let mut events = EventHandler::new(std::time::Duration::from_secs(60));
    let mut app = App::default();
    app.attach(source, events.sender());
    assert!(app.overview.state.fetch.loading);
    assert!(app.trends.state.fetch.loading);

    for _ in 0..2 {
        let event = events.next().await.expect("fetch event");
        app.handle_event(event);
    }

    assert!(!app.overview.state.fetch.loading);
    assert!(!app.trends.state.fetch.loading);
    assert_eq!(app.trends.state.items().len(), 3);
    let reddit = app
        .overview
        .state
        .items()
        .iter()
        .find(|r| r.platform == Platform::Reddit)
        .unwrap();
    assert!(reddit.connected);
}

#[tokio::test]
async fn overview_failure_shows_single_error() {
    let source = Arc::new(StubSource {
        trends: sample_trends(),
        fail_status: true,
        ..StubSource::default()
    });

    let mut events = EventHandler::new(std::time::Duration::from_secs(60));
    let mut app = App::default();
    app.attach(source, events.sender());
    app.select_tab(ActiveTab::Analytics);

    // Overview and analytics settle; the unmounted trends fetch never reports
    for _ in 0..2 {
        let event = events.next().await.expect("fetch event");
        app.handle_event(event);
    }

    assert_eq!(app.overview.state.items().len(), 0);
    assert!(app
        .overview
        .state
        .fetch
        .error
        .as_deref()
        .is_some_and(|e| e.starts_with("Failed to fetch platform status")));
    assert!(app.engagement.state.fetch.data.is_some());
}

//! Dashboard panels
//!
//! Each fetching panel wraps a [`PanelState`], which owns the fetch state,
//! the live [`MountScope`] and the row selection.

pub mod agents;
pub mod drafts;
pub mod engagement;
pub mod overview;
pub mod schedule;
pub mod trends;

use ratatui::widgets::TableState;
use tracing::{debug, warn};

use crate::dashboard::fetch::failure_message;
use crate::dashboard::{FetchState, MountId, MountScope, Payload, Resource};
use crate::error::Result;

pub use drafts::DraftsPanel;
pub use engagement::EngagementPanel;
pub use overview::OverviewPanel;
pub use schedule::SchedulePanel;
pub use trends::TrendsPanel;

/// A panel backed by one [`Resource`]
pub trait FetchPanel {
    type Data;

    const RESOURCE: Resource;

    fn state_mut(&mut self) -> &mut PanelState<Self::Data>;

    /// Pull this panel's data out of a payload
    fn extract(payload: Payload) -> Option<Self::Data>;

    /// Apply a settled fetch; false if it was stale
    fn apply(&mut self, mount: MountId, result: Result<Payload>) -> bool {
        self.state_mut()
            .settle(Self::RESOURCE, mount, result, Self::extract)
    }
}

/// Mount-scoped state of one fetching panel
#[derive(Debug)]
pub struct PanelState<T> {
    pub fetch: FetchState<T>,
    pub selection: TableState,
    scope: Option<MountScope>,
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        Self {
            fetch: FetchState::default(),
            selection: TableState::default(),
            scope: None,
        }
    }
}

impl<T> PanelState<T> {
    /// Fresh mount: discard everything from a previous mount and start
    /// loading. The previous scope, if any, is cancelled.
    pub fn mount(&mut self) -> &MountScope {
        self.fetch = FetchState::default();
        self.selection = TableState::default();
        self.fetch.begin();
        self.scope.insert(MountScope::new())
    }

    /// Re-fetch within the current mount. Data and error stay visible until
    /// the new request settles.
    pub fn refresh(&mut self) -> &MountScope {
        self.fetch.begin();
        self.scope.insert(MountScope::new())
    }

    /// Cancel outstanding fetches
    pub fn unmount(&mut self) {
        self.scope = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.scope.is_some()
    }

    pub fn scope(&self) -> Option<&MountScope> {
        self.scope.as_ref()
    }

    /// Whether an outcome tagged with `mount` belongs to the live scope
    pub fn accepts(&self, mount: MountId) -> bool {
        self.scope.as_ref().is_some_and(|s| s.id() == mount)
    }

    /// Apply a settled fetch. Returns false when the outcome was stale.
    pub fn settle(
        &mut self,
        resource: Resource,
        mount: MountId,
        result: Result<Payload>,
        extract: fn(Payload) -> Option<T>,
    ) -> bool {
        if !self.accepts(mount) {
            debug!(%resource, %mount, "ignoring outcome from stale mount");
            return false;
        }
        match result {
            Ok(payload) => match extract(payload) {
                Some(data) => self.fetch.succeed(data),
                None => {
                    warn!(%resource, "payload does not match resource");
                    self.fetch
                        .fail(format!("Failed to fetch {}: unexpected response", resource.label()));
                    return false;
                }
            },
            Err(e) => self.fetch.fail(failure_message(resource, &e)),
        }
        true
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self.selection.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.selection.select(Some(i));
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self.selection.selected().unwrap_or(0);
        self.selection.select(Some(i.saturating_sub(1)));
    }
}

impl<T> PanelState<Vec<T>> {
    pub fn items(&self) -> &[T] {
        self.fetch.items()
    }

    /// Currently highlighted item
    pub fn selected(&self) -> Option<&T> {
        self.selection
            .selected()
            .and_then(|i| self.fetch.items().get(i))
    }
}

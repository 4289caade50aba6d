//! Main TUI application state and logic

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::event::{is_quit, Event, EventHandler};
use super::panels::{DraftsPanel, EngagementPanel, FetchPanel, OverviewPanel, SchedulePanel, TrendsPanel};
use crate::api::DashboardSource;
use crate::dashboard::agents::default_roster;
use crate::dashboard::{dispatch, spawn_fetch, Command, FetchOutcome, Resource};
use crate::error::{Error, Result};
use crate::models::Agent;

/// Active tab in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Trends,
    Content,
    Schedule,
    Analytics,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 4] = [
        ActiveTab::Trends,
        ActiveTab::Content,
        ActiveTab::Schedule,
        ActiveTab::Analytics,
    ];

    pub fn next(self) -> Self {
        match self {
            Self::Trends => Self::Content,
            Self::Content => Self::Schedule,
            Self::Schedule => Self::Analytics,
            Self::Analytics => Self::Trends,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Trends => Self::Analytics,
            Self::Content => Self::Trends,
            Self::Schedule => Self::Content,
            Self::Analytics => Self::Schedule,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Trends => 0,
            Self::Content => 1,
            Self::Schedule => 2,
            Self::Analytics => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Trends => "Trending Topics",
            Self::Content => "Content Drafts",
            Self::Schedule => "Post Schedule",
            Self::Analytics => "Analytics",
        }
    }
}

/// Local pipeline switch shown in the header. Has no backend effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemStatus {
    #[default]
    Active,
    Paused,
}

impl SystemStatus {
    pub fn toggle(self) -> Self {
        match self {
            Self::Active => Self::Paused,
            Self::Paused => Self::Active,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
        }
    }

    /// Label of the button that flips the status
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Active => "Pause System",
            Self::Paused => "Start System",
        }
    }
}

/// Where panel fetches go and report back to
struct Fetcher {
    source: Arc<dyn DashboardSource>,
    tx: mpsc::UnboundedSender<Event>,
}

/// Mount or refresh `panel` and, when attached to a source, fetch its data
fn start_fetch<P: FetchPanel>(panel: &mut P, fetcher: Option<&Fetcher>, refresh: bool) {
    let state = panel.state_mut();
    let scope = if refresh { state.refresh() } else { state.mount() };
    if let Some(fetcher) = fetcher {
        spawn_fetch(fetcher.source.clone(), P::RESOURCE, scope, fetcher.tx.clone());
    }
}

/// Main TUI application state
pub struct App {
    /// Whether the app should quit
    pub should_quit: bool,
    /// Active tab
    pub active_tab: ActiveTab,
    /// Header switch
    pub system: SystemStatus,
    /// Clock shown in the header, advanced on every tick
    pub now: DateTime<Local>,
    /// Static agent descriptors
    pub agents: Vec<Agent>,
    pub overview: OverviewPanel,
    pub trends: TrendsPanel,
    pub drafts: DraftsPanel,
    pub schedule: SchedulePanel,
    pub engagement: EngagementPanel,
    /// Show help overlay
    pub show_help: bool,
    /// Status message
    pub status_message: Option<(String, Instant)>,
    tick_rate: Duration,
    fetcher: Option<Fetcher>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl App {
    /// Create a new TUI app
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            should_quit: false,
            active_tab: ActiveTab::default(),
            system: SystemStatus::default(),
            now: Local::now(),
            agents: default_roster(),
            overview: OverviewPanel::default(),
            trends: TrendsPanel::default(),
            drafts: DraftsPanel::default(),
            schedule: SchedulePanel::default(),
            engagement: EngagementPanel::default(),
            show_help: false,
            status_message: None,
            tick_rate,
            fetcher: None,
        }
    }

    /// Mount the overview strip and the active tab. With a source attached
    /// each mount fetches its data; without one the panels stay loading.
    pub fn attach(&mut self, source: Arc<dyn DashboardSource>, tx: mpsc::UnboundedSender<Event>) {
        self.fetcher = Some(Fetcher { source, tx });
        start_fetch(&mut self.overview, self.fetcher.as_ref(), false);
        self.mount_tab(self.active_tab);
    }

    /// Unmount everything, cancelling outstanding fetches
    pub fn detach(&mut self) {
        self.overview.state.unmount();
        for tab in ActiveTab::ALL {
            self.unmount_tab(tab);
        }
        self.fetcher = None;
    }

    fn mount_tab(&mut self, tab: ActiveTab) {
        let fetcher = self.fetcher.as_ref();
        match tab {
            ActiveTab::Trends => start_fetch(&mut self.trends, fetcher, false),
            ActiveTab::Content => start_fetch(&mut self.drafts, fetcher, false),
            ActiveTab::Schedule => start_fetch(&mut self.schedule, fetcher, false),
            ActiveTab::Analytics => start_fetch(&mut self.engagement, fetcher, false),
        }
    }

    fn unmount_tab(&mut self, tab: ActiveTab) {
        match tab {
            ActiveTab::Trends => self.trends.state.unmount(),
            ActiveTab::Content => self.drafts.state.unmount(),
            ActiveTab::Schedule => self.schedule.state.unmount(),
            ActiveTab::Analytics => self.engagement.state.unmount(),
        }
    }

    /// Switch tabs. The old tab's panel is unmounted and the new one is
    /// mounted with fresh state.
    pub fn select_tab(&mut self, tab: ActiveTab) {
        if tab == self.active_tab {
            return;
        }
        debug!(from = ?self.active_tab, to = ?tab, "switching tab");
        self.unmount_tab(self.active_tab);
        self.active_tab = tab;
        self.mount_tab(tab);
    }

    /// Manual trend refresh
    pub fn refresh_trends(&mut self) {
        start_fetch(&mut self.trends, self.fetcher.as_ref(), true);
        self.set_status("Refreshing trends...".to_string());
    }

    /// Apply a settled fetch to the panel that asked for it.
    /// Returns false when the outcome belonged to a stale mount.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) -> bool {
        let FetchOutcome {
            resource,
            mount,
            result,
        } = outcome;
        match resource {
            Resource::Trends => self.trends.apply(mount, result),
            Resource::Drafts => self.drafts.apply(mount, result),
            Resource::Posts => self.schedule.apply(mount, result),
            Resource::Metrics => self.engagement.apply(mount, result),
            Resource::PlatformOverview => self.overview.apply(mount, result),
        }
    }

    /// Advance the clock
    pub fn on_tick(&mut self) {
        self.now = Local::now();
    }

    /// Handle key events
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if is_quit(KeyEvent::new(code, modifiers)) {
            self.should_quit = true;
            return;
        }

        match (code, modifiers) {
            (KeyCode::Char('?'), _) => {
                self.show_help = !self.show_help;
            }
            (KeyCode::Esc, _) => {
                self.show_help = false;
            }
            (KeyCode::Tab, KeyModifiers::NONE) => {
                self.select_tab(self.active_tab.next());
            }
            (KeyCode::BackTab, _) => {
                self.select_tab(self.active_tab.prev());
            }
            (KeyCode::Char('1'), KeyModifiers::NONE) => self.select_tab(ActiveTab::Trends),
            (KeyCode::Char('2'), KeyModifiers::NONE) => self.select_tab(ActiveTab::Content),
            (KeyCode::Char('3'), KeyModifiers::NONE) => self.select_tab(ActiveTab::Schedule),
            (KeyCode::Char('4'), KeyModifiers::NONE) => self.select_tab(ActiveTab::Analytics),
            (KeyCode::Char('p'), KeyModifiers::NONE) => {
                self.system = self.system.toggle();
                info!(status = self.system.label(), "system status toggled");
                self.set_status(format!("System {}", self.system.label().to_lowercase()));
            }
            (KeyCode::Up | KeyCode::Char('k'), _) => self.move_selection(false),
            (KeyCode::Down | KeyCode::Char('j'), _) => self.move_selection(true),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.handle_tab_key(c);
            }
            _ => {}
        }
    }

    fn move_selection(&mut self, down: bool) {
        match self.active_tab {
            ActiveTab::Trends => {
                let len = self.trends.state.items().len();
                step(&mut self.trends.state, len, down);
            }
            ActiveTab::Content => {
                let len = self.drafts.state.items().len();
                step(&mut self.drafts.state, len, down);
            }
            ActiveTab::Schedule => {
                let len = self.schedule.state.items().len();
                step(&mut self.schedule.state, len, down);
            }
            ActiveTab::Analytics => {
                if down {
                    self.engagement.select_next();
                } else {
                    self.engagement.select_prev();
                }
            }
        }
    }

    fn handle_tab_key(&mut self, key: char) {
        let command = match self.active_tab {
            ActiveTab::Trends => match key {
                'r' => {
                    self.refresh_trends();
                    return;
                }
                'c' => self.trends.state.selected().map(|trend| Command::CreateContent {
                    topic: trend.topic.clone(),
                }),
                _ => None,
            },
            ActiveTab::Content => self.drafts.command_for(key),
            ActiveTab::Schedule => self.schedule.command_for(key),
            ActiveTab::Analytics => None,
        };

        if let Some(command) = command {
            self.run_command(&command);
        }
    }

    /// Run an action and surface its notice in the status bar
    pub fn run_command(&mut self, command: &Command) {
        let notice = dispatch(command);
        self.set_status(notice);
    }

    /// Set a status message that expires after 3 seconds
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get current status message if not expired
    pub fn get_status(&self) -> Option<&str> {
        self.status_message.as_ref().and_then(|(msg, time)| {
            if time.elapsed() < Duration::from_secs(3) {
                Some(msg.as_str())
            } else {
                None
            }
        })
    }

    /// Run the TUI application against `source` until the user quits
    pub async fn run(&mut self, source: Arc<dyn DashboardSource>) -> Result<()> {
        use crossterm::{
            execute,
            terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        };
        use ratatui::{backend::CrosstermBackend, Terminal};
        use std::io;

        // Setup terminal
        enable_raw_mode().map_err(Error::tui)?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(Error::tui)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(Error::tui)?;

        let mut events = EventHandler::new(self.tick_rate);
        events.start();
        self.attach(source, events.sender());

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        self.detach();

        // Restore terminal
        disable_raw_mode().map_err(Error::tui)?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(Error::tui)?;
        terminal.show_cursor().map_err(Error::tui)?;

        result
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
        events: &mut EventHandler,
    ) -> Result<()> {
        while !self.should_quit {
            terminal
                .draw(|frame| super::ui::draw(frame, self))
                .map_err(Error::tui)?;

            let Some(event) = events.next().await else {
                break;
            };
            self.handle_event(event);
        }
        Ok(())
    }

    /// Route one event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key.code, key.modifiers),
            Event::Tick => self.on_tick(),
            Event::Fetched(outcome) => {
                self.apply_fetch(outcome);
            }
            // Terminal handles resize automatically
            Event::Resize(_, _) => {}
            Event::Error(e) => {
                warn!(error = %e, "terminal input error");
                self.set_status(format!("Input error: {e}"));
            }
        }
    }
}

fn step<T>(state: &mut super::panels::PanelState<Vec<T>>, len: usize, down: bool) {
    if down {
        state.select_next(len);
    } else {
        state.select_prev(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{Payload, PlatformRow};
    use crate::models::{Platform, PostStatus, ScheduledPost, Trend};
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
    }

    fn mounted() -> App {
        let mut app = App::default();
        let _ = app.overview.state.mount();
        app.mount_tab(app.active_tab);
        app
    }

    fn trends_outcome(app: &App, trends: Vec<Trend>) -> FetchOutcome {
        FetchOutcome {
            resource: Resource::Trends,
            mount: app.trends.state.scope().unwrap().id(),
            result: Ok(Payload::Trends(trends)),
        }
    }

    #[test]
    fn tabs_cycle() {
        assert_eq!(ActiveTab::Trends.next(), ActiveTab::Content);
        assert_eq!(ActiveTab::Trends.prev(), ActiveTab::Analytics);
        for tab in ActiveTab::ALL {
            assert_eq!(tab.next().prev(), tab);
            assert_eq!(ActiveTab::ALL[tab.index()], tab);
        }
    }

    #[test]
    fn pause_toggle_is_local() {
        let mut app = mounted();
        assert_eq!(app.system.action_label(), "Pause System");
        press(&mut app, 'p');
        assert_eq!(app.system, SystemStatus::Paused);
        assert_eq!(app.system.action_label(), "Start System");
        press(&mut app, 'p');
        assert_eq!(app.system, SystemStatus::Active);
    }

    #[test]
    fn switching_tabs_unmounts_and_remounts() {
        let mut app = mounted();
        let token = app.trends.state.scope().unwrap().token();
        let outcome = trends_outcome(&app, vec![Trend::new("#RustLang", Platform::Reddit, 1)]);

        press(&mut app, '2');
        assert_eq!(app.active_tab, ActiveTab::Content);
        assert!(token.is_cancelled());
        assert!(!app.trends.state.is_mounted());
        assert!(app.drafts.state.is_mounted());
        assert!(app.drafts.state.fetch.loading);

        // Late result for the unmounted panel is a no-op
        assert!(!app.apply_fetch(outcome));
        assert!(app.trends.state.fetch.data.is_none());
    }

    #[test]
    fn returning_to_a_tab_starts_fresh() {
        let mut app = mounted();
        let outcome = trends_outcome(&app, vec![Trend::new("#RustLang", Platform::Reddit, 1)]);
        assert!(app.apply_fetch(outcome));
        assert_eq!(app.trends.state.items().len(), 1);

        press(&mut app, '4');
        press(&mut app, '1');
        assert!(app.trends.state.fetch.loading);
        assert!(app.trends.state.items().is_empty());
    }

    #[test]
    fn refresh_keeps_rows_until_settled() {
        let mut app = mounted();
        let outcome = trends_outcome(&app, vec![Trend::new("#RustLang", Platform::Reddit, 1)]);
        app.apply_fetch(outcome);

        press(&mut app, 'r');
        assert!(app.trends.state.fetch.loading);
        assert_eq!(app.trends.state.items().len(), 1);
        assert_eq!(app.get_status(), Some("Refreshing trends..."));
    }

    #[test]
    fn refresh_is_only_offered_on_trends() {
        let mut app = mounted();
        press(&mut app, '3');
        let id = app.schedule.state.scope().unwrap().id();
        press(&mut app, 'r');
        assert_eq!(app.schedule.state.scope().unwrap().id(), id);
    }

    #[test]
    fn overview_outcome_updates_strip() {
        let mut app = mounted();
        let rows = vec![PlatformRow {
            platform: Platform::LinkedIn,
            trend_count: 2,
            connected: true,
        }];
        let outcome = FetchOutcome {
            resource: Resource::PlatformOverview,
            mount: app.overview.state.scope().unwrap().id(),
            result: Ok(Payload::PlatformOverview(rows.clone())),
        };
        assert!(app.apply_fetch(outcome));
        assert_eq!(app.overview.state.items(), rows.as_slice());
    }

    #[test]
    fn actions_show_notice_without_side_effects() {
        let mut app = mounted();
        press(&mut app, '3');
        let mount = app.schedule.state.scope().unwrap().id();
        app.apply_fetch(FetchOutcome {
            resource: Resource::Posts,
            mount,
            result: Ok(Payload::Posts(vec![ScheduledPost::new(
                5,
                "#RustLang",
                Platform::Twitter,
                PostStatus::Pending,
            )])),
        });

        press(&mut app, 'j');
        press(&mut app, 'd');
        assert_eq!(app.get_status(), Some("Delete post 5: not available yet"));
        assert_eq!(app.schedule.state.items().len(), 1);
    }

    #[test]
    fn quit_keys_stop_the_app() {
        let mut app = mounted();
        press(&mut app, 'q');
        assert!(app.should_quit);

        let mut app = mounted();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn tick_advances_clock() {
        let mut app = App::default();
        let before = app.now;
        app.handle_event(Event::Tick);
        assert!(app.now >= before);
    }

    #[test]
    fn detach_cancels_everything() {
        let mut app = mounted();
        let overview = app.overview.state.scope().unwrap().token();
        let trends = app.trends.state.scope().unwrap().token();
        app.detach();
        assert!(overview.is_cancelled());
        assert!(trends.is_cancelled());
    }
}

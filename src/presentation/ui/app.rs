//! Main application orchestrator.

use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::dto::NewRecordRequest;
use crate::application::services::{InventoryStore, NotificationManager, SortOrder, ThemeService};
use crate::domain::entities::RecordId;
use crate::domain::keybinding::KeyMap;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{InventoryScreen, InventoryScreenState, ScreenKeyResult};

/// Redraw cadence so day counts roll over at midnight and notices expire.
const TICK_RATE: Duration = Duration::from_secs(1);

/// Startup options resolved from configuration.
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Accent color name or hex code.
    pub accent_color: String,
    /// Sort order of the table at startup.
    pub default_sort: SortOrder,
    /// How long a status notice stays visible.
    pub notification_duration: Duration,
    /// Key bindings with user overrides applied.
    pub keymap: KeyMap,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            accent_color: "Green".to_string(),
            default_sort: SortOrder::None,
            notification_duration: Duration::from_secs(5),
            keymap: KeyMap::default(),
        }
    }
}

pub struct App {
    store: InventoryStore,
    theme_service: ThemeService,
    base_theme: Theme,
    screen: InventoryScreenState,
    notifications: NotificationManager,
    exiting: bool,
}

impl App {
    #[must_use]
    pub fn new(store: InventoryStore, theme_service: ThemeService, options: AppOptions) -> Self {
        let theme = Theme::new(theme_service.mode(), &options.accent_color);
        let screen = InventoryScreenState::new(options.keymap, theme, options.default_sort);

        let mut app = Self {
            store,
            theme_service,
            base_theme: theme,
            screen,
            notifications: NotificationManager::new(options.notification_duration),
            exiting: false,
        };
        app.refresh(today());
        app
    }

    /// Shows a notice in the status line before the first frame.
    pub fn warn_on_start(&mut self, message: impl Into<String>) {
        self.notifications.warn(message);
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns error if the terminal cannot be drawn.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(
            count = self.store.len(),
            mode = %self.theme_service.mode(),
            "Inventory screen ready"
        );

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick = interval(TICK_RATE);

        self.draw(terminal)?;

        while !self.exiting {
            tokio::select! {
                _ = tick.tick() => {
                    self.draw(terminal)?;
                }

                maybe_event = terminal_events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(&event).await == EventResult::Exit {
                                self.exiting = true;
                            } else if EventHandler::needs_redraw(&event) {
                                self.draw(terminal)?;
                            }
                        }
                        Some(Err(e)) => {
                            warn!(error = %e, "Terminal event error");
                        }
                        None => {
                            debug!("Terminal event stream closed");
                            self.exiting = true;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.refresh(today());
        self.notifications.tick();
        terminal.draw(|frame| self.render(frame))?;
        Ok(())
    }

    fn refresh(&mut self, today: NaiveDate) {
        self.screen.refresh(self.store.records(), today);
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_stateful_widget(
            InventoryScreen::new(self.notifications.current_notification()),
            frame.area(),
            &mut self.screen,
        );
    }

    async fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        match EventHandler::key_press(event) {
            Some(key) => self.handle_key(key).await,
            None => EventResult::Continue,
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_force_quit(&key) {
            return EventResult::Exit;
        }

        match self.screen.handle_key(key) {
            ScreenKeyResult::Quit => return EventResult::Exit,
            ScreenKeyResult::ToggleTheme => self.toggle_theme().await,
            ScreenKeyResult::AddRecord(request) => self.add_record(&request).await,
            ScreenKeyResult::DeleteRecord(id) => self.delete_record(id).await,
            ScreenKeyResult::Consumed | ScreenKeyResult::Ignored => {}
        }

        self.refresh(today());
        EventResult::Continue
    }

    async fn toggle_theme(&mut self) {
        let result = self.theme_service.toggle().await;
        self.screen
            .set_theme(self.base_theme.with_mode(self.theme_service.mode()));
        debug!(mode = %self.theme_service.mode(), "Theme applied");

        if let Err(e) = result {
            self.notifications.error(format!("Could not save theme: {e}"));
        }
    }

    async fn add_record(&mut self, request: &NewRecordRequest) {
        match self.store.add(request).await {
            Ok(record) => {
                self.screen.clear_form();
                self.notifications.success(format!("Added {}", record.name()));
            }
            Err(e) if e.is_validation() => {
                self.notifications.warn(e.user_message());
            }
            Err(e) => {
                self.screen.clear_form();
                self.notifications.error(e.user_message());
            }
        }
    }

    async fn delete_record(&mut self, id: RecordId) {
        let name = self.store.get(id).map(|r| r.name().to_string());

        match self.store.delete(id).await {
            Ok(true) => {
                if let Some(name) = name {
                    self.notifications.info(format!("Deleted {name}"));
                }
            }
            Ok(false) => {}
            Err(e) => self.notifications.error(e.user_message()),
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

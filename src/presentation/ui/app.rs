//! Main application orchestrator.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, error, info};

use crate::application::DemoSession;
use crate::domain::DemoAction;
use crate::domain::keybinding::Action;
use crate::infrastructure::AppConfig;
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{DemoScreen, DemoScreenState, SplashScreen};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

enum CurrentScreen {
    Splash(Box<SplashScreen>),
    Demo,
}

pub struct App {
    screen: CurrentScreen,
    session: DemoSession,
    view: DemoScreenState,
    registry: CommandRegistry,
    theme: Theme,
    action_rx: mpsc::UnboundedReceiver<DemoAction>,
    exiting: bool,
}

impl App {
    /// Builds the app from the merged configuration.
    ///
    /// Reveal timers are spawned lazily, so this may be called outside a
    /// runtime, but [`App::run`] and key handling need one.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let theme = Theme::new(&config.theme.accent_color);
        let animate = config.ui.enable_animations;

        let screen = if config.ui.show_splash && animate {
            let mut splash = SplashScreen::new(theme);
            splash.set_data_ready();
            CurrentScreen::Splash(Box::new(splash))
        } else {
            CurrentScreen::Demo
        };

        Self {
            screen,
            session: DemoSession::new(action_tx),
            view: DemoScreenState::new(animate),
            registry: CommandRegistry::with_overrides(&config.keybindings),
            theme,
            action_rx,
            exiting: false,
        }
    }

    /// # Errors
    /// Returns error if drawing to or reading from the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!("Demo started");
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    if self.tick(ANIMATION_TICK_RATE) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                event = terminal_events.next() => match event {
                    Some(Ok(event)) => {
                        if self.handle_terminal_event(&event) == EventResult::Exit {
                            self.exiting = true;
                        }
                        terminal.draw(|frame| self.render(frame))?;
                    }
                    Some(Err(e)) => {
                        error!(error = %e, "Terminal event stream failed");
                        return Err(e.into());
                    }
                    None => self.exiting = true,
                },
            }
        }

        info!(
            resolved = self.session.state().panels().resolved_count(),
            "Application exiting normally"
        );
        Ok(())
    }

    /// Advances animations; returns whether a redraw is needed.
    fn tick(&mut self, duration: Duration) -> bool {
        match &mut self.screen {
            CurrentScreen::Splash(splash) => {
                splash.tick(duration);
                if splash.is_complete() {
                    debug!("Splash finished");
                    self.screen = CurrentScreen::Demo;
                }
                true
            }
            CurrentScreen::Demo => {
                self.view.tick(duration);
                self.session.state().panels().pending_count() > 0
            }
        }
    }

    fn handle_action(&mut self, action: DemoAction) {
        self.session.dispatch(action);
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(*key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !EventHandler::is_actionable(&key) {
            return EventResult::Continue;
        }
        if EventHandler::is_force_quit(&key) {
            return EventResult::Exit;
        }

        if let CurrentScreen::Splash(splash) = &mut self.screen {
            splash.skip();
            self.screen = CurrentScreen::Demo;
            return EventResult::Consumed;
        }

        if self.view.show_help {
            self.view.show_help = false;
            return EventResult::Consumed;
        }

        let Some(action) = self.registry.find_action(&key) else {
            return EventResult::Continue;
        };
        debug!(?action, "Key action");

        match action {
            Action::Quit => return EventResult::Exit,
            Action::ToggleHelp => self.view.toggle_help(),
            Action::LoadCatalog | Action::LoadCart | Action::LoadProfile => {
                if let Some(panel) = action.panel() {
                    self.session.activate(panel);
                }
            }
            Action::Reset => self.session.reset(),
            Action::ToggleCode => self.session.toggle_code(),
        }
        EventResult::Consumed
    }

    fn render(&mut self, frame: &mut Frame) {
        match &mut self.screen {
            CurrentScreen::Splash(splash) => {
                frame.render_widget(&mut **splash, frame.area());
            }
            CurrentScreen::Demo => {
                frame.render_stateful_widget(
                    DemoScreen::new(self.session.state(), &self.registry, &self.theme),
                    frame.area(),
                    &mut self.view,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PanelId, PanelStatus};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn app(show_splash: bool) -> App {
        let mut config = AppConfig::default();
        config.ui.show_splash = show_splash;
        App::new(&config)
    }

    async fn pump_one(app: &mut App) {
        let action = app.action_rx.recv().await.expect("channel open");
        app.handle_action(action);
    }

    #[tokio::test]
    async fn test_ctrl_c_always_exits() {
        let mut app = app(true);
        let result = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(result, EventResult::Exit);
    }

    #[tokio::test]
    async fn test_any_key_skips_splash() {
        let mut app = app(true);
        assert!(matches!(app.screen, CurrentScreen::Splash(_)));

        assert_eq!(app.handle_key(key('1')), EventResult::Consumed);

        assert!(matches!(app.screen, CurrentScreen::Demo));
        assert!(!app.session.state().panels().is_requested(PanelId::Catalog));
    }

    #[tokio::test]
    async fn test_quit_key_exits() {
        let mut app = app(false);
        assert_eq!(app.handle_key(key('q')), EventResult::Exit);
    }

    #[tokio::test]
    async fn test_unbound_key_continues() {
        let mut app = app(false);
        assert_eq!(app.handle_key(key('z')), EventResult::Continue);
    }

    #[tokio::test]
    async fn test_help_closes_on_any_key() {
        let mut app = app(false);
        app.handle_key(key('?'));
        assert!(app.view.show_help);

        assert_eq!(app.handle_key(key('1')), EventResult::Consumed);
        assert!(!app.view.show_help);
        assert!(!app.session.state().panels().is_requested(PanelId::Catalog));
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_key_reveals_panel() {
        let mut app = app(false);
        app.handle_key(key('2'));
        assert!(app.session.state().panels().status(PanelId::Cart).is_pending());

        pump_one(&mut app).await;

        assert_eq!(
            app.session.state().panels().status(PanelId::Cart),
            PanelStatus::Resolved
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_key_cancels_pending() {
        let mut app = app(false);
        app.handle_key(key('1'));
        app.handle_key(key('r'));

        assert_eq!(
            app.session.state().panels().status(PanelId::Catalog),
            PanelStatus::NotRequested
        );
        assert_eq!(app.session.scheduler().pending_count(), 0);
    }

    #[tokio::test]
    async fn test_code_key_toggles_sample() {
        let mut app = app(false);
        app.handle_key(key('s'));
        assert!(app.session.state().show_code());
        app.handle_key(key('s'));
        assert!(!app.session.state().show_code());
    }

    #[tokio::test]
    async fn test_tick_redraws_only_while_needed() {
        let mut app = app(false);
        assert!(!app.tick(ANIMATION_TICK_RATE));

        app.handle_key(key('3'));
        assert!(app.tick(ANIMATION_TICK_RATE));
    }
}

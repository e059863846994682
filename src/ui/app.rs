use std::io;

use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::session::SessionBootstrapper;
use crate::ui::action::Action;
use crate::ui::app_state::AppState;
use crate::ui::effect::Effect;
use crate::ui::events::AppEvent;
use crate::ui::terminal_guard::{install_panic_hook, TerminalGuard};
use crate::ui::view;

/// Main application: owns the UI state and drives the event loop
pub struct App {
    config: Config,
    bootstrapper: SessionBootstrapper,
    state: AppState,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(config: Config, bootstrapper: SessionBootstrapper) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            config,
            bootstrapper,
            state: AppState::new(),
            event_tx,
            event_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the wizard until the participant quits
    pub async fn run(&mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut guard = TerminalGuard::new();

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut input = EventStream::new();
        let mut ticker = tokio::time::interval(self.config.tick_rate);

        // The loading view goes out before storage is touched
        terminal.draw(|f| view::draw(f, &self.state, &self.config))?;
        self.run_effect(Effect::ResolveSession);

        loop {
            tokio::select! {
                maybe_event = input.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_app_event(AppEvent::Input(event)),
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                Some(event) = self.event_rx.recv() => self.handle_app_event(event),
                _ = ticker.tick() => self.handle_app_event(AppEvent::Tick),
            }

            if self.state.should_quit {
                break;
            }

            terminal.draw(|f| view::draw(f, &self.state, &self.config))?;
        }

        Ok(())
    }

    /// Execute a side effect; results come back as [`AppEvent`]s
    pub fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::ResolveSession => {
                let resolved = self.bootstrapper.resolve();
                if self
                    .event_tx
                    .send(AppEvent::SessionResolved(resolved))
                    .is_err()
                {
                    tracing::debug!("Event channel closed before session was delivered");
                }
            }
        }
    }

    /// Handle every event already queued, without waiting
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_app_event(event);
        }
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if let Some(action) = Action::from_key(key) {
                    self.state.handle_action(action);
                }
            }
            AppEvent::Input(_) => {}
            AppEvent::SessionResolved(resolved) => {
                tracing::debug!(origin = ?resolved.origin, "Session ready");
                self.state.set_session(resolved);
            }
            AppEvent::Tick => {
                if self.state.is_loading() {
                    self.state.spinner.tick();
                }
            }
        }
    }
}

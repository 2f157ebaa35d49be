use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use rand::rngs::StdRng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::events::{map_key, Action, AppEvent};
use super::layout::EncounterLayout;
use super::theme::Theme;
use super::views::{command_key, initiative, roster};
use super::widgets::input_buffer::InputBuffer;
use crate::config::AppConfig;
use crate::core::encounter::EncounterState;
use crate::core::interpreter::{Interpreter, StatusMessage, UiEffect};

const TITLE: &str = "D&D Encounter Tracker";
const PROMPT: &str = "Enter a command:";

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    pub encounter: EncounterState,
    interpreter: Interpreter<StdRng>,
    pub input: InputBuffer,
    /// Text keys only reach the input box while this is set.
    pub input_focused: bool,
    /// Result of the most recent command.
    pub status: StatusMessage,
    pub theme: Theme,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_interpreter(config, Interpreter::new())
    }

    pub fn with_interpreter(config: &AppConfig, interpreter: Interpreter<StdRng>) -> Self {
        Self {
            running: true,
            encounter: EncounterState::with_options(config.encounter.options()),
            interpreter,
            input: InputBuffer::new(),
            input_focused: true,
            status: StatusMessage::info(PROMPT),
            theme: Theme::for_mode(config.tui.theme),
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        frame_interval: Duration,
    ) -> io::Result<()> {
        let mut ticks = tokio::time::interval(frame_interval);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = ticks.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(AppEvent::Input(event)),
                    Some(Err(e)) => return Err(e),
                    None => self.handle_event(AppEvent::Quit),
                },
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {}
            AppEvent::Quit => self.running = false,
            AppEvent::Input(Event::Key(key)) => {
                if let Some(action) = map_key(&key, self.input_focused) {
                    self.handle_action(action);
                }
            }
            AppEvent::Input(Event::Resize(width, height)) => {
                debug!(width, height, "terminal resized");
            }
            AppEvent::Input(_) => {}
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Insert(c) => self.input.insert_char(c),
            Action::Backspace => self.input.backspace(),
            Action::Delete => self.input.delete(),
            Action::CursorLeft => self.input.move_left(),
            Action::CursorRight => self.input.move_right(),
            Action::CursorHome => self.input.move_home(),
            Action::CursorEnd => self.input.move_end(),
            Action::HistoryPrev => self.input.history_prev(),
            Action::HistoryNext => self.input.history_next(),
            Action::Submit => self.submit(),
            Action::ToggleFocus => self.input_focused = !self.input_focused,
            Action::Quit => {
                info!("quit requested");
                self.running = false;
            }
        }
    }

    /// Run the current input line through the interpreter.
    fn submit(&mut self) {
        let line = self.input.submit();
        let Some(outcome) = self.interpreter.submit(&mut self.encounter, &line) else {
            return;
        };

        match outcome.effect {
            UiEffect::None => {}
            UiEffect::SetTheme(mode) => self.theme = Theme::for_mode(mode),
            UiEffect::Quit => self.running = false,
        }
        self.status = outcome.status;
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let theme = &self.theme;
        let layout = EncounterLayout::compute(area, self.encounter.initiative_order().len());

        frame.render_widget(Block::default().style(theme.base()), area);
        frame.render_widget(
            Paragraph::new(Span::styled(TITLE, theme.title())).alignment(Alignment::Center),
            layout.title,
        );

        roster::render(frame, layout.roster, &self.encounter, theme);
        initiative::render(frame, layout.initiative, &self.encounter, theme);
        self.render_input(frame, layout.input);
        self.render_status(frame, layout.status);

        if let Some(key_area) = layout.command_key {
            command_key::render(frame, key_area, theme);
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let block = if self.input_focused {
            theme.block_focused("Command")
        } else {
            theme.block_default("Command")
        };
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Keep the cursor in view on long lines.
        let cursor = self.input.cursor_width() as u16;
        let offset = cursor.saturating_sub(inner.width.saturating_sub(1));

        let line = if self.input.text().is_empty() && !self.input_focused {
            Line::from(Span::styled("Esc to type a command", theme.dim()))
        } else {
            Line::from(Span::styled(self.input.text().to_string(), theme.text()))
        };
        frame.render_widget(Paragraph::new(line).scroll((0, offset)), inner);

        if self.input_focused && inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position((inner.x + cursor - offset, inner.y));
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            format!(" {}", self.status.text),
            self.theme.status(self.status.level),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

//! Command dispatcher.
//!
//! Parses a submitted line, applies it to the [`EncounterState`] and turns the
//! result, success or failure, into a status message. Nothing here returns an
//! error: every failure becomes text for the message area.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::command::Command;
use super::encounter::EncounterState;
use crate::config::ThemeMode;

/// Severity of a status message, used for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Error,
        }
    }
}

/// Side effects the UI has to carry out after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    None,
    SetTheme(ThemeMode),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: StatusMessage,
    pub effect: UiEffect,
}

impl Outcome {
    fn status(status: StatusMessage) -> Self {
        Self {
            status,
            effect: UiEffect::None,
        }
    }
}

pub struct Interpreter<R = StdRng> {
    rng: R,
}

impl Interpreter<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for Interpreter<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Interpreter<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Handle one submitted line. Blank lines yield `None`.
    pub fn submit(&mut self, state: &mut EncounterState, line: &str) -> Option<Outcome> {
        if line.trim().is_empty() {
            return None;
        }
        let outcome = match Command::parse(line) {
            Ok(command) => self.execute(state, command),
            Err(e) => {
                debug!(line, error = %e, "rejected command");
                Outcome::status(StatusMessage::error(e.to_string()))
            }
        };
        Some(outcome)
    }

    pub fn execute(&mut self, state: &mut EncounterState, command: Command) -> Outcome {
        info!(command = command.label(), "dispatching command");
        let result = match command {
            Command::Add { name, health, ac } => state.add_participant(&name, health, ac),
            Command::Remove { name } => state.remove_participant(&name),
            Command::ApplyCondition {
                condition,
                effect,
                duration,
                target,
            } => state.apply_condition(&condition, &effect, duration, &target),
            Command::Advance => Ok(state.advance_conditions()),
            Command::Roll(scope) => Ok(state.roll_initiative(scope, &mut self.rng)),
            Command::Modify { name, health, ac } => state.modify_participant(&name, health, ac),
            Command::RemoveCondition { target, condition } => {
                state.remove_condition(&target, condition.as_deref())
            }
            Command::Mode(mode) => {
                let label = match mode {
                    ThemeMode::Light => "light",
                    ThemeMode::Dark => "dark",
                };
                return Outcome {
                    status: StatusMessage::info(format!("Switched to {label} mode.")),
                    effect: UiEffect::SetTheme(mode),
                };
            }
            Command::Quit => {
                return Outcome {
                    status: StatusMessage::info("Goodbye."),
                    effect: UiEffect::Quit,
                };
            }
        };

        match result {
            Ok(text) => Outcome::status(StatusMessage::success(text)),
            Err(e) => {
                debug!(error = %e, "command failed");
                Outcome::status(StatusMessage::error(e.to_string()))
            }
        }
    }
}

//! Error types for encounter commands.
//!
//! Every variant's `Display` text is the status line shown to the user, so
//! nothing here ever needs to reach the process level.

use thiserror::Error;

/// Failures raised by the encounter state store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncounterError {
    /// `add` with a name already in the registry (case-insensitive).
    #[error("Character '{0}' already exists!")]
    DuplicateName(String),

    /// Operation on a participant that is not in the registry.
    #[error("Character '{0}' not found.")]
    NotFound(String),

    /// Remove-condition on a target that never had a condition entry.
    #[error("Target '{0}' not found or has no conditions.")]
    NoConditions(String),

    /// Condition durations are counted in whole turns and must be at least one.
    #[error("Duration must be a positive integer!")]
    InvalidDuration,

    #[error("Duration is too large! At most {max} turns.")]
    DurationTooLarge { max: u32 },
}

/// Failures raised while turning an input line into a [`Command`](super::command::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Wrong number of tokens for a known command.
    #[error("Format: {usage}")]
    Format { usage: &'static str },

    /// Health or AC did not parse as an integer.
    #[error("Invalid health/AC! Must be integers.")]
    HealthAcNotInteger,

    /// Condition duration did not parse as an integer.
    #[error("Duration must be an integer!")]
    DurationNotInteger,

    /// Unknown keyword or unparseable line.
    #[error("Invalid command format!")]
    Invalid,
}

impl CommandError {
    pub fn format(usage: &'static str) -> Self {
        Self::Format { usage }
    }
}

pub type EncounterResult<T> = Result<T, EncounterError>;

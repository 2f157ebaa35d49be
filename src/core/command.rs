//! Command grammar.
//!
//! A submitted line is split on commas, tokens are trimmed, and the first
//! token (case-insensitive) picks the variant. Arity is checked here so the
//! dispatcher only ever sees well-shaped commands.

use std::num::IntErrorKind;

use super::encounter::RollScope;
use super::error::CommandError;
use crate::config::ThemeMode;

pub const ADD_USAGE: &str = "add, name, health, ac";
pub const REMOVE_USAGE: &str = "remove, name | remove, condition, target[, condition]";
pub const CONDITION_USAGE: &str = "condition, name, effect, duration, target";
pub const ADVANCE_USAGE: &str = "advance";
pub const ROLL_USAGE: &str = "roll[, new]";
pub const MODIFY_USAGE: &str = "modify, name[, health][, ac]";
pub const CLEAR_USAGE: &str = "clear, target[, condition]";
pub const MODE_USAGE: &str = "mode, light|dark";

/// A parsed command, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        name: String,
        health: i32,
        ac: i32,
    },
    Remove {
        name: String,
    },
    ApplyCondition {
        condition: String,
        effect: String,
        duration: i64,
        target: String,
    },
    Advance,
    Roll(RollScope),
    Modify {
        name: String,
        health: Option<i32>,
        ac: Option<i32>,
    },
    RemoveCondition {
        target: String,
        condition: Option<String>,
    },
    Mode(ThemeMode),
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
        let keyword = tokens[0].to_ascii_lowercase();
        let args = &tokens[1..];

        match keyword.as_str() {
            "add" => match args {
                [name, health, ac] if !name.is_empty() => {
                    let health = parse_int(health).ok_or(CommandError::HealthAcNotInteger)?;
                    let ac = parse_int(ac).ok_or(CommandError::HealthAcNotInteger)?;
                    Ok(Self::Add {
                        name: name.to_string(),
                        health,
                        ac,
                    })
                }
                _ => Err(CommandError::format(ADD_USAGE)),
            },
            // Two tokens always name a participant, so one called "Condition"
            // stays removable.
            "remove" => match args {
                [name] if !name.is_empty() => Ok(Self::Remove {
                    name: name.to_string(),
                }),
                [sub, rest @ ..] if sub.eq_ignore_ascii_case("condition") => {
                    remove_condition(rest, REMOVE_USAGE)
                }
                _ => Err(CommandError::format(REMOVE_USAGE)),
            },
            "clear" => remove_condition(args, CLEAR_USAGE),
            "condition" => match args {
                [condition, effect, duration, target]
                    if !condition.is_empty() && !target.is_empty() =>
                {
                    let duration = parse_duration(duration)?;
                    Ok(Self::ApplyCondition {
                        condition: condition.to_string(),
                        effect: effect.to_string(),
                        duration,
                        target: target.to_string(),
                    })
                }
                _ => Err(CommandError::format(CONDITION_USAGE)),
            },
            "advance" => match args {
                [] => Ok(Self::Advance),
                _ => Err(CommandError::format(ADVANCE_USAGE)),
            },
            "roll" => match args {
                [] => Ok(Self::Roll(RollScope::All)),
                [scope] if scope.eq_ignore_ascii_case("new") => Ok(Self::Roll(RollScope::NewOnly)),
                [scope] if scope.eq_ignore_ascii_case("all") => Ok(Self::Roll(RollScope::All)),
                _ => Err(CommandError::format(ROLL_USAGE)),
            },
            "modify" => match args {
                [name, values @ ..] if !name.is_empty() && values.len() <= 2 => {
                    let health = optional_int(values.first().copied())?;
                    let ac = optional_int(values.get(1).copied())?;
                    Ok(Self::Modify {
                        name: name.to_string(),
                        health,
                        ac,
                    })
                }
                _ => Err(CommandError::format(MODIFY_USAGE)),
            },
            "mode" => match args {
                [mode] if mode.eq_ignore_ascii_case("light") => Ok(Self::Mode(ThemeMode::Light)),
                [mode] if mode.eq_ignore_ascii_case("dark") => Ok(Self::Mode(ThemeMode::Dark)),
                _ => Err(CommandError::format(MODE_USAGE)),
            },
            "quit" | "exit" if args.is_empty() => Ok(Self::Quit),
            _ => Err(CommandError::Invalid),
        }
    }

    /// Short variant label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
            Self::ApplyCondition { .. } => "condition",
            Self::Advance => "advance",
            Self::Roll(_) => "roll",
            Self::Modify { .. } => "modify",
            Self::RemoveCondition { .. } => "remove_condition",
            Self::Mode(_) => "mode",
            Self::Quit => "quit",
        }
    }
}

fn remove_condition(args: &[&str], usage: &'static str) -> Result<Command, CommandError> {
    match args {
        [target] if !target.is_empty() => Ok(Command::RemoveCondition {
            target: target.to_string(),
            condition: None,
        }),
        [target, condition] if !target.is_empty() => Ok(Command::RemoveCondition {
            target: target.to_string(),
            condition: (!condition.is_empty()).then(|| condition.to_string()),
        }),
        _ => Err(CommandError::format(usage)),
    }
}

/// Out-of-range integers saturate so the store reports them by sign rather
/// than as non-integers.
fn parse_duration(token: &str) -> Result<i64, CommandError> {
    token.parse::<i64>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(CommandError::DurationNotInteger),
    })
}

fn parse_int(token: &str) -> Option<i32> {
    token.parse().ok()
}

/// Empty or `-` means "leave unchanged".
fn optional_int(token: Option<&str>) -> Result<Option<i32>, CommandError> {
    match token {
        None | Some("") | Some("-") => Ok(None),
        Some(t) => parse_int(t).map(Some).ok_or(CommandError::HealthAcNotInteger),
    }
}

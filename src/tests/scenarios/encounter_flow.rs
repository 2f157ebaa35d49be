use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::encounter::{EncounterOptions, EncounterState};
use crate::core::interpreter::{Interpreter, StatusLevel, StatusMessage, UiEffect};

// =============================================================================
// Helpers
// =============================================================================

struct Session {
    state: EncounterState,
    interpreter: Interpreter<StdRng>,
}

impl Session {
    fn new() -> Self {
        Self::with_options(EncounterOptions::default())
    }

    fn with_options(options: EncounterOptions) -> Self {
        Self {
            state: EncounterState::with_options(options),
            interpreter: Interpreter::with_rng(StdRng::seed_from_u64(2024)),
        }
    }

    fn run(&mut self, line: &str) -> StatusMessage {
        self.interpreter
            .submit(&mut self.state, line)
            .map(|outcome| outcome.status)
            .unwrap_or_else(|| panic!("no outcome for {line:?}"))
    }

    fn ok(&mut self, line: &str) -> String {
        let status = self.run(line);
        assert_eq!(status.level, StatusLevel::Success, "{line:?} -> {}", status.text);
        status.text
    }

    fn err(&mut self, line: &str) -> String {
        let status = self.run(line);
        assert_eq!(status.level, StatusLevel::Error, "{line:?} -> {}", status.text);
        status.text
    }

    fn remaining(&self, target: &str) -> Vec<(String, u32)> {
        self.state
            .conditions_for(target)
            .iter()
            .map(|c| (c.name.clone(), c.remaining_turns))
            .collect()
    }
}

// =============================================================================
// Participants
// =============================================================================

#[test]
fn test_duplicate_add_keeps_first_entry() {
    let mut s = Session::new();
    s.ok("add, Aria, 10, 15");
    assert_eq!(s.err("add, aria, 5, 5"), "Character 'Aria' already exists!");

    assert_eq!(s.state.len(), 1);
    let aria = s.state.participant("ARIA").unwrap();
    assert_eq!((aria.health, aria.armor_class), (10, 15));
}

#[test]
fn test_modify_health_only_keeps_ac() {
    let mut s = Session::new();
    s.ok("add, Aria, 10, 15");
    assert_eq!(
        s.ok("modify, aria, 7"),
        "Character 'Aria' updated with HP: 7 and AC: 15."
    );
    let aria = s.state.participant("Aria").unwrap();
    assert_eq!((aria.health, aria.armor_class), (7, 15));

    s.ok("modify, Aria, -, 12");
    let aria = s.state.participant("Aria").unwrap();
    assert_eq!((aria.health, aria.armor_class), (7, 12));
}

#[test]
fn test_failed_commands_leave_state_untouched() {
    let mut s = Session::new();
    s.ok("add, Aria, 10, 15");

    assert_eq!(s.err("add, Borin, lots, 16"), "Invalid health/AC! Must be integers.");
    assert_eq!(s.err("modify, Zed, 1, 1"), "Character 'Zed' not found.");
    assert_eq!(s.err("remove, Zed"), "Character 'Zed' not found.");
    assert_eq!(s.err("add, Borin"), "Format: add, name, health, ac");
    assert_eq!(s.err("dance, wildly"), "Invalid command format!");

    assert_eq!(s.state.len(), 1);
    assert!(s.state.participant("Borin").is_none());
}

#[test]
fn test_remove_keeps_conditions_by_default() {
    let mut s = Session::new();
    s.ok("add, Aria, 10, 15");
    s.ok("condition, Blessed, +1d4, 3, Aria");
    assert_eq!(s.ok("remove, aria"), "Character 'Aria' removed.");
    assert!(s.state.participant("Aria").is_none());
    assert_eq!(s.remaining("Aria"), [("Blessed".to_string(), 3)]);
}

#[test]
fn test_remove_cascades_when_enabled() {
    let mut s = Session::with_options(EncounterOptions {
        cascade_remove_conditions: true,
        ..EncounterOptions::default()
    });
    s.ok("add, Aria, 10, 15");
    s.ok("condition, Blessed, +1d4, 3, Aria");
    s.ok("remove, Aria");
    assert!(!s.state.has_condition_entry("Aria"));
}

#[test]
fn test_participant_named_condition() {
    let mut s = Session::new();
    s.ok("add, Condition, 4, 4");
    assert_eq!(s.ok("remove, condition"), "Character 'Condition' removed.");
    assert!(s.state.is_empty());
}

// =============================================================================
// Conditions
// =============================================================================

#[test]
fn test_poison_expires_after_duration() {
    let mut s = Session::new();
    s.ok("add, Borin, 20, 16");
    assert_eq!(
        s.ok("condition, Poisoned, 1d4 dmg/turn, 3, Borin"),
        "Condition 'Poisoned' applied to Borin for 3 turns."
    );

    s.ok("advance");
    assert_eq!(s.remaining("Borin"), [("Poisoned".to_string(), 2)]);
    s.ok("advance");
    assert_eq!(s.remaining("Borin"), [("Poisoned".to_string(), 1)]);
    assert_eq!(s.ok("advance"), "Conditions advanced by one turn.");
    assert!(s.remaining("Borin").is_empty());
    assert!(s.state.has_condition_entry("Borin"));
}

#[test]
fn test_duplicate_conditions_expire_independently() {
    let mut s = Session::new();
    s.ok("condition, Prone, fallen, 1, Aria");
    s.ok("condition, Prone, fallen again, 2, Aria");
    s.ok("advance");
    assert_eq!(s.remaining("Aria"), [("Prone".to_string(), 1)]);
}

#[test]
fn test_invalid_durations_rejected() {
    let mut s = Session::new();
    assert_eq!(
        s.err("condition, Stunned, no actions, 0, Aria"),
        "Duration must be a positive integer!"
    );
    assert_eq!(
        s.err("condition, Stunned, no actions, -2, Aria"),
        "Duration must be a positive integer!"
    );
    assert_eq!(
        s.err("condition, Stunned, no actions, soon, Aria"),
        "Duration must be an integer!"
    );
    assert_eq!(
        s.err("condition, Stunned, no actions, 5000000000, Aria"),
        "Duration is too large! At most 4294967295 turns."
    );
    assert_eq!(
        s.err("condition, Stunned, no actions, 99999999999999999999, Aria"),
        "Duration is too large! At most 4294967295 turns."
    );
    assert_eq!(
        s.err("condition, Stunned, no actions, -99999999999999999999, Aria"),
        "Duration must be a positive integer!"
    );
    assert!(!s.state.has_condition_entry("Aria"));
}

#[test]
fn test_clear_target_leaves_others() {
    let mut s = Session::new();
    s.ok("condition, Poisoned, 1d4, 3, Aria");
    s.ok("condition, Blessed, +1d4, 2, Aria");
    s.ok("condition, Prone, fallen, 2, Borin");

    assert_eq!(
        s.ok("remove, condition, aria"),
        "All conditions removed from Aria."
    );
    assert!(s.remaining("Aria").is_empty());
    assert_eq!(s.remaining("Borin"), [("Prone".to_string(), 2)]);
}

#[test]
fn test_remove_single_condition_by_name() {
    let mut s = Session::new();
    s.ok("condition, Poisoned, 1d4, 3, Aria");
    s.ok("condition, Blessed, +1d4, 2, Aria");
    s.ok("condition, Poisoned, again, 5, Aria");

    s.ok("clear, Aria, poisoned");
    assert_eq!(s.remaining("Aria"), [("Blessed".to_string(), 2)]);
}

#[test]
fn test_remove_condition_unknown_target() {
    let mut s = Session::new();
    assert_eq!(
        s.err("remove, condition, Ghost"),
        "Target 'Ghost' not found or has no conditions."
    );
}

// =============================================================================
// Initiative and UI commands
// =============================================================================

#[test]
fn test_roll_new_only_keeps_existing_rolls() {
    let mut s = Session::new();
    s.ok("add, Aria, 10, 15");
    s.ok("add, Borin, 20, 16");
    assert_eq!(s.ok("roll"), "Rolling initiative for all characters.");
    let aria_before = s.state.participant("Aria").unwrap().initiative;

    s.ok("add, Cael, 8, 12");
    assert_eq!(s.ok("roll, new"), "Rolling initiative for new characters only.");
    assert_eq!(s.state.participant("Aria").unwrap().initiative, aria_before);
    assert!(s.state.participant("Cael").unwrap().initiative.is_some());
    assert_eq!(s.state.initiative_order().len(), 3);
}

#[test]
fn test_mode_and_quit_effects() {
    let mut state = EncounterState::new();
    let mut interpreter = Interpreter::with_rng(StdRng::seed_from_u64(1));

    let outcome = interpreter.submit(&mut state, "MODE, Light").unwrap();
    assert!(matches!(outcome.effect, UiEffect::SetTheme(_)));

    let outcome = interpreter.submit(&mut state, "exit").unwrap();
    assert_eq!(outcome.effect, UiEffect::Quit);

    assert!(interpreter.submit(&mut state, "  ").is_none());
}

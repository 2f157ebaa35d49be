//! Encounter state store.
//!
//! Owns the participant registry and the active-condition registry. The
//! initiative order is never stored: [`EncounterState::initiative_order`]
//! derives it from the registry on every call.

use indexmap::IndexMap;
use rand::Rng;
use tracing::debug;

use super::error::{EncounterError, EncounterResult};

// ============================================================================
// Types
// ============================================================================

/// A tracked combatant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub health: i32,
    pub armor_class: i32,
    /// Absent until rolled.
    pub initiative: Option<u32>,
}

/// A timed status effect attached to a target name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub name: String,
    pub effect: String,
    /// Always >= 1 while stored.
    pub remaining_turns: u32,
}

/// Which participants an initiative roll touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollScope {
    /// Everyone, overwriting existing values.
    All,
    /// Only participants without an initiative yet.
    NewOnly,
}

/// Behaviour switches for the store, filled from `[encounter]` config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncounterOptions {
    /// Drop a participant's conditions when the participant is removed.
    pub cascade_remove_conditions: bool,
    /// Initiative is uniform in `1..=initiative_die`.
    pub initiative_die: u32,
}

impl Default for EncounterOptions {
    fn default() -> Self {
        Self {
            cascade_remove_conditions: false,
            initiative_die: 20,
        }
    }
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Registry key for a participant or condition target.
pub fn canonical_name(name: &str) -> String {
    capitalize(name.trim())
}

// ============================================================================
// Store
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct EncounterState {
    participants: IndexMap<String, Participant>,
    conditions: IndexMap<String, Vec<Condition>>,
    options: EncounterOptions,
}

impl EncounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EncounterOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> EncounterOptions {
        self.options
    }

    // ── Participants ────────────────────────────────────────────────────

    pub fn add_participant(&mut self, name: &str, health: i32, ac: i32) -> EncounterResult<String> {
        let key = canonical_name(name);
        if self.participants.contains_key(&key) {
            return Err(EncounterError::DuplicateName(key));
        }
        self.participants.insert(
            key.clone(),
            Participant {
                name: key.clone(),
                health,
                armor_class: ac,
                initiative: None,
            },
        );
        Ok(format!("Character '{key}' added with {health} HP and {ac} AC."))
    }

    pub fn remove_participant(&mut self, name: &str) -> EncounterResult<String> {
        let key = canonical_name(name);
        if self.participants.shift_remove(&key).is_none() {
            return Err(EncounterError::NotFound(key));
        }
        if self.options.cascade_remove_conditions {
            let dropped = self.conditions.shift_remove(&key).map_or(0, |c| c.len());
            debug!(target_name = %key, dropped, "cascaded condition removal");
        }
        Ok(format!("Character '{key}' removed."))
    }

    /// Update whichever of health/AC is given, leaving the other as it was.
    pub fn modify_participant(
        &mut self,
        name: &str,
        health: Option<i32>,
        ac: Option<i32>,
    ) -> EncounterResult<String> {
        let key = canonical_name(name);
        let participant = self
            .participants
            .get_mut(&key)
            .ok_or_else(|| EncounterError::NotFound(key.clone()))?;
        if let Some(health) = health {
            participant.health = health;
        }
        if let Some(ac) = ac {
            participant.armor_class = ac;
        }
        Ok(format!(
            "Character '{key}' updated with HP: {} and AC: {}.",
            participant.health, participant.armor_class
        ))
    }

    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.participants.get(&canonical_name(name))
    }

    /// Participants in insertion order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.values()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    // ── Initiative ──────────────────────────────────────────────────────

    pub fn roll_initiative<R: Rng + ?Sized>(&mut self, scope: RollScope, rng: &mut R) -> String {
        let die = self.options.initiative_die.max(1);
        let mut rolled = 0usize;
        for participant in self.participants.values_mut() {
            if scope == RollScope::NewOnly && participant.initiative.is_some() {
                continue;
            }
            participant.initiative = Some(rng.gen_range(1..=die));
            rolled += 1;
        }
        debug!(?scope, rolled, "initiative rolled");
        match scope {
            RollScope::All => "Rolling initiative for all characters.".to_string(),
            RollScope::NewOnly => "Rolling initiative for new characters only.".to_string(),
        }
    }

    /// `(name, initiative)` for every participant that has rolled, highest
    /// first. Ties keep registry order.
    pub fn initiative_order(&self) -> Vec<(&str, u32)> {
        let mut order: Vec<(&str, u32)> = self
            .participants
            .values()
            .filter_map(|p| p.initiative.map(|init| (p.name.as_str(), init)))
            .collect();
        order.sort_by(|a, b| b.1.cmp(&a.1));
        order
    }

    // ── Conditions ──────────────────────────────────────────────────────

    /// Attach a condition to `target`. The target does not have to be a
    /// registered participant.
    pub fn apply_condition(
        &mut self,
        condition: &str,
        effect: &str,
        duration: i64,
        target: &str,
    ) -> EncounterResult<String> {
        if duration <= 0 {
            return Err(EncounterError::InvalidDuration);
        }
        let remaining_turns = u32::try_from(duration)
            .map_err(|_| EncounterError::DurationTooLarge { max: u32::MAX })?;
        let key = canonical_name(target);
        self.conditions
            .entry(key.clone())
            .or_default()
            .push(Condition {
                name: condition.to_string(),
                effect: effect.to_string(),
                remaining_turns,
            });
        Ok(format!(
            "Condition '{condition}' applied to {key} for {remaining_turns} turns."
        ))
    }

    /// Tick every condition down by one turn and drop the ones that hit zero.
    /// Targets left with no conditions keep their (empty) entry.
    pub fn advance_conditions(&mut self) -> String {
        let mut expired = 0usize;
        for list in self.conditions.values_mut() {
            let before = list.len();
            for condition in list.iter_mut() {
                condition.remaining_turns = condition.remaining_turns.saturating_sub(1);
            }
            list.retain(|c| c.remaining_turns > 0);
            expired += before - list.len();
        }
        debug!(expired, "conditions advanced");
        "Conditions advanced by one turn.".to_string()
    }

    /// Clear every condition on `target`, or only those named `condition`
    /// (all occurrences, case-insensitive).
    pub fn remove_condition(&mut self, target: &str, condition: Option<&str>) -> EncounterResult<String> {
        let key = canonical_name(target);
        let list = self
            .conditions
            .get_mut(&key)
            .ok_or_else(|| EncounterError::NoConditions(key.clone()))?;
        match condition {
            Some(name) => {
                list.retain(|c| !c.name.eq_ignore_ascii_case(name));
                Ok(format!("Condition '{name}' removed from {key}."))
            }
            None => {
                list.clear();
                Ok(format!("All conditions removed from {key}."))
            }
        }
    }

    /// Conditions on `target`; empty both for "no current conditions" and for
    /// a target that never had any.
    pub fn conditions_for(&self, target: &str) -> &[Condition] {
        self.conditions
            .get(&canonical_name(target))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `target` has a (possibly empty) entry in the condition registry.
    pub fn has_condition_entry(&self, target: &str) -> bool {
        self.conditions.contains_key(&canonical_name(target))
    }

    /// Condition registry keys, in first-applied order.
    pub fn condition_targets(&self) -> impl Iterator<Item = &str> {
        self.conditions.keys().map(String::as_str)
    }
}

// ============================================================================
// Tests
// ============================================================================

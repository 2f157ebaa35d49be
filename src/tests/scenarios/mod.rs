//! Encounter scenarios driven through typed command lines, the same path the
//! input box takes.

mod encounter_flow;

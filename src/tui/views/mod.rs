pub mod command_key;
pub mod initiative;
pub mod roster;

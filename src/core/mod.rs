pub mod command;
pub mod encounter;
pub mod error;
pub mod interpreter;
pub mod logging;

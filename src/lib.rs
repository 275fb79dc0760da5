//! A pocket calculator: a small input/evaluation state machine plus a
//! terminal front end that drives it.

pub mod calculator;
pub mod config;
pub mod error;
pub mod ui;

pub use calculator::Calculator;
pub use config::Config;
pub use error::{CalcError, ConfigError};

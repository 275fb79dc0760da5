//! Calculator core.
//!
//! This module provides:
//! - The input/evaluation state machine ([`Calculator`])
//! - Keypad labels and line tokenizing ([`Key`], [`parse_keys`])
//! - Display-number formatting and lenient parsing
//! - The history of completed operations
//! - Copying the display to the clipboard

mod clipboard;
mod engine;
mod history;
mod input;
mod number;
mod operator;

pub use clipboard::copy_to_clipboard;
pub use engine::{Calculator, Snapshot};
pub use history::{History, HistoryRecord};
pub use input::{Key, parse_keys};
pub use number::{format_number, parse_number};
pub use operator::{Operator, PendingOperator, calculate};

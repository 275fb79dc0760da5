//! Interactive session: keypad lines plus a few panel commands.

use tracing::{info, warn};

use crate::calculator::{Calculator, Key, copy_to_clipboard, parse_keys};
use crate::error::CalcError;

use super::render::Renderer;
use super::scale::Scale;
use super::theme::ThemeMode;

pub const HELP: &str = "\
keys:      0-9 . + - × ÷ (or * /) = AC +/- %
commands:  history | close | clear-history | theme | copy | json | help | quit";

/// One line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Keys(Vec<Key>),
    ShowHistory,
    HideHistory,
    ClearHistory,
    ToggleTheme,
    Copy,
    Json,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CalcError> {
        let command = match line.trim().to_lowercase().as_str() {
            "history" | "h" => Self::ShowHistory,
            "close" => Self::HideHistory,
            "clear-history" => Self::ClearHistory,
            "theme" => Self::ToggleTheme,
            "copy" => Self::Copy,
            "json" => Self::Json,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Keys(parse_keys(line)?),
        };
        Ok(command)
    }
}

/// What the front end should do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the calculator.
    Render(String),
    /// Print a message instead of redrawing.
    Message(String),
    Quit,
}

pub struct Session<S> {
    calculator: Calculator,
    renderer: Renderer<ThemeMode, S>,
}

impl<S: Scale> Session<S> {
    pub fn new(calculator: Calculator, renderer: Renderer<ThemeMode, S>) -> Self {
        Self {
            calculator,
            renderer,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn render(&self) -> String {
        self.renderer.render(&self.calculator.snapshot())
    }

    /// Parse and run a line. Invalid input leaves the calculator untouched.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome, CalcError> {
        let command = Command::parse(line).inspect_err(|e| warn!(%e, line, "rejected input"))?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome, CalcError> {
        match command {
            Command::Keys(keys) => {
                for key in keys {
                    self.calculator.press(key)?;
                }
            }
            Command::ShowHistory => self.calculator.show_history(),
            Command::HideHistory => self.calculator.hide_history(),
            Command::ClearHistory => self.calculator.clear_history(),
            Command::ToggleTheme => {
                let theme = self.renderer.toggle_theme();
                info!(theme = theme.name(), "theme toggled");
            }
            Command::Copy => {
                copy_to_clipboard(self.calculator.display())?;
                return Ok(Outcome::Message(format!(
                    "copied {}",
                    self.calculator.display()
                )));
            }
            Command::Json => {
                let json = serde_json::to_string_pretty(&self.calculator.snapshot())
                    .map_err(|e| CalcError::Encode(e.to_string()))?;
                return Ok(Outcome::Message(json));
            }
            Command::Help => return Ok(Outcome::Message(HELP.to_string())),
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Render(self.render()))
    }
}

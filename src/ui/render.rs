//! Text rendering of a calculator [`Snapshot`].

use crate::calculator::Snapshot;

use super::scale::Scale;
use super::theme::{Rgb, Theme, ThemeMode, paint};

const HISTORY_TITLE: &str = "History";
const EMPTY_HISTORY: &str = "No history available.";

pub struct Renderer<T, S> {
    theme: T,
    scale: S,
    color: bool,
}

impl<T: Theme, S: Scale> Renderer<T, S> {
    pub fn new(theme: T, scale: S, color: bool) -> Self {
        Self {
            theme,
            scale,
            color,
        }
    }

    /// Render the operator indicator and display right-aligned, followed by
    /// the history panel when it is open.
    pub fn render(&self, snapshot: &Snapshot) -> String {
        let palette = self.theme.palette();
        let width = self.scale.columns();

        let indicator = snapshot.pending_operator.as_deref().unwrap_or("");
        let mut lines = vec![
            self.line(&format!("{:>width$}", indicator), palette.accent),
            self.line(&format!("{:>width$}", snapshot.display), palette.foreground),
        ];

        if snapshot.history_visible {
            lines.push(self.line(HISTORY_TITLE, palette.foreground));
            if snapshot.history.is_empty() {
                lines.push(self.line(EMPTY_HISTORY, palette.foreground));
            } else {
                for entry in &snapshot.history {
                    lines.push(self.line(entry, palette.foreground));
                }
            }
        }

        lines.join("\n")
    }

    fn line(&self, text: &str, fg: Rgb) -> String {
        if self.color {
            paint(text, fg, self.theme.palette().background)
        } else {
            text.to_string()
        }
    }
}

impl<S: Scale> Renderer<ThemeMode, S> {
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggle();
        self.theme
    }
}

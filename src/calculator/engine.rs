//! The calculator state machine.
//!
//! The engine is either entering the first operand (no accumulator) or has an
//! operator pending. Digits and the decimal point edit the current operand;
//! operators fold the current operand into the accumulator, evaluating the
//! previously pending operator when a new right operand has been entered.
//!
//! A second binary operator pressed before any new operand only replaces the
//! pending one. Anything that edits the display (digits, `.`, `%`, `+/-`)
//! counts as a new operand.
//!
//! Pressing `=` leaves a [`PendingOperator::Equals`] behind. A second `=` with
//! no new digit runs that pseudo-operator, which just returns the right
//! operand, so repeated `=` leaves the display as it is rather than repeating
//! the last operation.

use serde::Serialize;
use tracing::{debug, trace};

use super::history::{History, HistoryRecord};
use super::input::Key;
use super::number::{format_number, parse_number};
use super::operator::{Operator, PendingOperator, calculate};
use crate::error::CalcError;

const INITIAL_DISPLAY: &str = "0";

/// Read-only view of the engine handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub display: String,
    pub pending_operator: Option<String>,
    pub history: Vec<String>,
    pub history_visible: bool,
}

/// Calculator engine owning all input and evaluation state.
#[derive(Clone, Debug)]
pub struct Calculator {
    display: String,
    accumulator: Option<f64>,
    pending: Option<PendingOperator>,
    awaiting_new_entry: bool,
    /// Display edited since the last operator or `=`.
    operand_entered: bool,
    history: History,
    track_history: bool,
    history_visible: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator that records completed operations.
    pub fn new() -> Self {
        Self::with_history(true)
    }

    /// Create a calculator that never records history.
    pub fn without_history() -> Self {
        Self::with_history(false)
    }

    pub fn with_history(track_history: bool) -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            accumulator: None,
            pending: None,
            awaiting_new_entry: false,
            operand_entered: false,
            history: History::new(),
            track_history,
            history_visible: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    pub fn pending_operator(&self) -> Option<PendingOperator> {
        self.pending
    }

    pub fn awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_visible(&self) -> bool {
        self.history_visible
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            pending_operator: self.pending.map(|op| op.symbol().to_string()),
            history: self.history.lines(),
            history_visible: self.history_visible,
        }
    }

    /// Dispatch a keypad press.
    pub fn press(&mut self, key: Key) -> Result<(), CalcError> {
        trace!(%key, "key press");
        match key {
            Key::Digit(d) => self.digit(d)?,
            Key::Decimal => self.decimal(),
            Key::Operator(op) => self.apply_operator(op),
            Key::Equals => self.evaluate(),
            Key::Clear => self.clear(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.percent(),
        }
        Ok(())
    }

    /// Enter a digit, starting a new number if an operator was just chosen.
    pub fn digit(&mut self, d: u8) -> Result<(), CalcError> {
        if d > 9 {
            return Err(CalcError::InvalidDigit(d));
        }
        let d = char::from(b'0' + d);
        self.operand_entered = true;

        if self.awaiting_new_entry {
            self.display = d.to_string();
            self.awaiting_new_entry = false;
        } else if self.display == INITIAL_DISPLAY {
            self.display = d.to_string();
        } else {
            self.display.push(d);
        }
        Ok(())
    }

    /// Enter a decimal point. A second point in the same number is ignored.
    pub fn decimal(&mut self) {
        self.operand_entered = true;
        if self.awaiting_new_entry {
            self.display = "0.".to_string();
            self.awaiting_new_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Reset display, accumulator and pending operator. History is kept.
    pub fn clear(&mut self) {
        debug!("clear");
        self.display = INITIAL_DISPLAY.to_string();
        self.accumulator = None;
        self.pending = None;
        self.awaiting_new_entry = false;
        self.operand_entered = false;
    }

    pub fn toggle_sign(&mut self) {
        self.display = format_number(-parse_number(&self.display));
        self.operand_entered = true;
    }

    pub fn percent(&mut self) {
        self.display = format_number(parse_number(&self.display) / 100.0);
        self.operand_entered = true;
    }

    /// Choose the next binary operator.
    pub fn apply_operator(&mut self, op: Operator) {
        self.advance(PendingOperator::Binary(op));
    }

    /// Complete the pending operation (`=`).
    pub fn evaluate(&mut self) {
        self.advance(PendingOperator::Equals);
    }

    /// Accept an operator by its button symbol. `=` evaluates.
    pub fn operator(&mut self, symbol: &str) -> Result<(), CalcError> {
        if symbol.trim() == "=" {
            self.evaluate();
            return Ok(());
        }
        let op = symbol.trim().parse::<Operator>()?;
        self.apply_operator(op);
        Ok(())
    }

    pub fn show_history(&mut self) {
        self.history_visible = true;
    }

    pub fn hide_history(&mut self) {
        self.history_visible = false;
    }

    /// Empty the history and close the history panel.
    pub fn clear_history(&mut self) {
        debug!(records = self.history.len(), "clearing history");
        self.history.clear();
        self.history_visible = false;
    }

    fn advance(&mut self, next: PendingOperator) {
        let input = parse_number(&self.display);

        match (self.accumulator, self.pending) {
            (None, _) => {
                self.accumulator = Some(input);
            }
            // Operator pressed again before a new operand: only swap it.
            (Some(_), Some(PendingOperator::Binary(_)))
                if matches!(next, PendingOperator::Binary(_)) && !self.operand_entered => {}
            (Some(acc), Some(pending)) => {
                let result = calculate(acc, input, pending);
                self.display = format_number(result);

                if let Some(operator) = pending.as_binary() {
                    debug!(acc, %operator, input, result, "evaluated");
                    if self.track_history {
                        self.history.push(HistoryRecord {
                            left: acc,
                            operator,
                            right: input,
                            result,
                        });
                    }
                }
                self.accumulator = Some(result);
            }
            (Some(_), None) => {}
        }

        self.awaiting_new_entry = true;
        self.operand_entered = false;
        self.pending = Some(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::input::parse_keys;

    fn run(calc: &mut Calculator, line: &str) {
        for key in parse_keys(line).unwrap() {
            calc.press(key).unwrap();
        }
    }

    fn calc_after(line: &str) -> Calculator {
        let mut calc = Calculator::new();
        run(&mut calc, line);
        calc
    }

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.accumulator(), None);
        assert_eq!(calc.pending_operator(), None);
        assert!(!calc.awaiting_new_entry());
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_leading_zeros_collapse() {
        assert_eq!(calc_after("0 0 5").display(), "5");
        assert_eq!(calc_after("1 0 0").display(), "100");
        assert_eq!(calc_after("0 0").display(), "0");
    }

    #[test]
    fn test_single_decimal_point() {
        assert_eq!(calc_after(". . 5 . 2").display(), "0.52");
        assert_eq!(calc_after("3 . . 1").display(), "3.1");
        assert_eq!(calc_after("4 + .").display(), "0.");
    }

    #[test]
    fn test_decimal_invariant_over_mixed_sequences() {
        for line in ["1.2.3", "9÷0=.5.", "5%.1.", ".+.=.", "7+/-.3.", "1+.5=.."] {
            let calc = calc_after(line);
            assert!(
                calc.display().matches('.').count() <= 1,
                "{line} -> {}",
                calc.display()
            );
        }
    }

    #[test]
    fn test_invalid_digit_rejected() {
        let mut calc = Calculator::new();
        assert_eq!(calc.digit(10), Err(CalcError::InvalidDigit(10)));
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_invalid_operator_rejected() {
        let mut calc = calc_after("4");
        assert_eq!(
            calc.operator("^"),
            Err(CalcError::InvalidOperator("^".to_string()))
        );
        assert_eq!(calc.pending_operator(), None);
    }

    #[test]
    fn test_addition_with_history() {
        let calc = calc_after("1 + 2 =");
        assert_eq!(calc.display(), "3");
        assert_eq!(calc.history().lines(), vec!["1 + 2 = 3"]);
        assert_eq!(calc.pending_operator(), Some(PendingOperator::Equals));
    }

    #[test]
    fn test_chained_operators_evaluate_left_to_right() {
        let calc = calc_after("2 + 3 × 4 =");
        assert_eq!(calc.display(), "20");
        assert_eq!(calc.history().lines(), vec!["2 + 3 = 5", "5 × 4 = 20"]);
    }

    #[test]
    fn test_repeated_operator_does_not_recompute() {
        let mut calc = calc_after("5 + 3 +");
        assert_eq!(calc.display(), "8");
        assert_eq!(calc.accumulator(), Some(8.0));

        calc.apply_operator(Operator::Add);
        assert_eq!(calc.display(), "8");
        assert_eq!(calc.accumulator(), Some(8.0));
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_operator_swap_before_operand() {
        let calc = calc_after("6 + - 2 =");
        assert_eq!(calc.display(), "4");
    }

    #[test]
    fn test_percent_on_right_operand() {
        let calc = calc_after("50 + % =");
        assert_eq!(calc.display(), "50.5");
        assert_eq!(calc.history().lines(), vec!["50 + 0.5 = 50.5"]);
    }

    #[test]
    fn test_toggle_sign_on_right_operand() {
        let calc = calc_after("5 + +/- =");
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.accumulator(), Some(0.0));

        let calc = calc_after("5 + +/- × 2 =");
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.history().lines(), vec!["5 + -5 = 0", "0 × 2 = 0"]);
    }

    #[test]
    fn test_toggle_sign_after_result_is_new_operand() {
        let calc = calc_after("5 + 3 + +/- =");
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.accumulator(), Some(0.0));
    }

    #[test]
    fn test_equals_without_right_operand_uses_display() {
        let calc = calc_after("5 + =");
        assert_eq!(calc.display(), "10");
        assert_eq!(calc.history().lines(), vec!["5 + 5 = 10"]);
    }

    #[test]
    fn test_repeated_equals_keeps_display() {
        let mut calc = calc_after("1 + 2 =");
        calc.evaluate();
        calc.evaluate();
        assert_eq!(calc.display(), "3");
        assert_eq!(calc.accumulator(), Some(3.0));
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_equals_then_operator_continues_from_result() {
        let calc = calc_after("1 + 2 = × 4 =");
        assert_eq!(calc.display(), "12");
    }

    #[test]
    fn test_new_digits_after_equals_start_fresh_operand() {
        let calc = calc_after("1 + 2 = 7 =");
        assert_eq!(calc.display(), "7");
        assert_eq!(calc.accumulator(), Some(7.0));
    }

    #[test]
    fn test_division_by_zero() {
        let calc = calc_after("9 ÷ 0 =");
        assert_eq!(calc.display(), "Infinity");
        assert_eq!(calc.history().lines(), vec!["9 ÷ 0 = Infinity"]);

        assert_eq!(calc_after("0 ÷ 0 =").display(), "NaN");
    }

    #[test]
    fn test_percent_and_toggle_sign() {
        assert_eq!(calc_after("5 %").display(), "0.05");
        assert_eq!(calc_after("7 +/-").display(), "-7");
        assert_eq!(calc_after("7 +/- +/-").display(), "7");
        assert_eq!(calc_after("0 +/-").display(), "0");
    }

    #[test]
    fn test_clear_restores_initial_state() {
        let mut calc = calc_after("1 + 2 = 5 . 3 ×");
        calc.clear();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.accumulator(), None);
        assert_eq!(calc.pending_operator(), None);
        assert!(!calc.awaiting_new_entry());
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_history_disabled() {
        let mut calc = Calculator::without_history();
        run(&mut calc, "1 + 2 =");
        assert_eq!(calc.display(), "3");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_clear_history_hides_panel() {
        let mut calc = calc_after("1 + 1 =");
        calc.show_history();
        assert!(calc.history_visible());

        calc.clear_history();
        assert!(calc.history().is_empty());
        assert!(!calc.history_visible());
        assert_eq!(calc.display(), "2");
    }

    #[test]
    fn test_operator_symbol_entry() {
        let mut calc = calc_after("8");
        calc.operator("*").unwrap();
        calc.digit(2).unwrap();
        calc.operator("=").unwrap();
        assert_eq!(calc.display(), "16");
    }

    #[test]
    fn test_snapshot() {
        let calc = calc_after("4 × 2 = 3 ÷");
        let snapshot = calc.snapshot();
        assert_eq!(snapshot.display, "3");
        assert_eq!(snapshot.pending_operator.as_deref(), Some("÷"));
        assert_eq!(snapshot.history, vec!["4 × 2 = 8"]);
        assert!(!snapshot.history_visible);
    }
}

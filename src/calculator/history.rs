//! Log of completed binary operations.

use std::fmt;

use serde::Serialize;

use super::number::format_number;
use super::operator::Operator;

/// One completed `left op right = result` calculation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryRecord {
    pub left: f64,
    pub operator: Operator,
    pub right: f64,
    pub result: f64,
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_number(self.left),
            self.operator,
            format_number(self.right),
            format_number(self.result)
        )
    }
}

/// Completed operations in insertion order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Records formatted the way the history panel lists them.
    pub fn lines(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_formatting() {
        let record = HistoryRecord {
            left: 1.0,
            operator: Operator::Add,
            right: 2.0,
            result: 3.0,
        };
        assert_eq!(record.to_string(), "1 + 2 = 3");

        let record = HistoryRecord {
            left: 9.0,
            operator: Operator::Divide,
            right: 0.0,
            result: f64::INFINITY,
        };
        assert_eq!(record.to_string(), "9 ÷ 0 = Infinity");
    }

    #[test]
    fn test_insertion_order_and_clear() {
        let mut history = History::new();
        for (left, right) in [(1.0, 1.0), (2.0, 2.0)] {
            history.push(HistoryRecord {
                left,
                operator: Operator::Multiply,
                right,
                result: left * right,
            });
        }
        assert_eq!(history.lines(), vec!["1 × 1 = 1", "2 × 2 = 4"]);

        history.clear();
        assert!(history.is_empty());
    }
}

//! Classification tallies

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Label;

/// Label counts over a set of classified documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub ham: usize,
    pub spam: usize,
}

impl ClassificationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: Label) {
        match label {
            Label::Ham => self.ham += 1,
            Label::Spam => self.spam += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.ham + self.spam
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HAM COUNT: {}", self.ham)?;
        write!(f, "SPAM COUNT: {}", self.spam)
    }
}

impl Extend<Label> for ClassificationReport {
    fn extend<T: IntoIterator<Item = Label>>(&mut self, iter: T) {
        for label in iter {
            self.record(label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_display() {
        let mut report = ClassificationReport::new();
        report.extend([Label::Ham, Label::Spam, Label::Ham]);

        assert_eq!(report.total(), 3);
        assert_eq!(report.to_string(), "HAM COUNT: 2\nSPAM COUNT: 1");
    }

    #[test]
    fn test_json() {
        let mut report = ClassificationReport::new();
        report.record(Label::Spam);

        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["ham"], 0);
        assert_eq!(value["spam"], 1);
    }
}

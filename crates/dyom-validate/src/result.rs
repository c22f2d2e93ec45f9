//! Validation outcome.

use std::fmt;

use serde::Serialize;

/// Messages produced by validation, grouped by severity.
///
/// Messages carry no severity prefix; [`ValidationResult::render`] adds one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub info: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mission is valid when validation raised no errors. Warnings do
    /// not count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_info(&mut self, message: impl Into<String>) {
        self.info.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Append `other`'s messages after this result's, list by list.
    pub fn merge(&mut self, other: ValidationResult) {
        self.info.extend(other.info);
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }

    pub fn total(&self) -> usize {
        self.info.len() + self.warnings.len() + self.errors.len()
    }

    /// One line per message: info first, then warnings, then errors.
    pub fn render(&self) -> String {
        let info = self.info.iter().map(|message| ("INFO", message));
        let warnings = self.warnings.iter().map(|message| ("WARNING", message));
        let errors = self.errors.iter().map(|message| ("ERROR", message));
        info.chain(warnings)
            .chain(errors)
            .map(|(severity, message)| format!("{severity}: {message}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Extend<ValidationResult> for ValidationResult {
    fn extend<I: IntoIterator<Item = ValidationResult>>(&mut self, iter: I) {
        for result in iter {
            self.merge(result);
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

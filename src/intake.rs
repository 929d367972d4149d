//! Intake form state and validation.
//!
//! `IntakeDraft` mirrors the assessment form as the user fills it in:
//! every field optional, age kept exactly as entered. `submit` performs
//! the required-field validation and produces an immutable `IntakeRecord`
//! for the scorer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::enums::{Gender, SymptomDuration, SymptomSeverity};
use crate::models::intake::{IntakeRecord, MAX_AGE, MIN_AGE};

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Required field missing: {0}")]
    MissingField(&'static str),

    #[error("Field must not be blank: {0}")]
    BlankField(&'static str),

    #[error("Age must be a whole number between {MIN_AGE} and {MAX_AGE}, got \"{0}\"")]
    InvalidAge(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

/// Mutable form state. All fields optional until `submit`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntakeDraft {
    pub name: Option<String>,
    /// Kept as entered; parsed and range-checked on submit.
    pub age: Option<String>,
    pub gender: Option<Gender>,
    pub symptoms: Option<String>,
    pub duration: Option<SymptomDuration>,
    pub severity: Option<SymptomSeverity>,
    pub medical_history: Option<String>,
}

impl IntakeDraft {
    /// Validate the draft into an immutable record.
    ///
    /// Whitespace-only medical history normalizes to absent; every other
    /// field is required and checked here rather than in the scorer.
    pub fn submit(self) -> Result<IntakeRecord, IntakeError> {
        let name = required_text(self.name, "name")?;
        let age_text = self.age.ok_or(IntakeError::MissingField("age"))?;
        let age = parse_age(&age_text)?;
        let gender = self.gender.ok_or(IntakeError::MissingField("gender"))?;
        let symptoms = required_text(self.symptoms, "symptoms")?;
        let duration = self.duration.ok_or(IntakeError::MissingField("duration"))?;
        let severity = self.severity.ok_or(IntakeError::MissingField("severity"))?;

        let medical_history = self
            .medical_history
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty());

        Ok(IntakeRecord {
            name,
            age,
            gender,
            symptoms,
            duration,
            severity,
            medical_history,
        })
    }
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, IntakeError> {
    let value = value.ok_or(IntakeError::MissingField(field))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IntakeError::BlankField(field));
    }
    Ok(trimmed.to_string())
}

fn parse_age(text: &str) -> Result<u8, IntakeError> {
    let age: u8 = text
        .trim()
        .parse()
        .map_err(|_| IntakeError::InvalidAge(text.to_string()))?;
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(IntakeError::InvalidAge(text.to_string()));
    }
    Ok(age)
}

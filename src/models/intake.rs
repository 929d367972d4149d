use serde::{Deserialize, Serialize};

use super::enums::{Gender, SymptomDuration, SymptomSeverity};

/// Age bounds enforced at intake, matching the form's numeric input range.
pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 120;

/// A validated, immutable intake record. One per submission; carries no
/// identity beyond the request/response pair it belongs to.
///
/// Construct via [`crate::intake::IntakeDraft::submit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    /// Free-text symptom description, non-empty.
    pub symptoms: String,
    pub duration: SymptomDuration,
    pub severity: SymptomSeverity,
    /// Normalized to `None` when the user left the field blank.
    pub medical_history: Option<String>,
}

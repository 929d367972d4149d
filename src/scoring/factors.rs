//! Fixed point contributions for each scoring factor.

use serde::{Deserialize, Serialize};

use crate::models::enums::{SymptomDuration, SymptomSeverity};

/// Flat bonus when any medical history is reported.
pub const HISTORY_POINTS: u8 = 5;

/// Bonus when an emergency keyword is present in the symptom text.
pub const EMERGENCY_KEYWORD_POINTS: u8 = 40;

/// Bonus when a high-risk keyword is present and no emergency keyword is.
pub const HIGH_RISK_KEYWORD_POINTS: u8 = 25;

/// Contribution of the patient's age bracket. Elderly and pediatric ages
/// both raise the score; the 18–45 bracket contributes nothing.
pub fn age_points(age: u8) -> u8 {
    if age > 65 {
        20
    } else if age > 45 {
        10
    } else if age < 18 {
        15
    } else {
        0
    }
}

/// Contribution of self-reported severity.
pub fn severity_points(severity: SymptomSeverity) -> u8 {
    match severity {
        SymptomSeverity::Severe => 30,
        SymptomSeverity::Moderate => 20,
        SymptomSeverity::Mild => 10,
    }
}

/// Contribution of symptom duration. A few hours contributes nothing.
pub fn duration_points(duration: SymptomDuration) -> u8 {
    match duration {
        SymptomDuration::Chronic => 15,
        SymptomDuration::Weeks => 10,
        SymptomDuration::Days => 5,
        SymptomDuration::Hours => 0,
    }
}

/// Per-factor contributions for one assessment, before clamping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub age: u8,
    pub severity: u8,
    pub duration: u8,
    pub symptom_keywords: u8,
    pub medical_history: u8,
}

impl ScoreBreakdown {
    /// Sum of all contributions. The maximum possible total is 110, so the
    /// sum fits a u8 without overflow; the engine clamps it to 100.
    pub fn total(&self) -> u8 {
        self.age + self.severity + self.duration + self.symptom_keywords + self.medical_history
    }
}

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Urgency
// ---------------------------------------------------------------------------

/// Score thresholds for urgency bucketing. A score below `MEDIUM_THRESHOLD`
/// is low urgency, and so on up to emergency.
pub const MEDIUM_THRESHOLD: u8 = 20;
pub const HIGH_THRESHOLD: u8 = 40;
pub const EMERGENCY_THRESHOLD: u8 = 60;

/// Urgency determines how strongly the assessment directs the user toward
/// care. Ordering matches the score thresholds that produce it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Emergency,
}

impl Urgency {
    /// Bucket a clamped risk score. Monotone: a higher score never maps to
    /// a lower urgency.
    pub fn from_score(score: u8) -> Self {
        if score < MEDIUM_THRESHOLD {
            Self::Low
        } else if score < HIGH_THRESHOLD {
            Self::Medium
        } else if score < EMERGENCY_THRESHOLD {
            Self::High
        } else {
            Self::Emergency
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Emergency => "emergency",
        }
    }
}

// ---------------------------------------------------------------------------
// AssessmentResult
// ---------------------------------------------------------------------------

/// Maximum number of recommendations surfaced for one assessment.
pub const MAX_RECOMMENDATIONS: usize = 4;

/// Maximum number of possible conditions listed for one assessment.
pub const MAX_CONDITIONS: usize = 3;

/// The derived assessment, immutable once computed. Identical intake input
/// always produces an identical result: no ids, no timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Clamped to [0, 100].
    pub risk_score: u8,
    pub urgency: Urgency,
    /// Non-empty, at most `MAX_RECOMMENDATIONS` entries.
    pub recommendations: Vec<String>,
    pub summary: String,
    /// Best-matching condition names, at most `MAX_CONDITIONS` entries.
    pub possible_conditions: Vec<String>,
    /// Category label of the best-matching condition, or the general label.
    pub disease_category: String,
}

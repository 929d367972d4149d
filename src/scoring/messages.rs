//! Canned patient-facing strings for recommendations and summaries.

use crate::models::assessment::Urgency;

/// Forced top recommendation when an emergency keyword matches.
pub const EMERGENCY_CARE: &str = "Seek immediate emergency care";

/// Recommendation when a high-risk keyword matches.
pub const URGENT_CONSULTATION: &str = "Consider urgent medical consultation";

/// Advisory appended whenever medical history was reported.
pub const HISTORY_ADVISORY: &str = "Inform healthcare provider of your medical history";

/// Shown alongside every assessment.
pub const DISCLAIMER: &str = "This assessment is for informational purposes only and \
     should not replace professional medical advice. Always consult with a healthcare \
     provider for medical concerns.";

/// The two fixed recommendations for the band the total score falls in.
pub fn band_recommendations(urgency: Urgency) -> [&'static str; 2] {
    match urgency {
        Urgency::Low => [
            "Monitor symptoms and rest",
            "Consider over-the-counter remedies if appropriate",
        ],
        Urgency::Medium => [
            "Schedule appointment with primary care physician",
            "Keep track of symptom progression",
        ],
        Urgency::High => [
            "Seek medical attention within 24 hours",
            "Avoid strenuous activity",
        ],
        Urgency::Emergency => [
            "Seek immediate medical attention",
            "Do not drive yourself to medical facility",
        ],
    }
}

/// Summary sentence shown with the result.
pub fn summary(urgency: Urgency, risk_score: u8) -> String {
    format!(
        "Based on your assessment, you have a {} priority health concern with a \
         risk score of {}. This analysis considers your age, symptom severity, \
         duration, and reported symptoms.",
        urgency.as_str(),
        risk_score,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_band_has_two_recommendations() {
        for urgency in [
            Urgency::Low,
            Urgency::Medium,
            Urgency::High,
            Urgency::Emergency,
        ] {
            let recs = band_recommendations(urgency);
            assert!(recs.iter().all(|r| !r.is_empty()));
        }
    }

    #[test]
    fn summary_mentions_urgency_and_score() {
        let text = summary(Urgency::Medium, 35);
        assert!(text.contains("medium priority"));
        assert!(text.contains("risk score of 35"));
    }
}

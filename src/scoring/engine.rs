//! Assembly of the assessment result from the factor tables.

use crate::classifier::TextClassifier;
use crate::models::assessment::{
    AssessmentResult, Urgency, MAX_CONDITIONS, MAX_RECOMMENDATIONS,
};
use crate::models::intake::IntakeRecord;

use super::conditions::{match_conditions, GENERAL_CATEGORY};
use super::factors::{
    age_points, duration_points, severity_points, ScoreBreakdown, EMERGENCY_KEYWORD_POINTS,
    HIGH_RISK_KEYWORD_POINTS, HISTORY_POINTS,
};
use super::keywords::{scan_symptoms, KeywordMatch};
use super::messages;

/// Per-factor contributions for a record, before clamping.
pub fn score_breakdown(record: &IntakeRecord) -> ScoreBreakdown {
    let symptom_keywords = match scan_symptoms(&record.symptoms) {
        KeywordMatch::Emergency => EMERGENCY_KEYWORD_POINTS,
        KeywordMatch::HighRisk => HIGH_RISK_KEYWORD_POINTS,
        KeywordMatch::None => 0,
    };

    ScoreBreakdown {
        age: age_points(record.age),
        severity: severity_points(record.severity),
        duration: duration_points(record.duration),
        symptom_keywords,
        medical_history: if record.medical_history.is_some() {
            HISTORY_POINTS
        } else {
            0
        },
    }
}

/// Score a validated intake record.
///
/// Pure and deterministic: identical input yields an identical result, and
/// there is no failure mode — every valid record produces an assessment.
pub fn score_intake(record: &IntakeRecord) -> AssessmentResult {
    let breakdown = score_breakdown(record);
    let mut recommendations: Vec<String> = Vec::new();

    match scan_symptoms(&record.symptoms) {
        KeywordMatch::Emergency => recommendations.push(messages::EMERGENCY_CARE.to_string()),
        KeywordMatch::HighRisk => recommendations.push(messages::URGENT_CONSULTATION.to_string()),
        KeywordMatch::None => {}
    }

    if record.medical_history.is_some() {
        recommendations.push(messages::HISTORY_ADVISORY.to_string());
    }

    let risk_score = breakdown.total().min(100);
    let urgency = Urgency::from_score(risk_score);

    for recommendation in messages::band_recommendations(urgency) {
        recommendations.push(recommendation.to_string());
    }
    recommendations.truncate(MAX_RECOMMENDATIONS);

    let condition_matches = match_conditions(&record.symptoms);
    let disease_category = condition_matches
        .first()
        .map(|m| m.category.clone())
        .unwrap_or_else(|| GENERAL_CATEGORY.to_string());
    let possible_conditions: Vec<String> = condition_matches
        .into_iter()
        .take(MAX_CONDITIONS)
        .map(|m| m.name)
        .collect();

    if urgency == Urgency::Emergency {
        tracing::warn!(risk_score, "assessment reached emergency urgency");
    }

    AssessmentResult {
        risk_score,
        urgency,
        recommendations,
        summary: messages::summary(urgency, risk_score),
        possible_conditions,
        disease_category,
    }
}

/// Rule-based assessment engine with an optional corroborating classifier.
///
/// The classifier never contributes to the returned result; its verdict is
/// logged, and absence or failure never blocks scoring.
pub struct AssessmentEngine {
    classifier: Option<Box<dyn TextClassifier>>,
}

impl AssessmentEngine {
    pub fn new() -> Self {
        Self { classifier: None }
    }

    pub fn with_classifier(classifier: Box<dyn TextClassifier>) -> Self {
        Self {
            classifier: Some(classifier),
        }
    }

    pub fn assess(&self, record: &IntakeRecord) -> AssessmentResult {
        let result = score_intake(record);

        if let Some(classifier) = &self.classifier {
            match classifier.classify(&record.symptoms) {
                Ok(verdict) => tracing::debug!(
                    label = %verdict.label,
                    confidence = verdict.confidence,
                    rule_category = %result.disease_category,
                    "classifier corroboration"
                ),
                Err(e) => {
                    tracing::warn!("Classifier unavailable, continuing rule-based: {e}");
                }
            }
        }

        result
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{Classification, ClassifierError, KeywordClassifier};
    use crate::models::enums::{Gender, SymptomDuration, SymptomSeverity};

    fn record(
        age: u8,
        severity: SymptomSeverity,
        duration: SymptomDuration,
        symptoms: &str,
        medical_history: Option<&str>,
    ) -> IntakeRecord {
        IntakeRecord {
            name: "Alex Moreau".into(),
            age,
            gender: Gender::PreferNotToSay,
            symptoms: symptoms.into(),
            duration,
            severity,
            medical_history: medical_history.map(String::from),
        }
    }

    #[test]
    fn emergency_cofactors_clamp_to_100() {
        let result = score_intake(&record(
            70,
            SymptomSeverity::Severe,
            SymptomDuration::Chronic,
            "chest pain",
            None,
        ));
        // 20 + 30 + 15 + 40 = 105, clamped.
        assert_eq!(result.risk_score, 100);
        assert_eq!(result.urgency, Urgency::Emergency);
        assert_eq!(result.recommendations[0], messages::EMERGENCY_CARE);
    }

    #[test]
    fn benign_intake_scores_low() {
        let result = score_intake(&record(
            25,
            SymptomSeverity::Mild,
            SymptomDuration::Hours,
            "runny nose",
            None,
        ));
        assert_eq!(result.risk_score, 10);
        assert_eq!(result.urgency, Urgency::Low);
    }

    #[test]
    fn score_always_in_range() {
        let severities = [
            SymptomSeverity::Mild,
            SymptomSeverity::Moderate,
            SymptomSeverity::Severe,
        ];
        let durations = [
            SymptomDuration::Hours,
            SymptomDuration::Days,
            SymptomDuration::Weeks,
            SymptomDuration::Chronic,
        ];
        let symptom_texts = ["runny nose", "fever", "chest pain and fever"];
        for age in [1, 17, 18, 45, 46, 65, 66, 120] {
            for severity in severities {
                for duration in durations {
                    for symptoms in symptom_texts {
                        for history in [None, Some("diabetes")] {
                            let result = score_intake(&record(
                                age, severity, duration, symptoms, history,
                            ));
                            assert!(result.risk_score <= 100);
                            assert!(!result.recommendations.is_empty());
                            assert!(result.recommendations.len() <= MAX_RECOMMENDATIONS);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn history_bonus_and_advisory_always_present() {
        let without = score_intake(&record(
            30,
            SymptomSeverity::Mild,
            SymptomDuration::Days,
            "itching",
            None,
        ));
        let with = score_intake(&record(
            30,
            SymptomSeverity::Mild,
            SymptomDuration::Days,
            "itching",
            Some("hypertension"),
        ));
        assert_eq!(with.risk_score, without.risk_score + 5);
        assert!(with
            .recommendations
            .iter()
            .any(|r| r == messages::HISTORY_ADVISORY));
        assert!(!without
            .recommendations
            .iter()
            .any(|r| r == messages::HISTORY_ADVISORY));
    }

    #[test]
    fn recommendations_truncated_at_cap() {
        // Emergency keyword + history + two band strings = 4 exactly;
        // nothing beyond the cap survives.
        let result = score_intake(&record(
            70,
            SymptomSeverity::Severe,
            SymptomDuration::Chronic,
            "chest pain",
            Some("prior infarction"),
        ));
        assert_eq!(result.recommendations.len(), MAX_RECOMMENDATIONS);
        assert_eq!(result.recommendations[0], messages::EMERGENCY_CARE);
        assert_eq!(result.recommendations[1], messages::HISTORY_ADVISORY);
    }

    #[test]
    fn scorer_is_idempotent() {
        let input = record(
            52,
            SymptomSeverity::Moderate,
            SymptomDuration::Weeks,
            "fever and fatigue",
            Some("asthma"),
        );
        assert_eq!(score_intake(&input), score_intake(&input));
    }

    #[test]
    fn summary_reflects_computed_values() {
        let result = score_intake(&record(
            50,
            SymptomSeverity::Moderate,
            SymptomDuration::Weeks,
            "persistent cough",
            None,
        ));
        assert!(result
            .summary
            .contains(&format!("risk score of {}", result.risk_score)));
        assert!(result.summary.contains(result.urgency.as_str()));
    }

    #[test]
    fn condition_outputs_populated_for_known_symptoms() {
        let result = score_intake(&record(
            30,
            SymptomSeverity::Mild,
            SymptomDuration::Days,
            "runny nose and sneezing",
            None,
        ));
        assert_eq!(result.disease_category, "Respiratory");
        assert_eq!(result.possible_conditions[0], "Common Cold");
        assert!(result.possible_conditions.len() <= MAX_CONDITIONS);
    }

    #[test]
    fn unknown_symptoms_fall_back_to_general() {
        let result = score_intake(&record(
            30,
            SymptomSeverity::Mild,
            SymptomDuration::Days,
            "stubbed my toe",
            None,
        ));
        assert_eq!(result.disease_category, GENERAL_CATEGORY);
        assert!(result.possible_conditions.is_empty());
    }

    #[test]
    fn engine_matches_bare_scorer() {
        let input = record(
            40,
            SymptomSeverity::Moderate,
            SymptomDuration::Days,
            "headache and nausea",
            None,
        );
        let engine = AssessmentEngine::new();
        assert_eq!(engine.assess(&input), score_intake(&input));
    }

    #[test]
    fn engine_with_keyword_classifier_matches_bare_scorer() {
        let input = record(
            40,
            SymptomSeverity::Moderate,
            SymptomDuration::Days,
            "headache and nausea",
            None,
        );
        let engine = AssessmentEngine::with_classifier(Box::new(KeywordClassifier));
        assert_eq!(engine.assess(&input), score_intake(&input));
    }

    struct FailingClassifier;

    impl TextClassifier for FailingClassifier {
        fn classify(&self, _text: &str) -> Result<Classification, ClassifierError> {
            Err(ClassifierError::ModelInit("model missing".into()))
        }
    }

    #[test]
    fn classifier_failure_never_blocks_a_result() {
        let input = record(
            40,
            SymptomSeverity::Moderate,
            SymptomDuration::Days,
            "headache and nausea",
            None,
        );
        let engine = AssessmentEngine::with_classifier(Box::new(FailingClassifier));
        assert_eq!(engine.assess(&input), score_intake(&input));
    }
}

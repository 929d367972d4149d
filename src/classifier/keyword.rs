use super::{Classification, ClassifierError, TextClassifier};
use crate::scoring::conditions::{match_conditions, GENERAL_CATEGORY};

/// Rule-based classifier over the static condition table.
/// Deterministic, in-process, and always available.
pub struct KeywordClassifier;

impl TextClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        let matches = match_conditions(text);

        Ok(match matches.first() {
            Some(best) => Classification {
                label: best.category.clone(),
                confidence: best.matched_fraction.min(1.0),
            },
            None => Classification {
                label: GENERAL_CATEGORY.to_string(),
                confidence: 0.0,
            },
        })
    }
}

//! Static condition reference table and keyword matcher.
//!
//! The table is declaration-ordered: when two conditions tie on hit count
//! and matched fraction, the earlier declaration wins.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A named condition with its category label and indicative keywords.
pub struct Condition {
    pub name: &'static str,
    pub category: &'static str,
    pub keywords: &'static [&'static str],
}

/// Category label reported when no condition matches.
pub const GENERAL_CATEGORY: &str = "General";

pub static CONDITIONS: &[Condition] = &[
    Condition {
        name: "Common Cold",
        category: "Respiratory",
        keywords: &["runny nose", "sneezing", "sore throat", "congestion", "cough"],
    },
    Condition {
        name: "Influenza",
        category: "Respiratory",
        keywords: &["fever", "chills", "body aches", "fatigue", "cough"],
    },
    Condition {
        name: "Migraine",
        category: "Neurological",
        keywords: &["headache", "nausea", "light sensitivity", "throbbing", "aura"],
    },
    Condition {
        name: "Gastroenteritis",
        category: "Digestive",
        keywords: &["nausea", "vomiting", "diarrhea", "stomach pain", "cramps"],
    },
    Condition {
        name: "Acute Coronary Syndrome",
        category: "Cardiovascular",
        keywords: &["chest pain", "shortness of breath", "arm pain", "sweating", "palpitations"],
    },
    Condition {
        name: "Asthma Flare",
        category: "Respiratory",
        keywords: &["wheezing", "difficulty breathing", "chest tightness", "shortness of breath"],
    },
    Condition {
        name: "Urinary Tract Infection",
        category: "Urological",
        keywords: &["burning urination", "frequent urination", "pelvic pain", "cloudy urine"],
    },
    Condition {
        name: "Allergic Reaction",
        category: "Immunological",
        keywords: &["rash", "itching", "hives", "swelling"],
    },
];

/// A ranked match against the condition table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionMatch {
    pub name: String,
    pub category: String,
    pub matched_keywords: usize,
    /// Fraction of this condition's keywords found in the text, in [0, 1].
    pub matched_fraction: f32,
}

/// Rank conditions against symptom text, best match first.
///
/// Ordering: hit count desc, matched fraction desc, declaration order asc.
/// Conditions with zero hits are omitted.
pub fn match_conditions(symptoms: &str) -> Vec<ConditionMatch> {
    let lower = symptoms.to_lowercase();

    let mut matches: Vec<(usize, ConditionMatch)> = Vec::new();
    for (index, condition) in CONDITIONS.iter().enumerate() {
        let hits = condition
            .keywords
            .iter()
            .filter(|kw| lower.contains(*kw))
            .count();
        if hits == 0 {
            continue;
        }
        matches.push((
            index,
            ConditionMatch {
                name: condition.name.to_string(),
                category: condition.category.to_string(),
                matched_keywords: hits,
                matched_fraction: hits as f32 / condition.keywords.len() as f32,
            },
        ));
    }

    matches.sort_by(|(index_a, a), (index_b, b)| {
        b.matched_keywords
            .cmp(&a.matched_keywords)
            .then_with(|| {
                b.matched_fraction
                    .partial_cmp(&a.matched_fraction)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| index_a.cmp(index_b))
    });

    matches.into_iter().map(|(_, m)| m).collect()
}

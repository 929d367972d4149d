//! Rule-based risk scoring.
//!
//! A deterministic, additive point system over a validated intake record:
//! fixed contributions for age bracket, severity, and duration, keyword
//! bonuses from the symptom text, and a flat medical-history bonus, clamped
//! to 100 and bucketed into an urgency level. No I/O, no hidden state.

pub mod conditions;
pub mod engine;
pub mod factors;
pub mod keywords;
pub mod messages;

pub use engine::{score_breakdown, score_intake, AssessmentEngine};
pub use factors::ScoreBreakdown;

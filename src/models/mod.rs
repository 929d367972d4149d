pub mod assessment;
pub mod enums;
pub mod intake;

pub use assessment::{AssessmentResult, Urgency};
pub use enums::{Gender, SymptomDuration, SymptomSeverity};
pub use intake::IntakeRecord;

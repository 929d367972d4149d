use crate::intake::IntakeError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = IntakeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(IntakeError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
    PreferNotToSay => "prefer-not-to-say",
});

str_enum!(SymptomDuration {
    Hours => "hours",
    Days => "days",
    Weeks => "weeks",
    Chronic => "chronic",
});

str_enum!(SymptomSeverity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn gender_round_trips_through_str() {
        for value in ["male", "female", "other", "prefer-not-to-say"] {
            let parsed = Gender::from_str(value).unwrap();
            assert_eq!(parsed.as_str(), value);
        }
    }

    #[test]
    fn duration_rejects_unknown_value() {
        let err = SymptomDuration::from_str("months").unwrap_err();
        assert!(matches!(err, IntakeError::InvalidEnum { .. }));
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&SymptomSeverity::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
    }

    #[test]
    fn gender_prefer_not_to_say_kebab_case() {
        let json = serde_json::to_string(&Gender::PreferNotToSay).unwrap();
        assert_eq!(json, "\"prefer-not-to-say\"");
    }
}

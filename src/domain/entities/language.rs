use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// CEFR-style proficiency code: A1/A2, B1/B2, C1/C2.
static CEFR_LEVEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-C][1-2]$").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Language {
    #[validate(length(min = 2, max = 50, message = "Language name must be 2-50 characters"))]
    pub name: String,

    #[validate(regex(path = *CEFR_LEVEL_RE, message = "Language level must be a CEFR code (e.g. A1, B2, C1)"))]
    pub level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cefr_codes_pass() {
        for level in ["A1", "A2", "B1", "B2", "C1", "C2"] {
            let lang = Language { name: "Spanish".into(), level: level.into() };
            assert!(lang.validate().is_ok(), "expected {} to be accepted", level);
        }
    }

    #[test]
    fn out_of_scale_codes_are_rejected() {
        for level in ["D1", "A3", "native", "b2"] {
            let lang = Language { name: "Spanish".into(), level: level.into() };
            assert!(lang.validate().is_err(), "expected {} to be rejected", level);
        }
    }
}

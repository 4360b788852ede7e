use serde::{Deserialize, Serialize};
use validator::Validate;

use super::YEAR_MONTH_RE;

/// One employment record, embedded by value in a profile document.
///
/// Chronological ordering of start/end dates is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Experience {
    #[validate(length(min = 2, max = 100, message = "Company must be 2-100 characters"))]
    pub company: String,

    #[validate(length(min = 2, max = 100, message = "Position must be 2-100 characters"))]
    pub position: String,

    #[validate(regex(path = *YEAR_MONTH_RE, message = "Start date must use the YYYY-MM format"))]
    pub start_date: String,

    /// Absent means the position is currently held.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *YEAR_MONTH_RE, message = "End date must use the YYYY-MM format"))]
    pub end_date: Option<String>,

    #[validate(length(min = 10, max = 500, message = "Description must be 10-500 characters"))]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_experience() -> Experience {
        Experience {
            company: "Acme Corp".into(),
            position: "Backend Engineer".into(),
            start_date: "2021-03".into(),
            end_date: Some("2023-06".into()),
            description: "Built and operated the billing pipeline.".into(),
        }
    }

    #[test]
    fn valid_experience_passes() {
        assert!(sample_experience().validate().is_ok());
    }

    #[test]
    fn open_ended_experience_passes() {
        let mut exp = sample_experience();
        exp.end_date = None;
        assert!(exp.validate().is_ok());
    }

    #[test]
    fn malformed_start_date_is_rejected() {
        let mut exp = sample_experience();
        exp.start_date = "March 2021".into();
        assert!(exp.validate().is_err());
    }

    #[test]
    fn short_description_is_rejected() {
        let mut exp = sample_experience();
        exp.description = "Too short".into();
        assert!(exp.validate().is_err());
    }
}

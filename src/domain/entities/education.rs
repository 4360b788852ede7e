use serde::{Deserialize, Serialize};
use validator::Validate;

use super::YEAR_MONTH_RE;

/// One academic record, embedded by value in a profile document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Education {
    #[validate(length(min = 2, max = 100, message = "Institution must be 2-100 characters"))]
    pub institution: String,

    #[validate(length(min = 2, max = 100, message = "Degree must be 2-100 characters"))]
    pub degree: String,

    #[validate(length(min = 2, max = 100, message = "Field of study must be 2-100 characters"))]
    pub field: String,

    #[validate(regex(path = *YEAR_MONTH_RE, message = "Start date must use the YYYY-MM format"))]
    pub start_date: String,

    #[validate(regex(path = *YEAR_MONTH_RE, message = "End date must use the YYYY-MM format"))]
    pub end_date: String,
}

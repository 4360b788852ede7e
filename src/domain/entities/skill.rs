use serde::{Deserialize, Serialize};
use validator::Validate;

/// A technical or soft skill with a free-text proficiency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Skill {
    #[validate(length(min = 2, max = 50, message = "Skill name must be 2-50 characters"))]
    pub name: String,

    #[validate(length(min = 2, max = 50, message = "Skill level must be 2-50 characters"))]
    pub level: String,
}

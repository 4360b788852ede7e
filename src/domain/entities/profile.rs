use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;
use validator::Validate;

use super::{education::Education, experience::Experience, language::Language, skill::Skill};

/// International phone number, optional leading `+`, 10-15 digits.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").unwrap());

// ───── Incoming payload ─────────────────────────────────────────────

/// A full CV profile as submitted by the client. The nested collections
/// are owned by value, so they live and die with the parent document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(regex(path = *PHONE_RE, message = "Phone must be 10-15 digits with an optional leading +"))]
    pub phone: String,

    #[validate(length(min = 2, max = 100, message = "Location must be 2-100 characters"))]
    pub location: String,

    #[validate(length(min = 50, max = 500, message = "Summary must be 50-500 characters"))]
    pub summary: String,

    #[serde(default)]
    #[validate(nested)]
    pub experiences: Vec<Experience>,

    #[serde(default)]
    #[validate(nested)]
    pub education: Vec<Education>,

    #[serde(default)]
    #[validate(nested)]
    pub skills: Vec<Skill>,

    #[serde(default)]
    #[validate(nested)]
    pub languages: Vec<Language>,
}

// ───── Database models ──────────────────────────────────────────────

/// Row shape for a fresh insert. The id is application-generated.
#[derive(Debug)]
pub struct ProfileInsert {
    pub id: Uuid,
    pub document: JsonValue,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A profile as read back from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredProfile {
    pub id: Uuid,

    #[serde(flatten)]
    pub profile: Profile,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn prepare_for_insert(&self) -> Result<ProfileInsert, serde_json::Error> {
        let now = Utc::now();
        Ok(ProfileInsert {
            id: Uuid::new_v4(),
            document: serde_json::to_value(self)?,
            created_at: now,
            updated_at: now,
        })
    }
}

// ───── Partial update ───────────────────────────────────────────────

/// Sparse update payload. Fields left out of the request body stay
/// `None` and are never written to the stored document.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *PHONE_RE, message = "Phone must be 10-15 digits with an optional leading +"))]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 100, message = "Location must be 2-100 characters"))]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 50, max = 500, message = "Summary must be 50-500 characters"))]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub experiences: Option<Vec<Experience>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub education: Option<Vec<Education>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub skills: Option<Vec<Skill>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub languages: Option<Vec<Language>>,
}

impl ProfileUpdate {
    /// True when the payload carried no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.location.is_none()
            && self.summary.is_none()
            && self.experiences.is_none()
            && self.education.is_none()
            && self.skills.is_none()
            && self.languages.is_none()
    }

    /// Patch document holding only the supplied fields, ready for a
    /// shallow merge into the stored document.
    pub fn to_patch_document(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self)
    }
}

// ───── API response models ──────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileCreatedResponse {
    pub id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

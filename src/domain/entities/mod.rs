pub mod education;
pub mod experience;
pub mod language;
pub mod profile;
pub mod skill;

use once_cell::sync::Lazy;
use regex::Regex;

/// `YYYY-MM` month stamps shared by experience and education entries.
pub(crate) static YEAR_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}$").unwrap());

use ammonia::clean_text;

use crate::entities::{education::Education, experience::Experience, profile::Profile};
use super::RenderError;

/// Page shell with named placeholders. Every interpolated profile value
/// is HTML-escaped before substitution.
const CV_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>CV - {name}</title>
<style>
  body { font-family: Helvetica, Arial, sans-serif; margin: 2rem auto; max-width: 50rem; color: #222; }
  header { text-align: center; border-bottom: 2px solid #444; margin-bottom: 1.5rem; }
  h1 { margin-bottom: 0.25rem; }
  .contact { color: #555; }
  section { margin-bottom: 1.5rem; }
  h2 { border-bottom: 1px solid #ccc; padding-bottom: 0.25rem; }
  .entry { margin-bottom: 1rem; }
  .entry h3 { margin: 0 0 0.25rem 0; }
  .dates { color: #777; margin: 0 0 0.5rem 0; }
</style>
</head>
<body>
<header>
  <h1>{name}</h1>
  <p class="contact">{email} | {phone} | {location}</p>
</header>
<section>
  <h2>Professional Summary</h2>
  <p>{summary}</p>
</section>
<section>
  <h2>Work Experience</h2>
{experiences}
</section>
<section>
  <h2>Education</h2>
{education}
</section>
<section>
  <h2>Skills</h2>
  <p>{skills}</p>
</section>
<section>
  <h2>Languages</h2>
  <p>{languages}</p>
</section>
</body>
</html>
"#;

/// Renders a profile into the fixed CV page template.
pub fn render_cv_page(profile: &Profile) -> Result<String, RenderError> {
    if profile.name.trim().is_empty() {
        return Err(RenderError::MissingField("name"));
    }
    if profile.email.trim().is_empty() {
        return Err(RenderError::MissingField("email"));
    }

    let experiences = profile
        .experiences
        .iter()
        .map(format_experience)
        .collect::<Vec<_>>()
        .join("\n");

    let education = profile
        .education
        .iter()
        .map(format_education)
        .collect::<Vec<_>>()
        .join("\n");

    let skills = profile
        .skills
        .iter()
        .map(|s| format!("{} ({})", clean_text(&s.name), clean_text(&s.level)))
        .collect::<Vec<_>>()
        .join(", ");

    let languages = profile
        .languages
        .iter()
        .map(|l| format!("{} ({})", clean_text(&l.name), clean_text(&l.level)))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(CV_TEMPLATE
        .replace("{name}", &clean_text(&profile.name))
        .replace("{email}", &clean_text(&profile.email))
        .replace("{phone}", &clean_text(&profile.phone))
        .replace("{location}", &clean_text(&profile.location))
        .replace("{summary}", &clean_text(&profile.summary))
        .replace("{experiences}", &experiences)
        .replace("{education}", &education)
        .replace("{skills}", &skills)
        .replace("{languages}", &languages))
}

fn format_experience(exp: &Experience) -> String {
    let end_date = exp.end_date.as_deref().unwrap_or("Present");
    format!(
        "  <div class=\"entry\">\n    \
         <h3>{} - {}</h3>\n    \
         <p class=\"dates\">{} - {}</p>\n    \
         <p>{}</p>\n  </div>",
        clean_text(&exp.position),
        clean_text(&exp.company),
        clean_text(&exp.start_date),
        clean_text(end_date),
        clean_text(&exp.description),
    )
}

fn format_education(edu: &Education) -> String {
    format!(
        "  <div class=\"entry\">\n    \
         <h3>{} in {}</h3>\n    \
         <p>{}</p>\n    \
         <p class=\"dates\">{} - {}</p>\n  </div>",
        clean_text(&edu.degree),
        clean_text(&edu.field),
        clean_text(&edu.institution),
        clean_text(&edu.start_date),
        clean_text(&edu.end_date),
    )
}

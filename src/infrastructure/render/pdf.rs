use std::io::BufWriter;

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};
use slug::slugify;

use crate::entities::profile::Profile;
use super::RenderError;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 20.0;
const TOP_Y: f32 = 280.0;
const BOTTOM_Y: f32 = 20.0;
const WRAP_CHARS: usize = 90;

/// An in-memory PDF ready to be streamed as a download.
pub struct PdfDownload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Descending text cursor over an A4 page. Crossing the bottom margin
/// starts a fresh page and resets the cursor to the top.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> PageWriter<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        PageWriter { doc, layer, y: TOP_Y }
    }

    fn line(&mut self, text: &str, size: f32, font: &IndirectFontRef, step: f32) {
        self.break_page_if_needed();
        self.layer.use_text(text, size, Mm(MARGIN_LEFT), Mm(self.y), font);
        self.y -= step;
    }

    /// Word-wraps the text against the page width before writing.
    fn paragraph(&mut self, text: &str, size: f32, font: &IndirectFontRef, step: f32) {
        for wrapped in wrap_text(text, WRAP_CHARS) {
            self.line(&wrapped, size, font, step);
        }
    }

    fn centered(&mut self, text: &str, size: f32, font: &IndirectFontRef, step: f32) {
        self.break_page_if_needed();
        // Approximate Helvetica advance of ~0.5em per character, in mm.
        let text_width = text.chars().count() as f32 * size * 0.5 * 0.3528;
        let x = ((PAGE_WIDTH - text_width) / 2.0).max(MARGIN_LEFT);
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
        self.y -= step;
    }

    fn gap(&mut self, step: f32) {
        self.y -= step;
    }

    fn break_page_if_needed(&mut self) {
        if self.y < BOTTOM_Y {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_Y;
        }
    }
}

/// Lays out the profile as a paginated PDF, entirely in memory.
/// Section order is fixed: summary, experience, education, skills, languages.
pub fn render_cv_pdf(profile: &Profile) -> Result<PdfDownload, RenderError> {
    if profile.name.trim().is_empty() {
        return Err(RenderError::MissingField("name"));
    }
    if profile.email.trim().is_empty() {
        return Err(RenderError::MissingField("email"));
    }

    let (doc, page, layer) = PdfDocument::new(
        format!("CV - {}", profile.name),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(format!("font error: {}", e)))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Pdf(format!("font error: {}", e)))?;

    let mut writer = PageWriter::new(&doc, doc.get_page(page).get_layer(layer));

    // Header
    writer.centered(&profile.name, 16.0, &bold, 8.0);
    writer.line(&format!("Email: {}", profile.email), 11.0, &font, 5.5);
    writer.line(&format!("Phone: {}", profile.phone), 11.0, &font, 5.5);
    writer.line(&format!("Location: {}", profile.location), 11.0, &font, 5.5);
    writer.gap(6.0);

    // Summary
    writer.line("Professional Summary", 13.0, &bold, 7.0);
    writer.paragraph(&profile.summary, 10.0, &font, 5.0);
    writer.gap(6.0);

    // Experience
    writer.line("Work Experience", 13.0, &bold, 7.0);
    for exp in &profile.experiences {
        let end_date = exp.end_date.as_deref().unwrap_or("Present");
        writer.line(&format!("{} - {}", exp.position, exp.company), 11.0, &bold, 5.5);
        writer.line(&format!("{} - {}", exp.start_date, end_date), 10.0, &font, 5.0);
        writer.paragraph(&exp.description, 10.0, &font, 5.0);
        writer.gap(3.0);
    }
    writer.gap(3.0);

    // Education
    writer.line("Education", 13.0, &bold, 7.0);
    for edu in &profile.education {
        writer.line(&format!("{} in {}", edu.degree, edu.field), 11.0, &bold, 5.5);
        writer.line(&edu.institution, 10.0, &font, 5.0);
        writer.line(&format!("{} - {}", edu.start_date, edu.end_date), 10.0, &font, 5.0);
        writer.gap(3.0);
    }
    writer.gap(3.0);

    // Skills
    writer.line("Skills", 13.0, &bold, 7.0);
    let skills = profile
        .skills
        .iter()
        .map(|s| format!("{} ({})", s.name, s.level))
        .collect::<Vec<_>>()
        .join(", ");
    writer.paragraph(&skills, 10.0, &font, 5.0);
    writer.gap(6.0);

    // Languages
    writer.line("Languages", 13.0, &bold, 7.0);
    let languages = profile
        .languages
        .iter()
        .map(|l| format!("{} ({})", l.name, l.level))
        .collect::<Vec<_>>()
        .join(", ");
    writer.paragraph(&languages, 10.0, &font, 5.0);

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let bytes = buf
        .into_inner()
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    Ok(PdfDownload {
        filename: format!("cv_{}.pdf", slugify(&profile.name)),
        bytes,
    })
}

/// Greedy word wrap against a character budget. Always returns at least
/// one line so empty sections still advance the cursor.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.len()
        } else {
            current.len() + word.len() + 1
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    lines.push(current);
    lines
}

pub mod html;
pub mod pdf;

use derive_more::Display;

use crate::errors::AppError;

/// Errors raised while turning a stored profile into HTML or PDF output.
#[derive(Debug, Display)]
pub enum RenderError {
    #[display("Missing required field: {_0}")]
    MissingField(&'static str),

    #[display("PDF generation failed: {_0}")]
    Pdf(String),
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::RenderError(err.to_string())
    }
}

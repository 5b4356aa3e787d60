// file: src/extractor/mod.rs
// description: plain-text extraction from uploaded documents, dispatched on filename suffix
// reference: internal module structure

pub mod docx;
pub mod image;
pub mod pdf;

use crate::error::{Result, ServiceError};

/// Extracts plain text from uploaded bytes based on the declared filename.
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract text, dispatching on the filename suffix.
    ///
    /// Image extensions are matched case-insensitively; `.pdf` and `.docx`
    /// are matched case-sensitively, so `REPORT.PDF` falls through to the
    /// plain-text branch. This mirrors the behavior the frontend depends on.
    /// The result is trimmed of leading and trailing whitespace.
    pub fn try_extract(&self, filename: &str, bytes: &[u8]) -> Result<String> {
        let lower = filename.to_lowercase();

        let text = if lower.ends_with(".png") || lower.ends_with(".jpg") || lower.ends_with(".jpeg")
        {
            // OCR is best-effort by policy: failures yield empty text, never an error.
            image::extract(bytes)
        } else if filename.ends_with(".pdf") {
            pdf::extract(bytes).map_err(|e| ServiceError::extraction(filename, e))?
        } else if filename.ends_with(".docx") {
            docx::extract(bytes).map_err(|e| ServiceError::extraction(filename, e))?
        } else {
            String::from_utf8(bytes.to_vec())
                .map_err(|e| ServiceError::extraction(filename, format!("not valid UTF-8: {e}")))?
        };

        Ok(text.trim().to_string())
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_passthrough_trimmed() {
        let extractor = TextExtractor::new();
        let text = extractor
            .try_extract("notes.txt", b"  hello world\n")
            .unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn test_unknown_extension_treated_as_text() {
        let extractor = TextExtractor::new();
        let text = extractor.try_extract("data.csv", b"a,b,c").unwrap();
        assert_eq!(text, "a,b,c");
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let extractor = TextExtractor::new();
        let err = extractor.try_extract("blob.bin", &[0xff, 0xfe, 0x00]);
        assert!(err.is_err());
    }

    #[test]
    fn test_uppercase_pdf_falls_through_to_text_branch() {
        // The pdf branch matches case-sensitively; uppercase suffixes are
        // decoded as UTF-8 instead of parsed as PDF.
        let extractor = TextExtractor::new();
        let text = extractor
            .try_extract("REPORT.PDF", b"plain bytes, not a pdf")
            .unwrap();
        assert_eq!(text, "plain bytes, not a pdf");
    }

    #[test]
    fn test_uppercase_image_extension_still_runs_ocr_branch() {
        // Garbage bytes through the OCR branch degrade to empty, not an error.
        let extractor = TextExtractor::new();
        let text = extractor.try_extract("SCAN.PNG", b"not an image").unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_invalid_pdf_is_an_error() {
        let extractor = TextExtractor::new();
        let err = extractor.try_extract("broken.pdf", b"not a real pdf");
        assert!(err.is_err());
    }
}

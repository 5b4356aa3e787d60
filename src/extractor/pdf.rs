// file: src/extractor/pdf.rs
// description: PDF text extraction from in-memory bytes
// reference: https://docs.rs/pdf-extract

/// Extract the text layer of a PDF.
///
/// Pages are concatenated in order; scanned pages with no text layer
/// contribute nothing. Parse failures surface as an error message for the
/// caller to coerce.
pub fn extract(bytes: &[u8]) -> Result<String, String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bytes_report_an_error() {
        assert!(extract(b"not a real PDF file").is_err());
    }
}

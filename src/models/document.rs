// file: src/models/document.rs
// description: request-scoped uploaded document model
// reference: internal data structures

/// A file received with a request: declared filename plus raw bytes.
/// Lives only for the duration of the request that carried it.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub fn from_text(filename: impl Into<String>, text: &str) -> Self {
        Self::new(filename, text.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_text_round_trips_bytes() {
        let doc = UploadedDocument::from_text("essay.txt", "some content");
        assert_eq!(doc.filename, "essay.txt");
        assert_eq!(doc.bytes, b"some content".to_vec());
    }
}

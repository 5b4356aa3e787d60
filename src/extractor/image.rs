// file: src/extractor/image.rs
// description: best-effort OCR via the tesseract binary
// reference: https://github.com/tesseract-ocr/tesseract

use std::io::Write;
use std::process::Command;
use tracing::debug;

/// Run OCR on image bytes.
///
/// Every failure mode (missing binary, unwritable temp file, corrupt image,
/// non-zero exit) yields an empty string. OCR is strictly best-effort and
/// never surfaces an error to the caller.
pub fn extract(bytes: &[u8]) -> String {
    match ocr(bytes) {
        Some(text) => text,
        None => {
            debug!("OCR produced no text");
            String::new()
        }
    }
}

fn ocr(bytes: &[u8]) -> Option<String> {
    let mut tmp = tempfile::Builder::new()
        .prefix("docsim-ocr-")
        .suffix(".img")
        .tempfile()
        .ok()?;
    tmp.write_all(bytes).ok()?;

    let output = Command::new("tesseract")
        .arg(tmp.path())
        .arg("stdout")
        .output()
        .ok()?;

    if !output.status.success() {
        debug!("tesseract exited with {}", output.status);
        return None;
    }

    Some(String::from_utf8_lossy(&output.stdout).to_string())
}

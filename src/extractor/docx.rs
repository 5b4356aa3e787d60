// file: src/extractor/docx.rs
// description: Word document paragraph extraction via the OOXML zip container
// reference: ECMA-376 WordprocessingML

use quick_xml::events::Event;
use quick_xml::Reader as XmlReader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Extract paragraph text from a `.docx` file.
///
/// Reads `word/document.xml` out of the zip container and concatenates the
/// text of each `w:p` paragraph with a trailing newline.
pub fn extract(bytes: &[u8]) -> Result<String, String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(|e| e.to_string())?;
    let mut doc = archive
        .by_name("word/document.xml")
        .map_err(|e| e.to_string())?;
    let mut xml = String::new();
    doc.read_to_string(&mut xml).map_err(|e| e.to_string())?;
    paragraphs_from_xml(&xml)
}

fn paragraphs_from_xml(xml: &str) -> Result<String, String> {
    let mut reader = XmlReader::from_str(xml);
    let mut buf = Vec::new();
    let mut out = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(text)) => {
                let text = text.unescape().map_err(|e| e.to_string())?;
                out.push_str(&text);
            }
            Ok(Event::End(end)) => {
                if is_tag(end.name().as_ref(), b"p") {
                    out.push('\n');
                }
            }
            Ok(Event::Empty(empty)) => {
                if is_tag(empty.name().as_ref(), b"br") {
                    out.push('\n');
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }
        buf.clear();
    }

    Ok(out)
}

/// Matches `tag` with or without a namespace prefix (`p` and `w:p`).
fn is_tag(name: &[u8], tag: &[u8]) -> bool {
    if name == tag {
        return true;
    }
    if name.len() <= tag.len() + 1 || !name.ends_with(tag) {
        return false;
    }
    name[name.len() - tag.len() - 1] == b':'
}

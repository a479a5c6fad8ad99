use roxmltree::Node as XmlNode;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::core::decoder::decode_latin1;
use crate::error::ExtractError;

/// Labels the XML declaration may use for ISO-8859-1.
const LATIN1_LABELS: &[&str] = &["iso-8859-1", "iso_8859-1", "latin1", "latin-1"];

/// How far into the file the XML declaration is looked for.
const DECLARATION_WINDOW: usize = 256;

/// Buffered read of a whole mockup file, transcoded to a string.
///
/// Balsamiq writes UTF-8, but older exports declare ISO-8859-1. Files that
/// declare it, or that are not valid UTF-8, are read as ISO-8859-1.
pub fn read_file_optimized(file_path: &Path) -> Result<String, ExtractError> {
    let io_error = |source| ExtractError::Io {
        path: file_path.to_path_buf(),
        source,
    };

    let file = File::open(file_path).map_err(io_error)?;
    let file_size = file.metadata().map_err(io_error)?.len() as usize;

    let mut reader =
        BufReader::with_capacity(if file_size < 8192 { file_size } else { 8192 }, file);

    let mut content = Vec::with_capacity(file_size);
    reader.read_to_end(&mut content).map_err(io_error)?;
    Ok(transcode(content))
}

pub fn transcode(bytes: Vec<u8>) -> String {
    if declares_latin1(&bytes) {
        return decode_latin1(&bytes);
    }
    match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(err) => decode_latin1(err.as_bytes()),
    }
}

fn declares_latin1(bytes: &[u8]) -> bool {
    let window = &bytes[..bytes.len().min(DECLARATION_WINDOW)];
    let Some(end) = window.windows(2).position(|pair| pair == b"?>") else {
        return false;
    };
    let declaration = String::from_utf8_lossy(&window[..end]).to_ascii_lowercase();
    declaration.trim_start_matches('\u{feff}').starts_with("<?xml")
        && declaration.contains("encoding")
        && LATIN1_LABELS.iter().any(|label| declaration.contains(label))
}

pub fn find_child_by_tag<'a, 'input>(
    node: &XmlNode<'a, 'input>,
    tag: &str,
) -> Option<XmlNode<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.has_tag_name(tag))
}

/// Concatenated text of a leaf field element.
///
/// Field elements (`text`, `href`, `hrefs`) hold plain character data;
/// nested markup makes the control ambiguous and is reported as a
/// structural error.
pub fn leaf_text(node: &XmlNode) -> Result<String, ExtractError> {
    let mut content = String::new();
    for child in node.children() {
        if child.is_element() {
            return Err(ExtractError::Structure {
                parent: node.tag_name().name().to_string(),
                found: child.tag_name().name().to_string(),
            });
        }
        if child.is_text() {
            content.push_str(child.text().unwrap_or_default());
        }
    }
    Ok(content)
}

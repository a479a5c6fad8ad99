use roxmltree::{Document, Node as XmlNode, ParsingOptions};
use std::path::Path;

use super::common::{find_child_by_tag, leaf_text, read_file_optimized};
use super::{Control, DestinationRef, MockupDocument};
use crate::error::ExtractError;

const CONTROL_TAG: &str = "control";
const PROPERTIES_TAG: &str = "controlProperties";
const TYPE_ATTRIBUTE: &str = "controlTypeID";

/// Reads Balsamiq `.bmml` markup into a [`MockupDocument`].
pub struct BmmlParser {
    options: ParsingOptions,
}

impl BmmlParser {
    pub fn new() -> Self {
        Self {
            // Older Balsamiq exports may carry a doctype.
            options: ParsingOptions {
                allow_dtd: true,
                ..ParsingOptions::default()
            },
        }
    }

    pub fn parse_file(&self, file_path: &Path) -> Result<MockupDocument, ExtractError> {
        let source = read_file_optimized(file_path)?;
        self.parse_str(&source)
    }

    pub fn parse_str(&self, source: &str) -> Result<MockupDocument, ExtractError> {
        let document = Document::parse_with_options(source, self.options)?;

        let mut controls = Vec::new();
        for node in document
            .descendants()
            .filter(|node| node.is_element() && node.has_tag_name(CONTROL_TAG))
        {
            controls.push(self.read_control(&node)?);
        }

        Ok(MockupDocument::new(controls))
    }

    fn read_control(&self, node: &XmlNode) -> Result<Control, ExtractError> {
        let control = Control::new(node.attribute(TYPE_ATTRIBUTE).unwrap_or_default());

        // Only the first properties block counts.
        let Some(properties) = find_child_by_tag(node, PROPERTIES_TAG) else {
            return Ok(control);
        };

        let text = optional_field(&properties, "text")?;
        let href = optional_field(&properties, "href")?;
        let hrefs = optional_field(&properties, "hrefs")?;

        let destination = match (hrefs, href) {
            (Some(hrefs), Some(_)) => DestinationRef::Multiple(hrefs),
            (Some(hrefs), None) if text.is_some() => DestinationRef::Multiple(hrefs),
            (_, Some(href)) => DestinationRef::Single(href),
            _ => DestinationRef::Absent,
        };

        Ok(Control {
            text,
            destination,
            ..control
        })
    }
}

impl Default for BmmlParser {
    fn default() -> Self {
        Self::new()
    }
}

fn optional_field(properties: &XmlNode, tag: &str) -> Result<Option<String>, ExtractError> {
    find_child_by_tag(properties, tag)
        .map(|field| leaf_text(&field))
        .transpose()
}

use anyhow::Result;
use regex::Regex;

use super::decoder::decode_text;
use crate::error::DecodeError;
use crate::parsers::DestinationRef;

/// Balsamiq stores a link as `<something>&bm;<Target>.bmml`.
const DESTINATION_PATTERN: &str = r".*&bm;(.+bmml)";

/// Turns raw `href`/`hrefs` values into destination mockup filenames.
#[derive(Debug, Clone)]
pub struct LinkResolver {
    destination_pattern: Regex,
}

impl LinkResolver {
    pub fn new() -> Result<Self> {
        Ok(Self {
            destination_pattern: Regex::new(DESTINATION_PATTERN)?,
        })
    }

    /// Decode and split a control's destination field into raw references.
    ///
    /// `None` means the control carries no destination at all, while an
    /// empty field still yields one empty reference.
    pub fn extract_references(
        &self,
        destination: &DestinationRef,
    ) -> Result<Option<Vec<String>>, DecodeError> {
        let raw = match destination {
            DestinationRef::Multiple(raw) | DestinationRef::Single(raw) => raw,
            DestinationRef::Absent => return Ok(None),
        };

        let decoded = decode_text(raw)?;
        Ok(Some(decoded.split(',').map(str::to_string).collect()))
    }

    /// Resolve one raw reference to the mockup filename it points at.
    pub fn resolve<'r>(&self, reference: &'r str) -> Option<&'r str> {
        self.destination_pattern
            .captures(reference)
            .and_then(|captures| captures.get(1))
            .map(|filename| filename.as_str())
    }
}

use anyhow::Result;
use std::fmt;

use super::decoder::decode_text;
use super::graph::Edge;
use super::labels::split_labels;
use super::resolver::LinkResolver;
use crate::error::ExtractError;
use crate::parsers::{Control, MockupDocument};

/// A label whose destination reference did not point at a mockup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedLink {
    pub source: String,
    /// Decoded label as it appeared in the control, before normalization.
    pub label: String,
    pub reference: String,
}

impl fmt::Display for UnresolvedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: '{}' has no matching link", self.source, self.label)
    }
}

/// Everything one mockup contributes to the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentLinks {
    pub edges: Vec<Edge>,
    pub unresolved: Vec<UnresolvedLink>,
}

/// Pulls link edges out of a single parsed mockup.
#[derive(Debug, Clone)]
pub struct DocumentExtractor {
    resolver: LinkResolver,
}

impl DocumentExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self::with_resolver(LinkResolver::new()?))
    }

    pub fn with_resolver(resolver: LinkResolver) -> Self {
        Self { resolver }
    }

    /// Extract the edges of every link-bearing control, in document order.
    ///
    /// `source` is the identifier written on the source side of each edge.
    /// A decoding failure anywhere fails the whole document.
    pub fn extract(
        &self,
        source: &str,
        document: &MockupDocument,
    ) -> Result<DocumentLinks, ExtractError> {
        let mut links = DocumentLinks::default();
        self.extract_into(source, document, &mut links)?;
        Ok(links)
    }

    /// Like [`extract`](Self::extract), but appends to `links` as it goes.
    /// On error, `links` holds whatever was found before the failing control.
    pub fn extract_into(
        &self,
        source: &str,
        document: &MockupDocument,
        links: &mut DocumentLinks,
    ) -> Result<(), ExtractError> {
        for control in document.link_controls() {
            self.extract_control(source, control, links)?;
        }
        Ok(())
    }

    fn extract_control(
        &self,
        source: &str,
        control: &Control,
        links: &mut DocumentLinks,
    ) -> Result<(), ExtractError> {
        let text = match &control.text {
            Some(raw) => decode_text(raw)?,
            None => String::new(),
        };
        let labels = split_labels(&control.type_id, &text);

        let Some(references) = self.resolver.extract_references(&control.destination)? else {
            return Ok(());
        };

        // Extra references beyond the last label are ignored, and so are
        // extra labels beyond the last reference.
        for (label, reference) in labels.iter().zip(&references) {
            match self.resolver.resolve(reference) {
                Some(destination) => links.edges.push(Edge::new(destination, source, label)),
                None => links.unresolved.push(UnresolvedLink {
                    source: source.to_string(),
                    label: label.clone(),
                    reference: reference.clone(),
                }),
            }
        }

        Ok(())
    }
}

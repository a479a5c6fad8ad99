pub mod bmml;
pub mod common;

pub use bmml::BmmlParser;

/// Raw, still-encoded destination field of a control.
///
/// A control links either to one place (`href`) or to several (`hrefs`).
/// When a file carries both, `hrefs` wins. A lone `hrefs` without a caption
/// does not count as a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationRef {
    Single(String),
    Multiple(String),
    Absent,
}

impl DestinationRef {
    pub fn is_absent(&self) -> bool {
        matches!(self, DestinationRef::Absent)
    }
}

/// One UI widget of a mockup, reduced to the fields that matter for links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub type_id: String,
    /// Raw `text` field, `None` when the control has no caption element.
    pub text: Option<String>,
    pub destination: DestinationRef,
}

impl Control {
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            text: None,
            destination: DestinationRef::Absent,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_destination(mut self, destination: DestinationRef) -> Self {
        self.destination = destination;
        self
    }

    pub fn is_link_bearing(&self) -> bool {
        !self.destination.is_absent()
    }
}

/// A parsed mockup file: its controls in document order, nested groups
/// flattened in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockupDocument {
    pub controls: Vec<Control>,
}

impl MockupDocument {
    pub fn new(controls: Vec<Control>) -> Self {
        Self { controls }
    }

    pub fn link_controls(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter().filter(|control| control.is_link_bearing())
    }
}

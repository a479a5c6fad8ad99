/// How a control's caption text is broken up into link labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitRule {
    /// One label per comma separated segment, empty segments kept.
    Comma,
    /// The whole text is a single label.
    Whole,
    /// One label per line.
    Lines,
}

/// Widget names with a non-default rule. Everything else splits on lines.
const SPLIT_RULES: &[(&str, SplitRule)] = &[
    ("TabBar", SplitRule::Comma),
    ("Paragraph", SplitRule::Whole),
];

const DEFAULT_RULE: SplitRule = SplitRule::Lines;

impl SplitRule {
    /// Look up the rule for a `controlTypeID`.
    ///
    /// Balsamiq namespaces its widget ids (`com.balsamiq.mockups::TabBar`);
    /// only the part after the last `::` takes part in the lookup.
    pub fn for_control_type(type_id: &str) -> Self {
        let widget = type_id.rsplit("::").next().unwrap_or(type_id);
        SPLIT_RULES
            .iter()
            .find(|(name, _)| *name == widget)
            .map(|(_, rule)| *rule)
            .unwrap_or(DEFAULT_RULE)
    }

    pub fn split(self, text: &str) -> Vec<String> {
        match self {
            SplitRule::Comma => text.split(',').map(str::to_string).collect(),
            SplitRule::Whole => vec![text.to_string()],
            SplitRule::Lines => split_lines(text),
        }
    }
}

/// Split decoded caption text into labels according to the control type.
pub fn split_labels(type_id: &str, text: &str) -> Vec<String> {
    SplitRule::for_control_type(type_id).split(text)
}

fn split_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    // Trailing blank lines carry no caption.
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

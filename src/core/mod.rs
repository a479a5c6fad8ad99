pub mod analyzer;
pub mod decoder;
pub mod extractor;
pub mod graph;
pub mod labels;
pub mod resolver;
pub mod scanner;

pub use analyzer::MockupAnalyzer;
pub use decoder::decode_text;
pub use extractor::{DocumentExtractor, DocumentLinks, UnresolvedLink};
pub use graph::{normalize_label, Edge, GraphBuilder, LinkGraph, MENU_ITEM_MARKER};
pub use labels::{split_labels, SplitRule};
pub use resolver::LinkResolver;
pub use scanner::FileScanner;

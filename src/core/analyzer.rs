use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::extractor::{DocumentExtractor, DocumentLinks};
use super::graph::{GraphBuilder, LinkGraph};
use super::FileScanner;
use crate::error::ExtractError;
use crate::parsers::BmmlParser;

/// Runs extraction over a list of mockup files and collects one graph.
pub struct MockupAnalyzer {
    file_scanner: FileScanner,
    parser: BmmlParser,
    extractor: DocumentExtractor,
}

impl MockupAnalyzer {
    /// Fails only if the link pattern cannot be compiled.
    pub fn new() -> Result<Self> {
        Ok(Self {
            file_scanner: FileScanner::new(),
            parser: BmmlParser::new(),
            extractor: DocumentExtractor::new()?,
        })
    }

    /// Process `inputs` in order.
    ///
    /// Unresolved links and files that fail to parse are reported as one
    /// line each on `diagnostics`; neither stops the run. A failed file
    /// contributes no edges, but its unresolved links are still reported.
    /// The only errors returned are write failures on `diagnostics` itself.
    pub fn analyze<W: Write>(&self, inputs: &[PathBuf], diagnostics: &mut W) -> Result<LinkGraph> {
        let files = self.file_scanner.expand_inputs(inputs);
        info!(files = files.len(), "scanning mockups");

        let mut graph_builder = GraphBuilder::new();
        let mut failed = 0usize;

        for file_path in &files {
            let mut links = DocumentLinks::default();
            let outcome = self.process_file(file_path, &mut links);

            // Warnings found before a failure are still reported.
            for unresolved in &links.unresolved {
                writeln!(diagnostics, "{unresolved}")?;
            }

            match outcome {
                Ok(()) => {
                    debug!(
                        file = %file_path.display(),
                        edges = links.edges.len(),
                        unresolved = links.unresolved.len(),
                        "extracted links"
                    );
                    graph_builder.extend(links.edges);
                }
                Err(err) => {
                    failed += 1;
                    debug!(file = %file_path.display(), error = %err, "skipping mockup");
                    writeln!(diagnostics, "{}: {}", file_path.display(), err)?;
                }
            }
        }

        info!(
            files = files.len(),
            failed,
            edges = graph_builder.edge_count(),
            "link extraction finished"
        );

        Ok(graph_builder.build())
    }

    /// Parse one mockup and append what it links to onto `links`.
    pub fn process_file(
        &self,
        file_path: &Path,
        links: &mut DocumentLinks,
    ) -> Result<(), ExtractError> {
        let document = self.parser.parse_file(file_path)?;
        self.extractor
            .extract_into(&source_name(file_path), &document, links)
    }
}

/// Edges name mockups by file name, without their directory.
pub fn source_name(file_path: &Path) -> String {
    file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string_lossy().into_owned())
}

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const MOCKUP_EXTENSION: &str = "bmml";

/// Turns command line arguments into the ordered list of mockup files.
pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Directories expand to the `.bmml` files below them, in file name order.
    /// Anything else is passed through as given, in argument order, so that
    /// a missing file surfaces later as a per-file read error.
    pub fn expand_inputs(&self, inputs: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::with_capacity(inputs.len());
        for input in inputs {
            if input.is_dir() {
                files.extend(self.scan_directory(input));
            } else {
                files.push(input.clone());
            }
        }
        files
    }

    pub fn scan_directory(&self, root_path: &Path) -> Vec<PathBuf> {
        WalkDir::new(root_path)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| is_mockup(path))
            .collect()
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_mockup(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MOCKUP_EXTENSION))
}

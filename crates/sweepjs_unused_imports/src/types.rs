use serde::Serialize;

/// One file with at least one unused import entry.
///
/// `unused` holds the import-list entries exactly as written in the source
/// (alias form included), in clause order then left-to-right order.
#[derive(Debug, Clone, Serialize)]
pub struct FileFinding {
    pub path: String,
    pub unused: Vec<String>,
}

/// A file that could not be read or analyzed. The scan continues past it.
#[derive(Debug, Clone)]
pub struct ScanError {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Findings in file-discovery order; files with zero unused entries
    /// never appear here
    pub findings: Vec<FileFinding>,
    /// Per-file failures in file-discovery order
    pub errors: Vec<ScanError>,
    pub files_scanned: usize,
}

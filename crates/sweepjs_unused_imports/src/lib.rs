//! Unused named-import detection for JavaScript/TypeScript projects.
//!
//! This crate scans a source tree for named imports from a single module
//! specifier (by default `lucide-react`) that are never referenced in the
//! rest of the file. Detection is a regex heuristic, not a parse: it is
//! fast and accurate enough for component and icon imports, at the cost of
//! the gaps documented on [`analyzer::ImportAnalyzer`].
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use sweepjs_unused_imports::{Config, run_unused_imports_check};
//! use std::io::BufWriter;
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: std::path::PathBuf::from("/path/to/project/src"),
//!     module: "lucide-react".to_string(),
//!     json: false,
//! };
//!
//! let result = run_unused_imports_check(cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! if result.findings.is_empty() {
//!     sweepjs_unused_imports::print_clean_message(&mut stdout)?;
//! } else {
//!     sweepjs_unused_imports::print_report(&mut stdout, &result.findings)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
mod checker;
mod collector;
mod config;
mod constants;
mod reporter;
mod types;

// Re-export public API
pub use analyzer::ImportAnalyzer;
pub use checker::run_unused_imports_check;
pub use config::Config;
pub use constants::DEFAULT_MODULE;
pub use reporter::{print_clean_message, print_report, print_report_json, print_scan_errors};
pub use types::{CheckResult, FileFinding, ScanError};

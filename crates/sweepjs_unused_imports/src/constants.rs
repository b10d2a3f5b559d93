//! Fixed knobs of the scan.
//!
//! The extension list and the ignored directory are deliberately narrow:
//! this tool audits application source trees, and the only files that can
//! carry the import form it recognizes are TypeScript sources.

/// File extensions of candidate source files
pub const SCAN_EXTENSIONS: &[&str] = &[
    "ts",  // TypeScript
    "tsx", // TypeScript with JSX
];

/// Directory name that prunes a whole subtree when it appears anywhere in
/// the traversed path (coarse substring match, not exact-segment match)
pub const IGNORED_DIR: &str = "node_modules";

/// Module specifier audited when none is given on the command line
pub const DEFAULT_MODULE: &str = "lucide-react";

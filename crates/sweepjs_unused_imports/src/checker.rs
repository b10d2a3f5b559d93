use anyhow::{Context, Result};
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::{fs, path::Path, thread};

use crate::{
    analyzer::ImportAnalyzer,
    collector::collect_files,
    config::{Config, validate_root},
    types::{CheckResult, FileFinding, ScanError},
};

enum Outcome {
    Clean,
    Unused(FileFinding),
    Failed(ScanError),
}

pub fn run_unused_imports_check(cfg: Config) -> Result<CheckResult> {
    info!("Starting unused imports check for module '{}'", cfg.module);

    validate_root(&cfg.root)?;
    info!("Using root directory: {}", cfg.root.display());

    let analyzer = ImportAnalyzer::new(&cfg.module)?;
    let files = collect_files(&cfg.root)?;
    info!("Scanning {} candidate files", files.len());

    // Files are independent, so analysis fans out across the rayon pool.
    // The ordered collect keeps results in discovery order, so the report
    // reads exactly as a sequential scan would produce it.
    let outcomes: Vec<Outcome> = files
        .par_iter()
        .map(|path| {
            trace!("Thread {:?} scanning: {}", thread::current().id(), path.display());
            match analyze_file(&analyzer, path) {
                Ok(unused) if unused.is_empty() => Outcome::Clean,
                Ok(unused) => {
                    debug!("{}: {} unused entries", path.display(), unused.len());
                    Outcome::Unused(FileFinding { path: path.display().to_string(), unused })
                }
                Err(e) => {
                    warn!("Failed to scan {}: {e:#}", path.display());
                    Outcome::Failed(ScanError {
                        path: path.display().to_string(),
                        message: format!("{e:#}"),
                    })
                }
            }
        })
        .collect();

    let files_scanned = outcomes.len();
    let mut findings = Vec::new();
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Clean => {}
            Outcome::Unused(finding) => findings.push(finding),
            Outcome::Failed(error) => errors.push(error),
        }
    }

    info!(
        "Check complete: {} files with unused imports, {} files failed",
        findings.len(),
        errors.len()
    );

    Ok(CheckResult { findings, errors, files_scanned })
}

fn analyze_file(analyzer: &ImportAnalyzer, path: &Path) -> Result<Vec<String>> {
    // No caching: content is re-read on every invocation
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    analyzer.find_unused(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::PathBuf};
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn config_for(root: &Path) -> Config {
        Config {
            root: root.to_path_buf(),
            module: "lucide-react".to_string(),
            json: false,
        }
    }

    #[test]
    fn test_end_to_end_reports_only_offending_file() {
        let temp_dir = TempDir::new().unwrap();
        let offender = create_test_file(
            temp_dir.path(),
            "src/nav.tsx",
            "import { Home, Settings } from 'lucide-react';\n\
             export const Nav = () => <Home />;\n",
        );
        create_test_file(
            temp_dir.path(),
            "src/avatar.tsx",
            "import { User } from 'lucide-react';\n\
             export const Avatar = () => <User />;\n",
        );

        let result = run_unused_imports_check(config_for(temp_dir.path())).unwrap();
        assert_eq!(result.files_scanned, 2);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].path, offender.display().to_string());
        assert_eq!(result.findings[0].unused, vec!["Settings"]);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_clean_files_are_omitted_entirely() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(temp_dir.path(), "a.ts", "export const a = 1;\n");
        create_test_file(
            temp_dir.path(),
            "b.tsx",
            "import { Bell } from 'lucide-react';\nexport const B = () => <Bell />;\n",
        );

        let result = run_unused_imports_check(config_for(temp_dir.path())).unwrap();
        assert_eq!(result.files_scanned, 2);
        assert!(result.findings.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_unreadable_file_is_reported_and_scan_continues() {
        let temp_dir = TempDir::new().unwrap();
        // Invalid UTF-8 forces a read failure without platform tricks
        let bad = temp_dir.path().join("bad.ts");
        fs::write(&bad, [0xff, 0xfe, 0x00, 0x41]).unwrap();
        let offender = create_test_file(
            temp_dir.path(),
            "zz.tsx",
            "import { Home } from 'lucide-react';\nexport const x = 1;\n",
        );

        let result = run_unused_imports_check(config_for(temp_dir.path())).unwrap();
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].path, bad.display().to_string());
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].path, offender.display().to_string());
    }

    #[test]
    fn test_missing_root_is_a_hard_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone");
        let err = run_unused_imports_check(config_for(&missing)).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_node_modules_subtree_never_scanned() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(
            temp_dir.path(),
            "node_modules/lib/icons.ts",
            "import { Home } from 'lucide-react';\n",
        );

        let result = run_unused_imports_check(config_for(temp_dir.path())).unwrap();
        assert_eq!(result.files_scanned, 0);
        assert!(result.findings.is_empty());
    }

    #[test]
    fn test_custom_module_flag_changes_audit_target() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(
            temp_dir.path(),
            "app.tsx",
            "import { IconBell } from '@tabler/icons-react';\nexport const x = 1;\n",
        );

        let mut cfg = config_for(temp_dir.path());
        cfg.module = "@tabler/icons-react".to_string();
        let result = run_unused_imports_check(cfg).unwrap();
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].unused, vec!["IconBell"]);
    }
}

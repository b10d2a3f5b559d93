use anyhow::{Context, Result};
use log::{debug, trace};
use regex::Regex;

/// Heuristic detector for unused named imports from one module specifier.
///
/// This is text matching, not parsing: a name is "used" when it occurs as a
/// whole word anywhere in the file outside the matched import clauses. That
/// means occurrences inside comments or string literals count as usage, and
/// an unrelated identifier with the same spelling also counts. Both are
/// accepted trade-offs; for component and icon imports the heuristic is
/// accurate in practice.
///
/// Only the single-line named form is recognized:
///
/// ```text
/// import { Home, Settings, User as UserIcon } from 'lucide-react';
/// ```
///
/// Default, namespace, and multi-line imports are not matched and therefore
/// never reported.
pub struct ImportAnalyzer {
    clause_re: Regex,
}

impl ImportAnalyzer {
    /// Compiles the import-clause pattern for `module`.
    pub fn new(module: &str) -> Result<Self> {
        let pattern = format!(
            r#"import\s+\{{([^}}\r\n]+)\}}\s+from\s+['"]{}['"]"#,
            regex::escape(module)
        );
        trace!("Compiling import clause pattern: {pattern}");
        let clause_re = Regex::new(&pattern)
            .with_context(|| format!("Invalid import pattern for module '{module}'"))?;
        Ok(Self { clause_re })
    }

    /// Returns the import-list entries from the audited module that do not
    /// appear elsewhere in `text`, in clause order then left-to-right order.
    /// Entries are returned exactly as written, alias form included.
    pub fn find_unused(&self, text: &str) -> Result<Vec<String>> {
        let clauses: Vec<&str> = self
            .clause_re
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect();
        if clauses.is_empty() {
            trace!("No matching import clauses, skipping usage search");
            return Ok(Vec::new());
        }
        debug!("Found {} import clauses", clauses.len());

        // Delete the clauses themselves so a name's own declaration never
        // counts as a use of that name.
        let remainder = self.clause_re.replace_all(text, "");

        let mut unused = Vec::new();
        for clause in clauses {
            for entry in clause.split(',') {
                let entry = entry.trim();
                if entry.is_empty() {
                    // trailing comma
                    continue;
                }

                // For "Image as ImageIcon" only the local alias can appear
                // at use sites.
                let name = match entry.split(" as ").nth(1) {
                    Some(alias) => alias.trim(),
                    None => entry,
                };

                let usage_re = Regex::new(&format!(r"\b{}\b", regex::escape(name)))
                    .with_context(|| format!("Invalid usage pattern for '{name}'"))?;

                if !usage_re.is_match(&remainder) {
                    trace!("No usage found for '{name}', reporting '{entry}'");
                    unused.push(entry.to_string());
                }
            }
        }

        debug!("{} of the imported names are unused", unused.len());
        Ok(unused)
    }
}

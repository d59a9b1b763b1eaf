//! The per-path copy engine
//!
//! Walks the include list in manifest order and settles on one
//! [`Decision`] per entry: excluded, missing in the fetched tree,
//! already present without `--force`, or copied.

use std::fmt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::Result;
use crate::fetch::TemplateFetcher;
use crate::ioutils;
use crate::manifest::{strip_root, Manifest};

/// Outcome for a single include path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The path equals or is nested under an exclude entry.
    SkippedExcluded,
    /// The path was not present in the fetched subtree.
    SkippedMissingInSource,
    /// The destination already exists and overwriting was not forced.
    SkippedExistsNoForce,
    /// The path was copied into the target repository.
    Copied,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Decision::SkippedExcluded => "skipped (excluded)",
            Decision::SkippedMissingInSource => "skipped (missing in source)",
            Decision::SkippedExistsNoForce => "skipped (exists, no force)",
            Decision::Copied => "copied",
        };
        write!(f, "{s}")
    }
}

/// Ordered record of what happened to each include path.
#[derive(Debug, Default)]
pub struct Report {
    entries: Vec<(String, Decision)>,
}

impl Report {
    pub fn record<S: Into<String>>(&mut self, path: S, decision: Decision) {
        self.entries.push((path.into(), decision));
    }

    pub fn entries(&self) -> &[(String, Decision)] {
        &self.entries
    }

    pub fn count(&self, decision: Decision) -> usize {
        self.entries.iter().filter(|(_, d)| *d == decision).count()
    }

    /// Looks up the decision recorded for `path`.
    pub fn decision_for(&self, path: &str) -> Option<Decision> {
        self.entries.iter().find(|(p, _)| p == path).map(|(_, d)| *d)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} copied, {} excluded, {} missing in source, {} already present",
            self.count(Decision::Copied),
            self.count(Decision::SkippedExcluded),
            self.count(Decision::SkippedMissingInSource),
            self.count(Decision::SkippedExistsNoForce),
        )
    }
}

/// Returns true when `path` equals or is a descendant of any exclude
/// entry. Matching is component-wise, so `.github2` is not excluded by
/// `.github`.
pub fn is_excluded(path: &Path, excludes: &[String]) -> bool {
    excludes.iter().any(|exclude| path.starts_with(strip_root(exclude)))
}

/// Copies include paths from a fetched template tree into the target
/// repository, one decision per manifest entry.
pub struct Materializer<'a> {
    target_dir: &'a Path,
    manifest: &'a Manifest,
    force: bool,
}

impl<'a> Materializer<'a> {
    pub fn new(target_dir: &'a Path, manifest: &'a Manifest, force: bool) -> Self {
        Self { target_dir, manifest, force }
    }

    /// Fetches the template subtree into a scoped temporary directory
    /// and runs the per-path decision ladder. The temporary directory
    /// is removed on every exit path, fetch failures included.
    pub fn run(&self, fetcher: &dyn TemplateFetcher) -> Result<Report> {
        let includes = self.manifest.include.entries();
        let excludes = self.manifest.exclude.entries();

        let fetch_dir = TempDir::new()?;
        fetcher.fetch_subtree(
            &self.manifest.repository,
            &self.manifest.branch,
            &includes,
            fetch_dir.path(),
        )?;

        let mut report = Report::default();
        for include in &includes {
            let decision = self.apply(include, &excludes, fetch_dir.path())?;
            report.record(include.as_str(), decision);
        }
        Ok(report)
    }

    /// Settles a single include entry. Exclusion wins over everything
    /// else, then missing-in-source, then exists-without-force.
    fn apply(
        &self,
        include: &str,
        excludes: &[String],
        fetch_dir: &Path,
    ) -> Result<Decision> {
        let rel = strip_root(include);
        let source = fetch_dir.join(rel);
        let dest = self.target_dir.join(rel);

        if is_excluded(Path::new(rel), excludes) {
            log::info!("'{rel}' matches an exclude entry, skipping");
            return Ok(Decision::SkippedExcluded);
        }

        if !source.exists() {
            log::warn!("'{rel}' not found in template, skipping");
            return Ok(Decision::SkippedMissingInSource);
        }

        if dest.exists() && !self.force {
            log::warn!("'{rel}' already exists, use --force to overwrite");
            return Ok(Decision::SkippedExistsNoForce);
        }

        ioutils::remove_path(&dest)?;

        // Exclude entries nested under this include are filtered out of
        // the copied subtree.
        let include_root = PathBuf::from(rel);
        ioutils::copy_tree(&source, &dest, &|entry_rel: &Path| {
            !is_excluded(&include_root.join(entry_rel), excludes)
        })?;

        log::info!("Copied '{rel}'");
        Ok(Decision::Copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excludes(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exclude_matches_exact_path() {
        assert!(is_excluded(Path::new(".editorconfig"), &excludes(&[".editorconfig"])));
    }

    #[test]
    fn exclude_matches_descendants() {
        let rules = excludes(&[".github"]);
        assert!(is_excluded(Path::new(".github/workflows/ci.yml"), &rules));
        assert!(is_excluded(Path::new(".github/dependabot.yml"), &rules));
    }

    #[test]
    fn exclude_is_component_wise() {
        let rules = excludes(&[".github"]);
        assert!(!is_excluded(Path::new(".github2"), &rules));
        assert!(!is_excluded(Path::new("docs/.github"), &rules));
    }

    #[test]
    fn exclude_entries_may_carry_root_anchor() {
        assert!(is_excluded(Path::new(".editorconfig"), &excludes(&["/.editorconfig"])));
    }

    #[test]
    fn report_counts_and_lookup() {
        let mut report = Report::default();
        report.record(".github", Decision::Copied);
        report.record(".editorconfig", Decision::SkippedExistsNoForce);
        report.record("Makefile", Decision::Copied);

        assert_eq!(report.count(Decision::Copied), 2);
        assert_eq!(report.count(Decision::SkippedExcluded), 0);
        assert_eq!(
            report.decision_for(".editorconfig"),
            Some(Decision::SkippedExistsNoForce)
        );
        assert_eq!(report.decision_for("missing"), None);
        assert_eq!(
            report.to_string(),
            "2 copied, 0 excluded, 0 missing in source, 1 already present"
        );
    }

    #[test]
    fn decision_display() {
        assert_eq!(Decision::Copied.to_string(), "copied");
        assert_eq!(Decision::SkippedExcluded.to_string(), "skipped (excluded)");
    }
}

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fetch::interface::TemplateFetcher;
use crate::ioutils;
use crate::manifest::strip_root;

/// Fetcher that copies include subtrees from a template tree on the
/// local filesystem. Doubles as the substitute for [`super::GitFetcher`]
/// in tests.
pub struct LocalFetcher {
    root: PathBuf,
}

impl LocalFetcher {
    /// Creates a new LocalFetcher reading from `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateFetcher for LocalFetcher {
    fn fetch_subtree(
        &self,
        repo: &str,
        branch: &str,
        paths: &[String],
        dest: &Path,
    ) -> Result<()> {
        if !self.root.is_dir() {
            return Err(Error::FetchFailed {
                repo: repo.to_string(),
                branch: branch.to_string(),
                reason: format!(
                    "local template root '{}' does not exist",
                    self.root.display()
                ),
            });
        }

        log::debug!("Copying template subtrees from '{}'", self.root.display());
        for path in paths {
            let rel = strip_root(path);
            let source = self.root.join(rel);
            // Paths absent from the template simply never appear in the
            // fetched tree, matching sparse-checkout behavior.
            if !source.exists() {
                continue;
            }
            ioutils::copy_tree(&source, &dest.join(rel), &|_| true)?;
        }
        Ok(())
    }
}

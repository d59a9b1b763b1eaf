use std::path::Path;

use crate::error::Result;

/// Trait for fetching template subtrees from different sources.
pub trait TemplateFetcher {
    /// Materializes the parts of `repo` at `branch` that lie under
    /// `paths` into `dest`. The caller owns `dest` and is responsible
    /// for removing it.
    ///
    /// # Returns
    /// * `Result<()>` - `FetchFailed` when the source cannot be read
    fn fetch_subtree(
        &self,
        repo: &str,
        branch: &str,
        paths: &[String],
        dest: &Path,
    ) -> Result<()>;
}

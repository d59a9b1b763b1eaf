//! Reading and creating the template manifest
//!
//! The manifest lives at `.graft.yml` in the root of the target
//! repository and names the template repository, the branch, and the
//! `include`/`exclude` path lists.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{
    DEFAULT_BRANCH, DEFAULT_EXCLUDE, DEFAULT_INCLUDE, MANIFEST_RELATIVE_PATH,
};
use crate::error::{Error, Result};

/// A list of relative paths. The documented form is a block scalar with
/// one path per line, but a plain YAML sequence is accepted as well.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PathList {
    Block(String),
    Sequence(Vec<String>),
    Empty,
}

impl Default for PathList {
    fn default() -> Self {
        PathList::Empty
    }
}

impl PathList {
    /// Returns the trimmed, non-empty entries in manifest order.
    /// Blank lines and `#` comments are dropped.
    pub fn entries(&self) -> Vec<String> {
        let lines: Vec<&str> = match self {
            PathList::Block(block) => block.lines().collect(),
            PathList::Sequence(items) => items.iter().map(String::as_str).collect(),
            PathList::Empty => Vec::new(),
        };
        lines
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }
}

/// The persisted template configuration of a target repository.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    #[serde(rename = "template-repository")]
    pub repository: String,
    #[serde(rename = "template-branch", default = "get_default_branch")]
    pub branch: String,
    #[serde(default)]
    pub include: PathList,
    #[serde(default)]
    pub exclude: PathList,
}

fn get_default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

/// Strips the leading `/` some manifest entries carry to anchor a
/// sparse-checkout pattern at the repository root.
pub fn strip_root(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Absolute location of the manifest inside a target repository.
pub fn manifest_path(target_dir: &Path) -> PathBuf {
    target_dir.join(MANIFEST_RELATIVE_PATH)
}

/// Ensures a manifest exists, writing the default one on first use.
/// An existing manifest is reused verbatim; `repository` and `branch`
/// never override it.
pub fn ensure(target_dir: &Path, repository: &str, branch: &str) -> Result<PathBuf> {
    let path = manifest_path(target_dir);
    if path.exists() {
        log::info!("Using existing manifest '{}'", path.display());
        return Ok(path);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    log::info!("Creating default manifest '{}'", path.display());
    std::fs::write(&path, render_default(repository, branch))?;
    Ok(path)
}

/// Loads the manifest at `path` and validates that the include list is
/// non-empty.
pub fn load(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path)?;
    let manifest: Manifest =
        serde_yaml::from_str(&content).map_err(|e| Error::MalformedManifest {
            manifest: path.display().to_string(),
            reason: e.to_string(),
        })?;

    if manifest.include.entries().is_empty() {
        return Err(Error::MalformedManifest {
            manifest: path.display().to_string(),
            reason: "include list is empty".to_string(),
        });
    }
    Ok(manifest)
}

fn render_default(repository: &str, branch: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "template-repository: {repository}");
    let _ = writeln!(out, "template-branch: {branch}");
    let _ = writeln!(out, "include: |");
    for path in DEFAULT_INCLUDE {
        let _ = writeln!(out, "  {path}");
    }
    let _ = writeln!(out, "exclude: |");
    for path in DEFAULT_EXCLUDE {
        let _ = writeln!(out, "  {path}");
    }
    out
}

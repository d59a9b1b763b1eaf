use std::path::Path;
use std::process::{Command, Stdio};

use url::Url;

use crate::error::{Error, Result};
use crate::fetch::interface::TemplateFetcher;

/// Fetcher that performs a shallow, blob-filtered sparse clone with the
/// `git` binary. Fetch cost scales with the selected subtree, not the
/// whole remote.
pub struct GitFetcher;

impl GitFetcher {
    /// Determines if a string is already a full git URL rather than an
    /// `org/repo` shorthand.
    ///
    /// Supports:
    /// - HTTPS URLs: https://github.com/user/repo
    /// - Git URLs: git://github.com/user/repo
    /// - SSH URLs: git@github.com:user/repo
    /// - SSH URLs with explicit protocol: ssh://git@github.com/user/repo
    pub fn is_git_url(s: &str) -> bool {
        if let Ok(url) = Url::parse(s) {
            return matches!(url.scheme(), "http" | "https" | "git" | "ssh");
        }

        // scp-like SSH syntax: git@host:path
        s.contains('@') && s.contains(':') && !s.contains("://")
    }

    /// Expands an `org/repo` shorthand to a full clone URL; full URLs
    /// pass through untouched.
    pub fn clone_url(repo: &str) -> String {
        if Self::is_git_url(repo) {
            repo.to_string()
        } else {
            format!("https://github.com/{}.git", repo.trim_matches('/'))
        }
    }

    fn run_git(repo: &str, branch: &str, cwd: Option<&Path>, args: &[&str]) -> Result<()> {
        let mut command = Command::new("git");
        command.args(args).stdout(Stdio::null()).stderr(Stdio::piped());
        if let Some(cwd) = cwd {
            command.current_dir(cwd);
        }

        let output = command.output().map_err(|e| Error::FetchFailed {
            repo: repo.to_string(),
            branch: branch.to_string(),
            reason: format!("failed to run git: {e}"),
        })?;

        if !output.status.success() {
            return Err(Error::FetchFailed {
                repo: repo.to_string(),
                branch: branch.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl TemplateFetcher for GitFetcher {
    /// Clones `repo` at `branch` into `dest` with depth 1, a blob
    /// filter and a sparse checkout restricted to `paths`.
    fn fetch_subtree(
        &self,
        repo: &str,
        branch: &str,
        paths: &[String],
        dest: &Path,
    ) -> Result<()> {
        let url = Self::clone_url(repo);
        let dest_str = dest.display().to_string();

        log::info!("Cloning {repo}@{branch} into '{dest_str}'");
        Self::run_git(
            repo,
            branch,
            None,
            &[
                "clone",
                "--depth",
                "1",
                "--filter=blob:none",
                "--sparse",
                "--branch",
                branch,
                &url,
                &dest_str,
            ],
        )?;

        Self::run_git(repo, branch, Some(dest), &["sparse-checkout", "init"])?;

        let mut args = vec!["sparse-checkout", "set", "--skip-checks"];
        args.extend(paths.iter().map(String::as_str));
        Self::run_git(repo, branch, Some(dest), &args)
    }
}

//! Constants used throughout the graft application

/// Manifest location inside the target repository
pub const MANIFEST_RELATIVE_PATH: &str = ".graft.yml";

/// Template repository used when creating a new manifest
pub const DEFAULT_REPOSITORY: &str = "graft-templates/baseline";

/// Template branch used when creating a new manifest
pub const DEFAULT_BRANCH: &str = "main";

/// Include paths written into a freshly created manifest
pub const DEFAULT_INCLUDE: &[&str] = &[
    ".github",
    "/.editorconfig",
    "/.gitignore",
    "/.pre-commit-config.yaml",
    "/Makefile",
];

/// Exclude paths written into a freshly created manifest
pub const DEFAULT_EXCLUDE: &[&str] =
    &[".github/workflows/release.yml", ".github/workflows/docker.yml"];

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

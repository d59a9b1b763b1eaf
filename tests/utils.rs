use std::fs;
use std::path::Path;

/// Initializes an empty git repository at `path` so target validation
/// passes.
pub fn init_git_repo(path: &Path) {
    git2::Repository::init(path).unwrap();
}

/// Writes `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Lays out the template tree shared by the integration tests.
pub fn template_fixture(root: &Path) {
    write_file(&root.join(".github/workflows/ci.yml"), "name: ci\n");
    write_file(&root.join(".github/workflows/docker.yml"), "name: docker\n");
    write_file(&root.join(".github/dependabot.yml"), "version: 2\n");
    write_file(&root.join(".editorconfig"), "root = true\n");
    write_file(&root.join("Makefile"), "test:\n\ttrue\n");
}

/// Renders a manifest document with block-scalar include/exclude lists.
pub fn manifest_with(repository: &str, include: &[&str], exclude: &[&str]) -> String {
    let mut out = format!("template-repository: {repository}\ntemplate-branch: main\n");
    out.push_str("include: |\n");
    for path in include {
        out.push_str("  ");
        out.push_str(path);
        out.push('\n');
    }
    if !exclude.is_empty() {
        out.push_str("exclude: |\n");
        for path in exclude {
            out.push_str("  ");
            out.push_str(path);
            out.push('\n');
        }
    }
    out
}

/// Writes a manifest into `target/.graft.yml`.
pub fn write_manifest(target: &Path, repository: &str, include: &[&str], exclude: &[&str]) {
    write_file(&target.join(".graft.yml"), &manifest_with(repository, include, exclude));
}

use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path)?;
    Ok(())
}

/// Removes whatever exists at `path`, file or directory tree. Missing
/// paths are not an error.
pub fn remove_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        std::fs::remove_dir_all(path)?;
    } else if path.symlink_metadata().is_ok() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

/// Recursively copies `source` (a file or a directory) to `dest`,
/// creating intermediate directories as needed.
///
/// For directory sources every entry is offered to `keep` with its path
/// relative to `source`; entries rejected by `keep` are skipped along
/// with everything beneath them.
pub fn copy_tree<F>(source: &Path, dest: &Path, keep: &F) -> Result<()>
where
    F: Fn(&Path) -> bool,
{
    if source.is_file() {
        if let Some(parent) = dest.parent() {
            create_dir_all(parent)?;
        }
        std::fs::copy(source, dest)?;
        return Ok(());
    }

    let walker = WalkDir::new(source).into_iter().filter_entry(|entry| {
        match entry.path().strip_prefix(source) {
            // The root entry itself is always kept.
            Ok(rel) if rel.as_os_str().is_empty() => true,
            Ok(rel) => keep(rel),
            Err(_) => true,
        }
    });

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        let Ok(rel) = entry.path().strip_prefix(source) else {
            continue;
        };
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

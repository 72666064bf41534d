use anyhow::{Context, Result};
use std::fs::{self, File, Metadata, OpenOptions, Permissions};
use std::io::{ErrorKind, Seek, SeekFrom, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::patch::{patch_with, PatchReport, LAUNCHER_QUOTES};

/// Patch the file at `path` in place and report what changed
///
/// The file is rewritten even when no rule matched.
///
/// # Errors
///
/// Fails if the file cannot be read as UTF-8 text or cannot be written back.
/// See [`write_back`] for when a failed write can leave the file truncated.
pub fn patch_file(path: &Path) -> Result<PatchReport> {
    let (patched, report) = read_patched(path)?;
    write_back(path, &patched)?;
    debug!(
        path = %path.display(),
        changed = report.changed,
        replacements = report.total(),
        "patched file"
    );
    Ok(report)
}

/// Read `path` and return its patched content without touching the file
pub fn read_patched(path: &Path) -> Result<(String, PatchReport)> {
    let original = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let (patched, replacements) = patch_with(&original, &LAUNCHER_QUOTES);
    for rule in &replacements {
        debug!(from = %rule.from, count = rule.count, "applied substitution");
    }

    let report = PatchReport {
        path: path.to_path_buf(),
        changed: patched != original,
        replacements,
    };
    Ok((patched, report))
}

/// Replace the contents of `path` with `content`
///
/// The data normally goes to a temporary file in the same directory, which
/// is then renamed over the target. An existing target keeps its permission
/// bits, and symlinks are written through rather than replaced.
///
/// The target is truncated and rewritten in place instead when a rename would
/// change what other users of the file see: it has other hard links, the
/// directory does not allow creating the temporary file, or the temporary
/// file would end up with a different owner or group.
pub fn write_back(path: &Path, content: &str) -> Result<()> {
    let target = match fs::canonicalize(path) {
        Ok(target) => target,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            let tmp = NamedTempFile::new_in(parent_dir(path)).with_context(|| {
                format!("failed to create temporary file next to {}", path.display())
            })?;
            return persist_temp(tmp, path, content, None);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to resolve {}", path.display()));
        }
    };

    // A read-only file would otherwise be replaced by the rename.
    let mut file = OpenOptions::new()
        .write(true)
        .open(&target)
        .with_context(|| format!("failed to open {} for writing", path.display()))?;
    let metadata = file
        .metadata()
        .with_context(|| format!("failed to stat {}", path.display()))?;

    if has_other_links(&metadata) {
        debug!(target = %target.display(), "file has other hard links, writing in place");
        return overwrite_in_place(&mut file, &target, content);
    }

    let tmp = match NamedTempFile::new_in(parent_dir(&target)) {
        Ok(tmp) => tmp,
        Err(err) if err.kind() == ErrorKind::PermissionDenied => {
            debug!(target = %target.display(), "directory is not writable, writing in place");
            return overwrite_in_place(&mut file, &target, content);
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!("failed to create temporary file next to {}", path.display())
            });
        }
    };

    let tmp_metadata = tmp
        .as_file()
        .metadata()
        .with_context(|| format!("failed to stat temporary file {}", tmp.path().display()))?;
    if !same_owner(&metadata, &tmp_metadata) {
        debug!(target = %target.display(), "owner would change, writing in place");
        drop(tmp);
        return overwrite_in_place(&mut file, &target, content);
    }

    drop(file);
    persist_temp(tmp, &target, content, Some(metadata.permissions()))
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn persist_temp(
    mut tmp: NamedTempFile,
    target: &Path,
    content: &str,
    permissions: Option<Permissions>,
) -> Result<()> {
    tmp.write_all(content.as_bytes())
        .with_context(|| format!("failed to write temporary file {}", tmp.path().display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("failed to flush temporary file {}", tmp.path().display()))?;

    if let Some(permissions) = permissions {
        fs::set_permissions(tmp.path(), permissions).with_context(|| {
            format!("failed to copy permissions onto {}", tmp.path().display())
        })?;
    }

    debug!(
        target = %target.display(),
        temp = %tmp.path().display(),
        "replacing file"
    );
    tmp.persist(target)
        .with_context(|| format!("failed to replace {}", target.display()))?;

    Ok(())
}

/// Truncate-and-write; a failure part way through can leave the file short.
fn overwrite_in_place(file: &mut File, target: &Path, content: &str) -> Result<()> {
    file.set_len(0)
        .with_context(|| format!("failed to truncate {}", target.display()))?;
    file.seek(SeekFrom::Start(0))
        .with_context(|| format!("failed to rewind {}", target.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("failed to overwrite {}", target.display()))?;
    file.sync_all()
        .with_context(|| format!("failed to flush {}", target.display()))?;
    Ok(())
}

#[cfg(unix)]
fn has_other_links(metadata: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    metadata.nlink() > 1
}

#[cfg(not(unix))]
fn has_other_links(_metadata: &Metadata) -> bool {
    false
}

#[cfg(unix)]
fn same_owner(original: &Metadata, replacement: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    original.uid() == replacement.uid() && original.gid() == replacement.gid()
}

#[cfg(not(unix))]
fn same_owner(_original: &Metadata, _replacement: &Metadata) -> bool {
    true
}

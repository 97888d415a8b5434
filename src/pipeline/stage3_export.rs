use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::input::path_display;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("source path has no file name: {}", .0.display())]
    NoFileName(PathBuf),
    #[error("failed to create export directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
    #[error(
        "copy of {} at {} is {found} bytes, expected {expected}",
        from.display(),
        to.display()
    )]
    VerifyMismatch {
        from: PathBuf,
        to: PathBuf,
        expected: u64,
        found: u64,
    },
    #[error(
        "exported to {} but could not remove {}: {source}",
        to.display(),
        from.display()
    )]
    RemoveSource {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMethod {
    InPlace,
    Rename,
    CopyRemove,
}

impl ExportMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportMethod::InPlace => "in_place",
            ExportMethod::Rename => "rename",
            ExportMethod::CopyRemove => "copy_remove",
        }
    }
}

/// Moves `source` into `export_dir`, keeping its file name, so exactly one
/// copy remains. Returns the final path.
pub fn run_stage3_export(source: &Path, export_dir: &Path) -> Result<PathBuf, ExportError> {
    let (target, method) = export_file(source, export_dir)?;
    info!(
        path = %path_display(&target),
        method = method.as_str(),
        "exported table"
    );
    println!(
        "CSV file was exported successfully to: {}",
        path_display(&target)
    );
    Ok(target)
}

pub fn export_file(source: &Path, export_dir: &Path) -> Result<(PathBuf, ExportMethod), ExportError> {
    let file_name = source
        .file_name()
        .ok_or_else(|| ExportError::NoFileName(source.to_path_buf()))?;
    fs::create_dir_all(export_dir).map_err(|err| ExportError::CreateDir {
        path: export_dir.to_path_buf(),
        source: err,
    })?;
    let target = export_dir.join(file_name);

    if is_same_file(source, &target) {
        debug!(path = %path_display(&target), "source already at export location");
        return Ok((target, ExportMethod::InPlace));
    }

    match fs::rename(source, &target) {
        Ok(()) => Ok((target, ExportMethod::Rename)),
        Err(err) => {
            warn!(
                from = %path_display(source),
                to = %path_display(&target),
                error = %err,
                "rename failed, falling back to copy"
            );
            copy_verify_remove(source, &target)?;
            Ok((target, ExportMethod::CopyRemove))
        }
    }
}

/// Copy, check the byte length, then delete the source. A failed check
/// removes the bad copy; a failed delete leaves both files and says so.
pub fn copy_verify_remove(source: &Path, target: &Path) -> Result<(), ExportError> {
    let copy_err = |err: io::Error| ExportError::Copy {
        from: source.to_path_buf(),
        to: target.to_path_buf(),
        source: err,
    };

    let expected = fs::metadata(source).map_err(copy_err)?.len();
    fs::copy(source, target).map_err(copy_err)?;
    let found = fs::metadata(target).map_err(copy_err)?.len();
    verify_copy(source, target, expected, found)?;
    remove_source(source, target, |path| fs::remove_file(path))
}

pub(crate) fn verify_copy(
    source: &Path,
    target: &Path,
    expected: u64,
    found: u64,
) -> Result<(), ExportError> {
    if found == expected {
        return Ok(());
    }
    if let Err(err) = fs::remove_file(target) {
        warn!(path = %path_display(target), error = %err, "could not remove bad copy");
    }
    Err(ExportError::VerifyMismatch {
        from: source.to_path_buf(),
        to: target.to_path_buf(),
        expected,
        found,
    })
}

pub(crate) fn remove_source(
    source: &Path,
    target: &Path,
    remove: impl FnOnce(&Path) -> io::Result<()>,
) -> Result<(), ExportError> {
    remove(source).map_err(|err| ExportError::RemoveSource {
        from: source.to_path_buf(),
        to: target.to_path_buf(),
        source: err,
    })
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_export.rs"]
mod tests;

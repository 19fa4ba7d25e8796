//! Plain-text file I/O with atomic writes.

use std::fs;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use thiserror::Error;
use walkdir::WalkDir;

use crate::domain::NoteName;

/// Errors during file system operations on notes.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("note file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("note already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }

    /// Returns true for the not-found case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound { .. })
    }
}

/// Reads the full text of a file.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist.
/// Returns `FsError::PermissionDenied` if access is denied.
/// Returns `FsError::InvalidEncoding` if the file is not valid UTF-8.
pub fn read_text(path: &Path) -> Result<String, FsError> {
    let bytes = fs::read(path).map_err(|e| FsError::from_io(path, e))?;
    decode_text(bytes, path)
}

/// Decodes file bytes as UTF-8 text, unchanged.
///
/// A leading UTF-8 BOM is kept so that what was written reads back
/// byte-for-byte.
///
/// # Errors
///
/// Returns `FsError::InvalidEncoding` naming UTF-16 byte order marks or the
/// first invalid UTF-8 offset.
fn decode_text(bytes: Vec<u8>, path: &Path) -> Result<String, FsError> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 LE detected (byte order mark FF FE); convert to UTF-8".into(),
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 BE detected (byte order mark FE FF); convert to UTF-8".into(),
        });
    }

    String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })
}

/// Writes text to a file path atomically, replacing any existing file.
///
/// Uses a temporary file and atomic rename to prevent partial writes.
/// The parent directory must exist. A symlink at `path` is followed so
/// the link survives and its target is replaced, and an existing file's
/// permissions carry over to the new content.
///
/// # Errors
///
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `FsError::AtomicWrite` if the atomic rename fails.
pub fn write_text(path: &Path, content: &str) -> Result<(), FsError> {
    let target = follow_link(path);
    let temp = stage(&target, content)?;

    if let Ok(meta) = fs::metadata(&target) {
        temp.as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| FsError::from_io(&target, e))?;
    }

    temp.persist(&target).map_err(|e| FsError::AtomicWrite {
        path: target.clone(),
        source: e.error,
    })?;

    Ok(())
}

/// Resolves `path` through a symlink, if it is one with a live target.
fn follow_link(path: &Path) -> PathBuf {
    let is_link = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return path.to_path_buf();
    }
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Writes text to a new file, failing if the path is already taken.
///
/// The content is staged in a temporary file next to the target and linked
/// into place with a no-clobber rename, so the existence check and the
/// write are one step.
///
/// # Errors
///
/// Returns `FsError::AlreadyExists` if something already exists at `path`.
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
pub fn create_text(path: &Path, content: &str) -> Result<(), FsError> {
    let temp = stage(path, content)?;

    temp.persist_noclobber(path).map_err(|e| {
        if e.error.kind() == io::ErrorKind::AlreadyExists {
            FsError::AlreadyExists { path: path.into() }
        } else {
            FsError::AtomicWrite {
                path: path.into(),
                source: e.error,
            }
        }
    })?;

    Ok(())
}

/// Writes `content` to a temporary file in the target's directory.
///
/// The file is opened with mode 0666 less the umask, which is what a plain
/// `File::create` of the target would get.
fn stage(path: &Path, content: &str) -> Result<NamedTempFile, FsError> {
    let parent = match path.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => return Err(FsError::ParentNotFound { path: path.into() }),
    };

    if !parent.is_dir() {
        return Err(FsError::ParentNotFound {
            path: parent.into(),
        });
    }

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut temp = builder
        .tempfile_in(parent)
        .map_err(|e| FsError::from_io(path, e))?;

    temp.write_all(content.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| FsError::Io {
            path: path.into(),
            source: e,
        })?;

    Ok(temp)
}

/// Lists the `.txt` files directly inside `dir`.
///
/// Not recursive. Symlinks are followed; entries that cannot be read and
/// names that are not valid UTF-8 are skipped. Order is whatever the
/// filesystem returns.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the directory doesn't exist.
/// Returns `FsError::NotADirectory` if the path is not a directory.
pub fn scan_notes_directory(dir: &Path) -> Result<Vec<NoteName>, FsError> {
    if !dir.exists() {
        return Err(FsError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(FsError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut names = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("filesystem loop"));
                return Err(FsError::from_io(dir, source));
            }
            Err(err) => {
                log::warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            log::debug!("skipping non-UTF-8 file name: {}", entry.path().display());
            continue;
        };

        match NoteName::new(file_name) {
            Ok(name) if name.is_note() => names.push(name),
            _ => {}
        }
    }

    Ok(names)
}

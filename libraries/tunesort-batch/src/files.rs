//! File placement shared by the operations

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Upper bound on `-N` suffixes tried for a free name
const MAX_SUFFIX: u32 = 1000;

/// Rename, falling back to copy + remove across filesystems
pub(crate) fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    fs::copy(from, to)?;
    fs::remove_file(from)
}

/// Whether both paths resolve to the same existing file
pub(crate) fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// First unused path for `file_name` in `dir`
///
/// An existing file is never replaced: `Song.mp3` becomes `Song-1.mp3`,
/// then `Song-2.mp3`, and so on.
pub(crate) fn free_path(dir: &Path, file_name: &OsStr) -> io::Result<PathBuf> {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return Ok(candidate);
    }

    let name = Path::new(file_name);
    let stem = name.file_stem().unwrap_or(file_name).to_string_lossy();
    let extension = name.extension().map(|ext| ext.to_string_lossy());

    for counter in 1..MAX_SUFFIX {
        let new_name = match &extension {
            Some(ext) => format!("{stem}-{counter}.{ext}"),
            None => format!("{stem}-{counter}"),
        };
        let path = dir.join(new_name);
        if !path.exists() {
            return Ok(path);
        }
    }

    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("no free name for {} in {}", name.display(), dir.display()),
    ))
}

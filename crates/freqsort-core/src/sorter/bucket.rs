/// Extension buckets: which output subfolder a file is copied into.
///
/// The bucket is the file's extension without the leading dot, with its
/// case preserved, so `photo.JPG` and `photo.jpg` land in different
/// folders. Files with no extension, an empty one (`notes.`), or dotfiles
/// like `.bashrc` go to [`NO_EXTENSION`].
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Bucket for files that have no usable extension.
pub const NO_EXTENSION: &str = "no_extension";

/// Name of the bucket `path` belongs in.
pub fn bucket_name(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| NO_EXTENSION.to_string())
}

/// Full destination path for `source` under `output_root`:
/// `output_root/<bucket>/<file name>`.
///
/// Returns `None` for paths with no file name (e.g. `..`).
pub fn destination(source: &Path, output_root: &Path) -> Option<PathBuf> {
    let name = source.file_name()?;
    Some(output_root.join(bucket_name(source)).join(name))
}

/// Copy `source` to `destination`, creating the bucket directory first.
///
/// An existing file at `destination` is overwritten. Returns the number of
/// bytes copied.
pub fn copy_into_bucket(source: &Path, destination: &Path) -> Result<u64> {
    if let Some(bucket_dir) = destination.parent() {
        std::fs::create_dir_all(bucket_dir).map_err(|e| Error::io(bucket_dir, e))?;
    }
    std::fs::copy(source, destination).map_err(|e| Error::io(source, e))
}

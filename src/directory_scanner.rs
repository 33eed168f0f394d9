// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for finding and sorting supported image files.
//!
//! Scans a single directory (non-recursive), keeps files whose extension
//! matches a supported raster format, and sorts them into a deterministic
//! order. A directory with no matching files is not an error; the caller
//! renders an explicit empty state instead.

use crate::config::SortOrder;
use crate::error::{Error, Result};
use crate::media;
use std::path::{Path, PathBuf};

/// Scans `directory` for supported image files and sorts them.
///
/// Returns [`Error::Io`] when the path is not a readable directory.
pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(Error::Io(format!(
            "not a directory: {}",
            directory.display()
        )));
    }

    let mut image_files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && media::is_supported_image(&path) {
            image_files.push(path);
        }
    }

    sort_image_files(&mut image_files, sort_order);

    Ok(image_files)
}

/// Sorts image paths according to the configured sort order.
///
/// Alphabetical ordering compares file names case-insensitively, with the
/// raw name as a tie-break so the order stays stable on case-sensitive
/// filesystems.
fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| {
                let a_name = file_name_lowercase(a);
                let b_name = file_name_lowercase(b);
                a_name.cmp(&b_name).then_with(|| a.file_name().cmp(&b.file_name()))
            });
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
        SortOrder::CreatedDate => {
            image_files.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
    }
}

fn file_name_lowercase(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

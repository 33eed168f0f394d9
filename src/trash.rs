// SPDX-License-Identifier: MPL-2.0
//! Soft deletion: files are moved into a sibling `.deleted` directory
//! instead of being erased, so a culling mistake is always recoverable by
//! hand even without the in-app undo.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory that receives deleted files, created next to the
/// image's parent directory contents.
pub const DELETED_DIR_NAME: &str = ".deleted";

/// Returns the `.deleted` directory that would receive `path` on deletion.
pub fn deleted_dir_for(path: &Path) -> Result<PathBuf> {
    let parent = path
        .parent()
        .ok_or_else(|| Error::Move(format!("no parent directory: {}", path.display())))?;
    Ok(parent.join(DELETED_DIR_NAME))
}

/// Moves `path` into its sibling `.deleted` directory and returns the final
/// destination, which the caller records for undo.
///
/// The directory is created if absent. A name collision appends `_1`, `_2`,
/// ... before the extension until a free name is found, so deleting two
/// files with the same base name never overwrites the first.
pub fn move_to_deleted(path: &Path) -> Result<PathBuf> {
    let deleted_dir = deleted_dir_for(path)?;
    fs::create_dir_all(&deleted_dir)
        .map_err(|e| Error::Move(format!("creating {}: {}", deleted_dir.display(), e)))?;

    let file_name = path
        .file_name()
        .ok_or_else(|| Error::Move(format!("no file name: {}", path.display())))?;

    let destination = free_destination(&deleted_dir, Path::new(file_name));

    fs::rename(path, &destination).map_err(|e| {
        Error::Move(format!(
            "moving {} to {}: {}",
            path.display(),
            destination.display(),
            e
        ))
    })?;

    Ok(destination)
}

/// Moves a previously deleted file back from `destination` to `original`.
///
/// Errors when the trashed file no longer exists (e.g. the user emptied
/// `.deleted` manually); the caller reports this and moves on, it is not
/// fatal. The original parent directory is recreated if needed.
pub fn restore(original: &Path, destination: &Path) -> Result<()> {
    if !destination.exists() {
        return Err(Error::Move(format!(
            "deleted file no longer exists: {}",
            destination.display()
        )));
    }

    if let Some(parent) = original.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::Move(format!("creating {}: {}", parent.display(), e)))?;
    }

    fs::rename(destination, original).map_err(|e| {
        Error::Move(format!(
            "restoring {} to {}: {}",
            destination.display(),
            original.display(),
            e
        ))
    })?;

    Ok(())
}

/// Finds a destination path inside `dir` that does not collide with an
/// existing file, appending a numeric suffix before the extension.
fn free_destination(dir: &Path, file_name: &Path) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let stem = file_name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = file_name
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut counter = 1;
    loop {
        let candidate = dir.join(format!("{}_{}{}", stem, counter, extension));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(name.as_bytes())
            .expect("failed to write test file");
        path
    }

    #[test]
    fn move_to_deleted_creates_directory_and_moves_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let file = create_file(temp_dir.path(), "a.jpg");

        let destination = move_to_deleted(&file).expect("move should succeed");

        assert!(!file.exists());
        assert_eq!(destination, temp_dir.path().join(".deleted").join("a.jpg"));
        assert!(destination.exists());
    }

    #[test]
    fn collision_appends_numeric_suffix() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let first = create_file(temp_dir.path(), "a.jpg");
        move_to_deleted(&first).expect("first move should succeed");

        let second = create_file(temp_dir.path(), "a.jpg");
        let destination = move_to_deleted(&second).expect("second move should succeed");

        assert_eq!(
            destination,
            temp_dir.path().join(".deleted").join("a_1.jpg")
        );
        // The first trashed file is untouched.
        let original = temp_dir.path().join(".deleted").join("a.jpg");
        assert!(original.exists());
    }

    #[test]
    fn repeated_collisions_keep_counting() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for _ in 0..3 {
            let file = create_file(temp_dir.path(), "a.jpg");
            move_to_deleted(&file).expect("move should succeed");
        }

        let deleted = temp_dir.path().join(".deleted");
        assert!(deleted.join("a.jpg").exists());
        assert!(deleted.join("a_1.jpg").exists());
        assert!(deleted.join("a_2.jpg").exists());
    }

    #[test]
    fn collision_handles_files_without_extension() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let first = create_file(temp_dir.path(), "raw_dump");
        move_to_deleted(&first).expect("first move should succeed");

        let second = create_file(temp_dir.path(), "raw_dump");
        let destination = move_to_deleted(&second).expect("second move should succeed");

        assert_eq!(
            destination,
            temp_dir.path().join(".deleted").join("raw_dump_1")
        );
    }

    #[test]
    fn move_of_missing_file_fails_with_move_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("ghost.jpg");

        match move_to_deleted(&missing) {
            Err(Error::Move(_)) => {}
            other => panic!("expected Move error, got {other:?}"),
        }
    }

    #[test]
    fn restore_moves_file_back() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let file = create_file(temp_dir.path(), "b.png");
        let destination = move_to_deleted(&file).expect("move should succeed");

        restore(&file, &destination).expect("restore should succeed");

        assert!(file.exists());
        assert!(!destination.exists());
    }

    #[test]
    fn restore_of_vanished_file_reports_move_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let original = temp_dir.path().join("c.png");
        let vanished = temp_dir.path().join(".deleted").join("c.png");

        match restore(&original, &vanished) {
            Err(Error::Move(message)) => assert!(message.contains("no longer exists")),
            other => panic!("expected Move error, got {other:?}"),
        }
    }

    #[test]
    fn deleted_dir_is_sibling_of_the_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let file = temp_dir.path().join("sub").join("d.jpg");

        let dir = deleted_dir_for(&file).expect("should compute deleted dir");
        assert_eq!(dir, temp_dir.path().join("sub").join(".deleted"));
    }
}

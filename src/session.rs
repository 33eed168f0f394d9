// SPDX-License-Identifier: MPL-2.0
//! In-memory view of a folder's images: the ordered sequence, the current
//! position, and a one-slot undo record for the last deletion.
//!
//! The session is the single source of truth shared by the viewer and the
//! gallery. The gallery reads snapshots (`images()`); every mutation goes
//! through the methods here so the two views can never diverge.

use crate::config::SortOrder;
use crate::directory_scanner;
use crate::error::Result;
use crate::trash;
use std::path::{Path, PathBuf};

/// Record of the last deletion, enough to reverse it.
///
/// Only one level of undo is retained; a second delete overwrites the
/// previous record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoRecord {
    /// Where the file lived before deletion.
    pub original: PathBuf,
    /// Where the file sits inside `.deleted` now.
    pub trashed: PathBuf,
    /// Position the entry held in the sequence.
    pub index: usize,
}

/// Ordered image sequence plus current index and undo slot.
///
/// The current index always points at a still-existing entry, or the
/// session is empty and the index is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    folder: PathBuf,
    images: Vec<PathBuf>,
    current: Option<usize>,
    undo: Option<UndoRecord>,
}

impl Session {
    /// Scans `folder` and builds a session positioned on the first image.
    ///
    /// An empty folder is a valid, empty session; an invalid folder is an
    /// error.
    pub fn open(folder: &Path, sort_order: SortOrder) -> Result<Self> {
        let images = directory_scanner::scan_directory(folder, sort_order)?;
        let current = if images.is_empty() { None } else { Some(0) };

        Ok(Self {
            folder: folder.to_path_buf(),
            images,
            current,
            undo: None,
        })
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Read-only snapshot of the sequence, shared with the gallery.
    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current
            .and_then(|idx| self.images.get(idx))
            .map(|p| p.as_path())
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.images.get(index).map(|p| p.as_path())
    }

    pub fn has_undo(&self) -> bool {
        self.undo.is_some()
    }

    /// Advances to the next image. Clamped: a no-op at the last index.
    /// Returns true when the position changed.
    pub fn next(&mut self) -> bool {
        match self.current {
            Some(idx) if idx + 1 < self.images.len() => {
                self.current = Some(idx + 1);
                true
            }
            _ => false,
        }
    }

    /// Steps back to the previous image. Clamped: a no-op at index 0.
    /// Returns true when the position changed.
    pub fn previous(&mut self) -> bool {
        match self.current {
            Some(idx) if idx > 0 => {
                self.current = Some(idx - 1);
                true
            }
            _ => false,
        }
    }

    /// Jumps to `index`. Only `0 <= index < len` is accepted; anything else
    /// is rejected without a transition. Returns true on success.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.current = Some(index);
            true
        } else {
            false
        }
    }

    /// Deletes the current image by moving it to the sibling `.deleted`
    /// directory, splices it out of the sequence, and records the move for
    /// undo.
    ///
    /// The new current index is `min(i, len-1)`, or `None` when the
    /// sequence empties. Returns the trash destination, or `Ok(None)` when
    /// the session is empty.
    ///
    /// On failure the session is left untouched so the user can retry or
    /// move on.
    pub fn delete_current(&mut self) -> Result<Option<PathBuf>> {
        let Some(index) = self.current else {
            return Ok(None);
        };

        let original = self.images[index].clone();
        let trashed = trash::move_to_deleted(&original)?;

        self.images.remove(index);
        self.current = if self.images.is_empty() {
            None
        } else {
            Some(index.min(self.images.len() - 1))
        };
        self.undo = Some(UndoRecord {
            original,
            trashed: trashed.clone(),
            index,
        });

        Ok(Some(trashed))
    }

    /// Reverses the last deletion, re-inserting the entry at its original
    /// position best-effort (appended when the index is now out of range)
    /// and making it current.
    ///
    /// Returns the index of the restored entry, or `Ok(None)` when there is
    /// nothing to undo. When the trashed file has vanished the record is
    /// cleared (retrying cannot succeed) and the error is propagated for
    /// reporting; the sequence is untouched.
    pub fn undo_delete(&mut self) -> Result<Option<usize>> {
        let Some(record) = self.undo.take() else {
            return Ok(None);
        };

        trash::restore(&record.original, &record.trashed)?;

        let index = record.index.min(self.images.len());
        self.images.insert(index, record.original);
        self.current = Some(index);

        Ok(Some(index))
    }
}

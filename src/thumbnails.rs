// SPDX-License-Identifier: MPL-2.0
//! Demand-driven thumbnail loading for the gallery.
//!
//! Thumbnails are generated in fixed-size batches instead of all at once so
//! the first gallery render stays fast on large folders. The store guards
//! against re-entrant triggering (scroll events arriving while a batch is
//! still decoding are coalesced) and carries a generation counter so
//! results of a batch that outlived its folder are discarded.
//!
//! Which entries still need a batch is derived from cache membership, not
//! from a position counter, so the sequence can be spliced (delete, undo)
//! at any time, including while a batch is in flight, without bookkeeping.
//!
//! Cache entries are never evicted; memory is bounded by folder size.

use iced::widget::image;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Number of thumbnails generated per trigger.
pub const BATCH_SIZE: usize = 5;

/// Maximum edge length of a generated thumbnail, in pixels.
pub const THUMBNAIL_MAX_DIM: u32 = 192;

/// What the gallery should draw for a given entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ThumbState<'a> {
    /// Decoded and cached; draw the handle.
    Loaded(&'a image::Handle),
    /// Decode failed; draw a placeholder, never retried.
    Failed,
    /// Not yet covered by a completed batch.
    Pending,
}

/// Thumbnail cache plus batch-loading state.
#[derive(Debug, Clone, Default)]
pub struct ThumbnailStore {
    cache: HashMap<PathBuf, image::Handle>,
    failed: HashSet<PathBuf>,
    in_flight: bool,
    generation: u64,
}

impl ThumbnailStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation tag to attach to an outgoing batch task.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether a completed batch has settled this path, successfully or
    /// not.
    fn is_resolved(&self, path: &Path) -> bool {
        self.cache.contains_key(path) || self.failed.contains(path)
    }

    /// Drops all progress and bumps the generation so any in-flight batch
    /// result is discarded on arrival. Called when a folder is opened or
    /// closed.
    pub fn invalidate(&mut self) {
        self.cache.clear();
        self.failed.clear();
        self.in_flight = false;
        self.generation += 1;
    }

    /// Claims the next batch: the first unresolved paths of the live
    /// sequence, marking the store in-flight.
    ///
    /// Returns `None` when a batch is already outstanding (triggers are
    /// coalesced, never run concurrently) or when every entry is resolved.
    pub fn next_batch(&mut self, images: &[PathBuf]) -> Option<(u64, Vec<PathBuf>)> {
        if self.in_flight {
            return None;
        }

        let batch: Vec<PathBuf> = images
            .iter()
            .filter(|path| !self.is_resolved(path))
            .take(BATCH_SIZE)
            .cloned()
            .collect();
        if batch.is_empty() {
            return None;
        }

        self.in_flight = true;
        Some((self.generation, batch))
    }

    /// Applies a finished batch. Results tagged with a stale generation
    /// reference a superseded sequence and are dropped; returns whether the
    /// batch was applied.
    ///
    /// Results for paths no longer in the sequence are harmless: they sit
    /// in the cache and are shown again should undo bring the entry back.
    pub fn complete_batch(
        &mut self,
        generation: u64,
        results: Vec<(PathBuf, Option<image::Handle>)>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }

        self.in_flight = false;
        for (path, handle) in results {
            match handle {
                Some(handle) => {
                    self.cache.insert(path, handle);
                }
                None => {
                    self.failed.insert(path);
                }
            }
        }
        true
    }

    /// What to draw for the entry with path `path`.
    pub fn state_for(&self, path: &Path) -> ThumbState<'_> {
        if let Some(handle) = self.cache.get(path) {
            return ThumbState::Loaded(handle);
        }
        if self.failed.contains(path) {
            return ThumbState::Failed;
        }
        ThumbState::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(count: usize) -> Vec<PathBuf> {
        (0..count).map(|i| PathBuf::from(format!("{i:03}.jpg"))).collect()
    }

    fn dummy_handle() -> image::Handle {
        image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    fn complete(store: &mut ThumbnailStore, generation: u64, batch: Vec<PathBuf>) -> bool {
        let results = batch
            .into_iter()
            .map(|p| (p, Some(dummy_handle())))
            .collect();
        store.complete_batch(generation, results)
    }

    fn drain(store: &mut ThumbnailStore, images: &[PathBuf]) {
        while let Some((generation, batch)) = store.next_batch(images) {
            complete(store, generation, batch);
        }
    }

    #[test]
    fn first_batch_claims_batch_size_entries() {
        let images = paths(7);
        let mut store = ThumbnailStore::new();

        let (_, batch) = store.next_batch(&images).expect("batch expected");
        assert_eq!(batch.len(), BATCH_SIZE);
        assert_eq!(batch[0], images[0]);
        assert!(store.is_in_flight());
    }

    #[test]
    fn triggers_while_in_flight_are_coalesced() {
        let images = paths(20);
        let mut store = ThumbnailStore::new();

        let first = store.next_batch(&images);
        assert!(first.is_some());
        // A wheel event and a near-bottom scroll arrive before completion.
        assert!(store.next_batch(&images).is_none());
        assert!(store.next_batch(&images).is_none());
    }

    #[test]
    fn completion_allows_the_next_batch_and_total_never_exceeds_length() {
        let images = paths(7);
        let mut store = ThumbnailStore::new();

        let (generation, batch) = store.next_batch(&images).expect("first batch");
        assert!(complete(&mut store, generation, batch));

        let (generation, batch) = store.next_batch(&images).expect("second batch");
        assert_eq!(batch.len(), 2);
        assert!(complete(&mut store, generation, batch));

        assert!(store.next_batch(&images).is_none());
        assert!(images
            .iter()
            .all(|p| matches!(store.state_for(p), ThumbState::Loaded(_))));
    }

    #[test]
    fn stale_generation_results_are_discarded() {
        let images = paths(7);
        let mut store = ThumbnailStore::new();

        let (old_generation, batch) = store.next_batch(&images).expect("batch expected");
        // Folder changed while decoding.
        store.invalidate();

        assert!(!complete(&mut store, old_generation, batch));
        assert!(!store.is_in_flight());
        assert_eq!(store.state_for(&images[0]), ThumbState::Pending);

        // The new folder can start loading immediately.
        let fresh = paths(3);
        assert!(store.next_batch(&fresh).is_some());
    }

    #[test]
    fn failed_decodes_become_placeholders_not_retries() {
        let images = paths(2);
        let mut store = ThumbnailStore::new();

        let (generation, batch) = store.next_batch(&images).expect("batch expected");
        let results = vec![
            (batch[0].clone(), Some(dummy_handle())),
            (batch[1].clone(), None),
        ];
        assert!(store.complete_batch(generation, results));

        assert!(matches!(
            store.state_for(&images[0]),
            ThumbState::Loaded(_)
        ));
        assert_eq!(store.state_for(&images[1]), ThumbState::Failed);
        // Every entry is resolved: the failed one is not re-requested.
        assert!(store.next_batch(&images).is_none());
    }

    #[test]
    fn unresolved_entries_are_pending() {
        let images = paths(8);
        let mut store = ThumbnailStore::new();
        let (generation, batch) = store.next_batch(&images).expect("batch expected");
        complete(&mut store, generation, batch);

        assert!(matches!(
            store.state_for(&images[2]),
            ThumbState::Loaded(_)
        ));
        assert_eq!(store.state_for(&images[6]), ThumbState::Pending);
    }

    #[test]
    fn deletion_during_an_in_flight_batch_leaves_no_entry_stranded() {
        let mut images = paths(7);
        let mut store = ThumbnailStore::new();

        let (generation, batch) = store.next_batch(&images).expect("batch expected");
        // The user culls an entry inside the batch range before it lands.
        images.remove(2);
        complete(&mut store, generation, batch);

        // The entries that slid into the old range still get batched.
        drain(&mut store, &images);
        assert!(images
            .iter()
            .all(|p| matches!(store.state_for(p), ThumbState::Loaded(_))));
    }

    #[test]
    fn undo_reinsertion_keeps_the_cached_handle() {
        let mut images = paths(4);
        let mut store = ThumbnailStore::new();
        drain(&mut store, &images);

        // Splice an entry out and back, as delete followed by undo does.
        let restored = images.remove(1);
        assert!(store.next_batch(&images).is_none());
        images.insert(1, restored);

        // No decode needed for the restored entry.
        assert!(store.next_batch(&images).is_none());
        assert!(matches!(
            store.state_for(&images[1]),
            ThumbState::Loaded(_)
        ));
    }

    #[test]
    fn invalidate_clears_cache_and_state() {
        let images = paths(3);
        let mut store = ThumbnailStore::new();
        let (generation, batch) = store.next_batch(&images).expect("batch expected");
        complete(&mut store, generation, batch);

        let old_generation = store.generation();
        store.invalidate();

        assert_ne!(store.generation(), old_generation);
        assert_eq!(store.state_for(&images[0]), ThumbState::Pending);
        assert!(store.next_batch(&images).is_some());
    }
}

//! Provides the `TrackSet` structure, an insertion-ordered set of tracks
//! borrowed from the operands of a set operation.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;

use crate::track::Track;

/// A `TrackSet` is a set of tracks, each track represented as a key of an `IndexMap`.
/// * Keys are `&'data Track`, borrowed from the operands; nothing is cloned
///   until `into_tracks` is called.
/// * Keys stay in the order they were first inserted. Re-inserting a track
///   neither moves it nor changes its bookkeeping value.
/// * Each set operation (`Union`, `Diff`, etc) associates a small bookkeeping value
///   with each key. The value type differs from operation to operation.
pub(crate) struct TrackSet<'data, Bookkeeping: Copy> {
    set: IndexMap<&'data Track, Bookkeeping, FxBuildHasher>,
}

impl<'data, Bookkeeping: Copy> TrackSet<'data, Bookkeeping> {
    /// A set holding each distinct track of `tracks`, in first-occurrence
    /// order, every one with bookkeeping value `b`
    pub(crate) fn from_tracks(tracks: &'data [Track], b: Bookkeeping) -> Self {
        let mut set = TrackSet { set: IndexMap::default() };
        for track in tracks {
            set.insert(track, b);
        }
        set
    }

    /// Adds `track` with bookkeeping value `b`, unless it's already present
    pub(crate) fn insert(&mut self, track: &'data Track, b: Bookkeeping) {
        self.set.entry(track).or_insert(b);
    }

    /// Sometimes we need to update the bookkeeping information
    pub(crate) fn get_mut(&mut self, track: &Track) -> Option<&mut Bookkeeping> {
        self.set.get_mut(track)
    }

    /// `IndexMap`'s `.retain` method is `O(n)` and preserves the order of the
    /// keys, so it's safe to expose it. We don't expose `.remove`, because it
    /// doesn't preserve key order, and we don't expose `.shift_remove`, which
    /// does preserve order, because `.shift_remove` is *also* `O(n)`, and using
    /// it to remove elements one by one means `O(n^2)` performance.
    pub(crate) fn retain(&mut self, keep: impl Fn(Bookkeeping) -> bool) {
        self.set.retain(|_k, v| keep(*v));
    }

    /// The set's tracks, in order, as owned values
    pub(crate) fn into_tracks(self) -> Vec<Track> {
        self.set.into_keys().cloned().collect()
    }
}

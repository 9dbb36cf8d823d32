//! Authoritative in-memory set of live tracks.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::tracker::rect::Point;
use crate::tracker::track::{Color, Track};

/// Owns all mutable tracking state: the live tracks, their display colors
/// and the ID allocator. Created fresh per run and passed by reference into
/// each per-frame call; there is no process-wide singleton.
///
/// Tracks are kept in creation order, which makes nearest-centroid ties
/// deterministic (earliest-created track wins).
#[derive(Debug, Default)]
pub struct TrackTable {
    tracks: Vec<Track>,
    colors: HashMap<u64, Color>,
    next_id: u64,
}

impl TrackTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Live tracks in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn get(&self, id: u64) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id() == id)
    }

    /// Display color for a live track; `None` once the track is pruned.
    pub fn color(&self, id: u64) -> Option<Color> {
        self.colors.get(&id).copied()
    }

    pub(crate) fn get_mut(&mut self, id: u64) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.id() == id)
    }

    /// Allocate a fresh identity seeded with one centroid, plus a random
    /// display color. IDs are monotonic and never reused within a run.
    pub(crate) fn spawn(&mut self, centroid: Point, max_history: usize) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.colors.insert(
            id,
            Color {
                r: rand::random(),
                g: rand::random(),
                b: rand::random(),
            },
        );
        self.tracks.push(Track::new(id, centroid, max_history));
        debug!(track_id = id, x = centroid.x, y = centroid.y, "spawned track");
        id
    }

    /// Age every track that went unmatched this frame, then drop the ones
    /// whose counter has reached `retention_frames` along with their colors.
    /// Returns the removed IDs; removal is irreversible.
    pub(crate) fn prune_stale(&mut self, matched: &HashSet<u64>, retention_frames: u32) -> Vec<u64> {
        for track in self.tracks.iter_mut() {
            if !matched.contains(&track.id()) {
                track.mark_missed();
            }
        }

        let mut removed = Vec::new();
        self.tracks.retain(|track| {
            if track.untracked_frames() >= retention_frames {
                removed.push(track.id());
                false
            } else {
                true
            }
        });
        for id in &removed {
            self.colors.remove(id);
            debug!(track_id = id, "pruned stale track");
        }
        removed
    }
}

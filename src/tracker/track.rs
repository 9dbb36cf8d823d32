//! Persistent object identity with a capped position history.

use crate::tracker::rect::Point;
use crate::tracker::smoothing::smooth_positions;

/// Opaque display color assigned once when a track is created, stable for
/// the track's lifetime. A rendering concern, not a tracking invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A persistent object identity maintained across frames.
#[derive(Debug, Clone)]
pub struct Track {
    id: u64,
    positions: Vec<Point>,
    untracked_frames: u32,
    max_history: usize,
}

impl Track {
    pub(crate) fn new(id: u64, centroid: Point, max_history: usize) -> Self {
        Self {
            id,
            positions: vec![centroid],
            untracked_frames: 0,
            max_history,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Accepted centroids in temporal order, oldest first.
    /// Never empty for a live track.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Most recently accepted centroid.
    pub fn last_position(&self) -> Point {
        self.positions[self.positions.len() - 1]
    }

    /// Consecutive frames since the last successful match.
    pub fn untracked_frames(&self) -> u32 {
        self.untracked_frames
    }

    /// Smoothed copy of the position history for drawing trails.
    /// The raw history is left untouched.
    pub fn smoothed_positions(&self) -> Vec<Point> {
        smooth_positions(&self.positions)
    }

    /// Record a matched centroid, evicting the oldest entry once the
    /// history cap is exceeded.
    pub(crate) fn push_position(&mut self, centroid: Point) {
        self.positions.push(centroid);
        if self.positions.len() > self.max_history {
            self.positions.remove(0);
        }
        self.untracked_frames = 0;
    }

    pub(crate) fn mark_missed(&mut self) {
        self.untracked_frames += 1;
    }
}

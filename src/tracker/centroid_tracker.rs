//! Main centroid tracker: per-frame association, lifecycle and record emission.

use std::collections::HashSet;

use tracing::trace;

use crate::tracker::error::TrackerError;
use crate::tracker::matching::{self, Detection, MatchingMode};
use crate::tracker::record::TrackRecord;
use crate::tracker::track_table::TrackTable;

/// Configuration for the centroid tracker. Supplied by the caller and
/// validated once at construction.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Maximum centroid distance for a detection to continue an existing
    /// track; farther detections spawn a new identity.
    pub overlap_distance: f32,
    /// Consecutive unmatched frames before a track is pruned.
    pub retention_frames: u32,
    /// Maximum retained positions per track; oldest entries evicted first.
    pub max_history: usize,
    /// Within-frame detection-to-track matching policy.
    pub matching: MatchingMode,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            overlap_distance: 20.0,
            retention_frames: 30,
            max_history: 100,
            matching: MatchingMode::default(),
        }
    }
}

impl TrackerConfig {
    fn validate(&self) -> Result<(), TrackerError> {
        if self.retention_frames == 0 {
            return Err(TrackerError::InvalidRetention(self.retention_frames));
        }
        if !self.overlap_distance.is_finite() || self.overlap_distance < 0.0 {
            return Err(TrackerError::InvalidOverlapDistance(self.overlap_distance));
        }
        if self.max_history == 0 {
            return Err(TrackerError::InvalidHistoryCap(self.max_history));
        }
        Ok(())
    }
}

/// Frame-sequential multi-object tracker over detection centroids.
///
/// Single-threaded by design: each frame's association, table update,
/// pruning and record emission run to completion before the next frame.
pub struct CentroidTracker {
    table: TrackTable,
    records: Vec<TrackRecord>,
    config: TrackerConfig,
}

impl CentroidTracker {
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        config.validate()?;
        Ok(Self {
            table: TrackTable::new(),
            records: Vec::new(),
            config,
        })
    }

    /// Process one frame's detections.
    ///
    /// Every detection resolves to some track: a match appends the centroid
    /// to that track's history and resets its untracked counter, anything
    /// else spawns a fresh identity. One record per detection is appended
    /// in detection order, then tracks unmatched for `retention_frames`
    /// consecutive frames are pruned. Returns the records emitted for this
    /// frame.
    ///
    /// `frame_no` is supplied by the caller and only echoed into records;
    /// the lifecycle step runs exactly once per call regardless.
    pub fn update(&mut self, frame_no: u32, detections: &[Detection]) -> Vec<TrackRecord> {
        let assignment = matching::associate(
            &self.table,
            detections,
            self.config.overlap_distance,
            self.config.matching,
        );

        let mut assigned: Vec<Option<u64>> = vec![None; detections.len()];
        for &(det_idx, track_id) in &assignment.matches {
            assigned[det_idx] = Some(track_id);
        }

        let mut touched = HashSet::new();
        let emitted_from = self.records.len();

        for (det, slot) in detections.iter().zip(&assigned) {
            let track_id = match slot {
                Some(id) => {
                    if let Some(track) = self.table.get_mut(*id) {
                        track.push_position(det.centroid);
                    }
                    *id
                }
                None => self.table.spawn(det.centroid, self.config.max_history),
            };
            touched.insert(track_id);
            self.records.push(TrackRecord {
                frame: frame_no,
                track_id,
                x: det.centroid.x,
                y: det.centroid.y,
            });
        }

        let removed = self
            .table
            .prune_stale(&touched, self.config.retention_frames);

        trace!(
            frame = frame_no,
            detections = detections.len(),
            live = self.table.len(),
            pruned = removed.len(),
            "frame processed"
        );

        self.records[emitted_from..].to_vec()
    }

    /// Read accessor over the live tracks, e.g. for drawing current and
    /// trailing positions.
    pub fn tracks(&self) -> &TrackTable {
        &self.table
    }

    /// All records accumulated so far, in emission order.
    pub fn records(&self) -> &[TrackRecord] {
        &self.records
    }

    /// Hand the accumulated record sequence to an external sink.
    pub fn into_records(self) -> Vec<TrackRecord> {
        self.records
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}

//! TrackerPipeline for combining a detection source with tracking.

use tracing::info;

use crate::tracker::{CentroidTracker, TrackRecord, TrackTable, TrackerConfig, TrackerError};

use super::DetectionSource;

/// A combined pipeline that bundles a per-frame detection source with the
/// centroid tracker.
///
/// The pipeline owns the frame counter: frames are numbered from 1 in the
/// order the source yields them, and processing is strictly frame
/// sequential.
pub struct TrackerPipeline<D: DetectionSource> {
    source: D,
    tracker: CentroidTracker,
    frame_no: u32,
}

impl<D: DetectionSource> TrackerPipeline<D> {
    /// Create a new tracking pipeline with the given source and tracker
    /// config. Fails fast on an invalid configuration.
    pub fn new(source: D, config: TrackerConfig) -> Result<Self, TrackerError> {
        Ok(Self {
            source,
            tracker: CentroidTracker::new(config)?,
            frame_no: 0,
        })
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(source: D) -> Result<Self, TrackerError> {
        Self::new(source, TrackerConfig::default())
    }

    /// Pull and process a single frame.
    ///
    /// Returns the records emitted for that frame, or `Ok(None)` once the
    /// source is exhausted. A source error leaves the tracker untouched for
    /// the failing frame; records from completed frames are retained.
    pub fn step(&mut self) -> Result<Option<Vec<TrackRecord>>, D::Error> {
        let Some(detections) = self.source.next_frame()? else {
            return Ok(None);
        };
        self.frame_no += 1;
        Ok(Some(self.tracker.update(self.frame_no, &detections)))
    }

    /// Run the source to exhaustion.
    pub fn run(&mut self) -> Result<(), D::Error> {
        while self.step()?.is_some() {}
        info!(
            frames = self.frame_no,
            records = self.tracker.records().len(),
            "detection source exhausted"
        );
        Ok(())
    }

    /// Number of frames processed so far.
    pub fn frame_no(&self) -> u32 {
        self.frame_no
    }

    /// Live tracks, e.g. for drawing last-known positions of currently
    /// unmatched objects.
    pub fn tracks(&self) -> &TrackTable {
        self.tracker.tracks()
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &CentroidTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut CentroidTracker {
        &mut self.tracker
    }

    /// Get a reference to the underlying detection source.
    pub fn source(&self) -> &D {
        &self.source
    }

    /// Get a mutable reference to the underlying detection source.
    pub fn source_mut(&mut self) -> &mut D {
        &mut self.source
    }

    /// Finish the run and hand the accumulated records to an external sink.
    pub fn into_records(self) -> Vec<TrackRecord> {
        self.tracker.into_records()
    }
}

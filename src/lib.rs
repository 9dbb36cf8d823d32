//! Centroid-based multi-object tracking with persistent identities.
//!
//! Per frame, detections from an upstream vision collaborator are matched
//! against known tracks by nearest-centroid distance; unmatched detections
//! spawn new identities and identities that go unseen for too many
//! consecutive frames are retired. One [`TrackRecord`] is emitted per
//! (frame, detection) pair for tabular export.
//!
//! Foreground extraction, video I/O and overlay drawing stay outside this
//! crate; feed centroids in through a [`DetectionSource`] or directly via
//! [`CentroidTracker::update`].

pub mod integration;
pub mod tracker;

pub use integration::{DetectionBuilder, DetectionSource, IntoDetections, TrackerPipeline};
pub use tracker::{
    CentroidTracker, Detection, MatchingMode, TrackRecord, TrackerConfig, TrackerError,
};

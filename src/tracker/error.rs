use thiserror::Error;

/// Caller-contract violations.
///
/// The tracker has no recoverable failures of its own: every detection
/// resolves to some track and every frame terminates. These errors surface
/// before any tracking state exists (configuration) or before a detection
/// enters the table (construction).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TrackerError {
    #[error("retention threshold must be at least one frame (got {0})")]
    InvalidRetention(u32),
    #[error("overlap distance must be finite and non-negative (got {0})")]
    InvalidOverlapDistance(f32),
    #[error("position history cap must hold at least one entry (got {0})")]
    InvalidHistoryCap(usize),
    #[error("detection has no centroid and no bounding box to derive one from")]
    MissingCentroid,
}

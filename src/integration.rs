//! Integration layer connecting upstream detection collaborators to the tracker.
//!
//! Video decoding, foreground masking, contour extraction and overlay
//! drawing all stay outside this crate. Implement [`DetectionSource`] over
//! whatever produces per-frame centroids and drive it with
//! [`TrackerPipeline`].

mod builder;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use pipeline::TrackerPipeline;

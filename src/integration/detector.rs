//! Trait for per-frame detection sources.

use crate::tracker::Detection;

/// Trait for upstream per-frame detection providers.
///
/// Implement this over whatever extracts foreground blobs (background
/// subtraction, thresholding, contouring) to feed the tracker.
///
/// # Example
///
/// ```ignore
/// use blobtrack_rs::{Detection, DetectionSource};
///
/// struct MaskContourSource {
///     // Your frame reader and mask pipeline here
/// }
///
/// impl DetectionSource for MaskContourSource {
///     type Error = std::io::Error;
///
///     fn next_frame(&mut self) -> Result<Option<Vec<Detection>>, Self::Error> {
///         // Decode a frame, extract contours, return their centroids;
///         // Ok(None) once the video ends.
///         Ok(None)
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for source failures.
    type Error;

    /// Yield the next frame's detections; order within a frame is
    /// unspecified.
    ///
    /// `Ok(None)` signals normal end of stream, not an error: processing
    /// stops and already-accumulated records are kept.
    fn next_frame(&mut self) -> Result<Option<Vec<Detection>>, Self::Error>;
}

/// Helper trait for converting collaborator-specific outputs to detections.
pub trait IntoDetections {
    /// Convert the output into a vector of detections.
    fn into_detections(self) -> Vec<Detection>;
}

impl IntoDetections for Vec<Detection> {
    fn into_detections(self) -> Vec<Detection> {
        self
    }
}

impl IntoDetections for Vec<(i32, i32)> {
    fn into_detections(self) -> Vec<Detection> {
        self.into_iter().map(|(x, y)| Detection::new(x, y)).collect()
    }
}

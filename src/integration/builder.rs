//! Builder for creating Detection values from various upstream formats.

use crate::tracker::{Detection, Point, Rect, TrackerError};

/// Builder for `Detection` values coming out of contour extraction.
///
/// The centroid may be given directly or derived from a bounding box;
/// a detection with neither is a caller-contract violation and fails fast.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectionBuilder {
    centroid: Option<Point>,
    bbox: Option<Rect>,
}

impl DetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the centroid directly.
    pub fn centroid(mut self, x: i32, y: i32) -> Self {
        self.centroid = Some(Point::new(x, y));
        self
    }

    /// Set the bounding box in TLWH format (top-left x, top-left y, width,
    /// height). Also provides the centroid when none was set explicitly.
    pub fn bbox(mut self, x: i32, y: i32, width: i32, height: i32) -> Self {
        self.bbox = Some(Rect::new(x, y, width, height));
        self
    }

    /// Build the final `Detection`.
    pub fn build(self) -> Result<Detection, TrackerError> {
        let centroid = match (self.centroid, self.bbox) {
            (Some(c), _) => c,
            (None, Some(b)) => b.center(),
            (None, None) => return Err(TrackerError::MissingCentroid),
        };
        Ok(Detection {
            centroid,
            bbox: self.bbox,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid_derived_from_bbox() {
        let det = DetectionBuilder::new().bbox(100, 200, 10, 20).build().unwrap();
        assert_eq!(det.centroid, Point::new(105, 210));
        assert_eq!(det.bbox, Some(Rect::new(100, 200, 10, 20)));
    }

    #[test]
    fn test_explicit_centroid_wins() {
        let det = DetectionBuilder::new()
            .bbox(0, 0, 10, 10)
            .centroid(3, 4)
            .build()
            .unwrap();
        assert_eq!(det.centroid, Point::new(3, 4));
    }

    #[test]
    fn test_missing_centroid_fails_fast() {
        assert_eq!(
            DetectionBuilder::new().build().err(),
            Some(TrackerError::MissingCentroid)
        );
    }
}

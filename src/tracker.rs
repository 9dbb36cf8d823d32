mod centroid_tracker;
mod error;
mod matching;
mod record;
mod rect;
mod smoothing;
mod track;
mod track_table;

pub use centroid_tracker::{CentroidTracker, TrackerConfig};
pub use error::TrackerError;
pub use matching::{AssignmentResult, Detection, MatchingMode, associate, distance_matrix};
pub use record::TrackRecord;
pub use rect::{Point, Rect};
pub use smoothing::smooth_positions;
pub use track::{Color, Track};
pub use track_table::TrackTable;

//! Tracking output records.

use serde::Serialize;

/// One immutable output row per (frame, detection) resolution, appended in
/// processing order and never mutated after emission.
///
/// Serialized field names match the tabular header expected by downstream
/// sinks (`Frame`, `Object ID`, `Center X`, `Center Y`); the sink itself
/// chooses the storage format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackRecord {
    #[serde(rename = "Frame")]
    pub frame: u32,
    #[serde(rename = "Object ID")]
    pub track_id: u64,
    #[serde(rename = "Center X")]
    pub x: i32,
    #[serde(rename = "Center Y")]
    pub y: i32,
}

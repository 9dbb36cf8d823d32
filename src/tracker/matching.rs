//! Detection-to-track association.

use ndarray::Array2;

use crate::tracker::rect::{Point, Rect};
use crate::tracker::track_table::TrackTable;

/// Detection input for the tracker: one candidate object extracted from a
/// single frame by the upstream vision collaborator.
#[derive(Debug, Clone, Copy)]
pub struct Detection {
    pub centroid: Point,
    pub bbox: Option<Rect>,
}

impl Detection {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            centroid: Point::new(x, y),
            bbox: None,
        }
    }

    /// Detection carrying its bounding box, centroid derived from it.
    pub fn with_bbox(bbox: Rect) -> Self {
        Self {
            centroid: bbox.center(),
            bbox: Some(bbox),
        }
    }
}

/// How detections claim existing tracks within one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchingMode {
    /// Each detection independently claims its nearest track; several
    /// detections in one frame may extend the same track (e.g. multiple
    /// partial detections of one real object).
    #[default]
    GreedyIndependent,
    /// Globally optimal one-to-one assignment; each track is extended by
    /// at most one detection per frame.
    OneToOne,
}

#[derive(Debug, Clone)]
pub struct AssignmentResult {
    /// (detection index, matched track ID), in detection order.
    pub matches: Vec<(usize, u64)>,
    /// Detection indices with no live track within the overlap distance.
    pub unmatched_detections: Vec<usize>,
}

/// Match a frame's detections against the live tracks.
///
/// A detection can only continue a track whose most recent position is
/// strictly closer than `overlap_distance`; anything else must spawn.
/// Ties go to the earliest-created track.
pub fn associate(
    table: &TrackTable,
    detections: &[Detection],
    overlap_distance: f32,
    mode: MatchingMode,
) -> AssignmentResult {
    match mode {
        MatchingMode::GreedyIndependent => associate_greedy(table, detections, overlap_distance),
        MatchingMode::OneToOne => associate_one_to_one(table, detections, overlap_distance),
    }
}

fn associate_greedy(
    table: &TrackTable,
    detections: &[Detection],
    overlap_distance: f32,
) -> AssignmentResult {
    let mut matches = Vec::new();
    let mut unmatched_detections = Vec::new();

    for (idx, det) in detections.iter().enumerate() {
        let mut best: Option<(u64, f32)> = None;
        for track in table.iter() {
            let dist = track.last_position().distance(&det.centroid);
            if dist < overlap_distance && best.is_none_or(|(_, d)| dist < d) {
                best = Some((track.id(), dist));
            }
        }
        match best {
            Some((id, _)) => matches.push((idx, id)),
            None => unmatched_detections.push(idx),
        }
    }

    AssignmentResult {
        matches,
        unmatched_detections,
    }
}

fn associate_one_to_one(
    table: &TrackTable,
    detections: &[Detection],
    overlap_distance: f32,
) -> AssignmentResult {
    let num_tracks = table.len();
    let num_dets = detections.len();

    if num_tracks == 0 || num_dets == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_detections: (0..num_dets).collect(),
        };
    }

    let costs = distance_matrix(table, detections);

    let size = num_tracks.max(num_dets);
    let mut padded = Array2::<f64>::from_elem((size, size), 1e6);
    for i in 0..num_tracks {
        for j in 0..num_dets {
            padded[[i, j]] = costs[[i, j]] as f64;
        }
    }

    let track_ids: Vec<u64> = table.iter().map(|t| t.id()).collect();
    let mut matches = Vec::new();
    let mut matched_mask = vec![false; num_dets];

    if let Ok((row_to_col, _)) = lapjv::lapjv(&padded) {
        for (row_idx, &col_idx) in row_to_col.iter().enumerate() {
            if row_idx >= num_tracks || col_idx >= num_dets {
                continue;
            }
            if costs[[row_idx, col_idx]] < overlap_distance {
                matches.push((col_idx, track_ids[row_idx]));
                matched_mask[col_idx] = true;
            }
        }
    }

    let unmatched_detections = matched_mask
        .iter()
        .enumerate()
        .filter_map(|(i, &m)| if m { None } else { Some(i) })
        .collect();

    matches.sort_by_key(|&(det_idx, _)| det_idx);

    AssignmentResult {
        matches,
        unmatched_detections,
    }
}

/// Pairwise centroid distances between the live tracks' last positions and
/// the frame's detections.
///
/// Returns a matrix of shape (T, D) with tracks on rows (creation order)
/// and detections on columns.
pub fn distance_matrix(table: &TrackTable, detections: &[Detection]) -> Array2<f32> {
    let mut dists = Array2::zeros((table.len(), detections.len()));
    for (i, track) in table.iter().enumerate() {
        let last = track.last_position();
        for (j, det) in detections.iter().enumerate() {
            dists[[i, j]] = last.distance(&det.centroid);
        }
    }
    dists
}

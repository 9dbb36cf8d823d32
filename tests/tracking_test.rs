use blobtrack_rs::{CentroidTracker, Detection, MatchingMode, TrackerConfig};

fn tracker() -> CentroidTracker {
    CentroidTracker::new(TrackerConfig::default()).unwrap()
}

#[test]
fn test_identity_persists_across_small_motion() {
    let mut tracker = tracker();

    // Same object drifting a few pixels per frame, well under the
    // 20.0 overlap distance.
    let recs1 = tracker.update(1, &[Detection::new(100, 150)]);
    let recs2 = tracker.update(2, &[Detection::new(105, 152)]);
    let recs3 = tracker.update(3, &[Detection::new(110, 155)]);

    let id = recs1[0].track_id;
    assert_eq!(recs2[0].track_id, id);
    assert_eq!(recs3[0].track_id, id);
    assert_eq!(tracker.tracks().len(), 1);

    let track = tracker.tracks().get(id).unwrap();
    assert_eq!(track.positions().len(), 3);
    assert_eq!(track.last_position().x, 110);
}

#[test]
fn test_distant_detection_spawns_new_identity() {
    let mut tracker = tracker();

    let recs1 = tracker.update(1, &[Detection::new(100, 150)]);
    let recs2 = tracker.update(2, &[Detection::new(500, 500)]);

    assert_ne!(recs1[0].track_id, recs2[0].track_id);
    assert_eq!(tracker.tracks().len(), 2);
}

#[test]
fn test_stale_track_pruned_on_exact_retention_frame() {
    let mut tracker = tracker();

    let recs = tracker.update(1, &[Detection::new(100, 150)]);
    let id = recs[0].track_id;

    // 29 empty frames: still live, counter at 29.
    for frame in 2..=30 {
        tracker.update(frame, &[]);
    }
    let track = tracker.tracks().get(id).unwrap();
    assert_eq!(track.untracked_frames(), 29);

    // The 30th consecutive unmatched frame prunes it.
    tracker.update(31, &[]);
    assert!(tracker.tracks().get(id).is_none());
    assert!(tracker.tracks().is_empty());
}

#[test]
fn test_greedy_matching_lets_detections_share_a_track() {
    let mut tracker = tracker();

    tracker.update(1, &[Detection::new(100, 100)]);

    // Two detections, both within the overlap distance of the only track.
    let recs = tracker.update(2, &[Detection::new(95, 100), Detection::new(105, 100)]);
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].track_id, recs[1].track_id);
    assert_eq!(tracker.tracks().len(), 1);

    // Both centroids were appended to the shared history.
    let track = tracker.tracks().get(recs[0].track_id).unwrap();
    assert_eq!(track.positions().len(), 3);
}

#[test]
fn test_one_to_one_matching_spawns_for_second_detection() {
    let config = TrackerConfig {
        matching: MatchingMode::OneToOne,
        ..TrackerConfig::default()
    };
    let mut tracker = CentroidTracker::new(config).unwrap();

    tracker.update(1, &[Detection::new(100, 100)]);
    let recs = tracker.update(2, &[Detection::new(95, 100), Detection::new(105, 100)]);

    assert_eq!(recs.len(), 2);
    assert_ne!(recs[0].track_id, recs[1].track_id);
    assert_eq!(tracker.tracks().len(), 2);
}

#[test]
fn test_records_reference_tracks_live_at_emission() {
    let mut tracker = tracker();

    let frames: &[&[Detection]] = &[
        &[Detection::new(10, 10), Detection::new(400, 400)],
        &[Detection::new(12, 11)],
        &[],
        &[Detection::new(14, 12), Detection::new(200, 200)],
    ];
    for (i, dets) in frames.iter().enumerate() {
        let recs = tracker.update(i as u32 + 1, dets);
        assert_eq!(recs.len(), dets.len());
        for rec in recs {
            assert!(tracker.tracks().get(rec.track_id).is_some());
            assert_eq!(rec.frame, i as u32 + 1);
        }
    }

    // The accumulated sequence holds one row per (frame, detection) pair.
    assert_eq!(tracker.records().len(), 5);
}

#[test]
fn test_position_history_is_fifo_capped() {
    let config = TrackerConfig {
        max_history: 5,
        ..TrackerConfig::default()
    };
    let mut tracker = CentroidTracker::new(config).unwrap();

    for frame in 1..=8 {
        tracker.update(frame, &[Detection::new(frame as i32, 0)]);
    }

    let track = tracker.tracks().iter().next().unwrap();
    assert_eq!(track.positions().len(), 5);
    assert_eq!(track.positions()[0].x, 4); // frames 1..=3 evicted
    assert_eq!(track.last_position().x, 8);
}

#[test]
fn test_pruned_id_never_reappears() {
    let config = TrackerConfig {
        retention_frames: 1,
        ..TrackerConfig::default()
    };
    let mut tracker = CentroidTracker::new(config).unwrap();

    let first = tracker.update(1, &[Detection::new(100, 100)])[0].track_id;
    // Far-away detection: spawns a new track while the first one goes
    // unmatched and is pruned immediately.
    let second = tracker.update(2, &[Detection::new(500, 500)])[0].track_id;
    assert_ne!(second, first);
    assert!(tracker.tracks().get(first).is_none());

    // A detection right on the pruned track's last position gets a brand
    // new identity, never the retired one.
    let third = tracker.update(3, &[Detection::new(100, 100)])[0].track_id;
    assert_ne!(third, first);
    assert_ne!(third, second);
}

#[test]
fn test_color_stable_for_track_lifetime_then_dropped() {
    let config = TrackerConfig {
        retention_frames: 2,
        ..TrackerConfig::default()
    };
    let mut tracker = CentroidTracker::new(config).unwrap();

    let id = tracker.update(1, &[Detection::new(50, 50)])[0].track_id;
    let color = tracker.tracks().color(id).unwrap();

    tracker.update(2, &[Detection::new(52, 51)]);
    assert_eq!(tracker.tracks().color(id), Some(color));

    tracker.update(3, &[]);
    tracker.update(4, &[]);
    assert!(tracker.tracks().get(id).is_none());
    assert!(tracker.tracks().color(id).is_none());
}

#[test]
fn test_smoothed_trail_preserves_raw_history() {
    let mut tracker = tracker();
    for (frame, x) in [(1, 0), (2, 3), (3, 6), (4, 9)] {
        tracker.update(frame, &[Detection::new(x, 0)]);
    }

    let track = tracker.tracks().iter().next().unwrap();
    let smoothed = track.smoothed_positions();

    // Uniform linear motion is a fixed point of the smoother, and the raw
    // history is never replaced by the smoothed output.
    assert_eq!(smoothed, track.positions().to_vec());
    assert_eq!(track.positions().len(), 4);
}

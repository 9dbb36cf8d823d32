//! Display-quality trajectory smoothing.

use crate::tracker::rect::Point;

/// 3-tap moving average over a position history.
///
/// Sequences shorter than two elements are returned unchanged. Otherwise
/// the first and last points pass through and every interior point `i`
/// becomes the integer-truncated mean of points `i-1`, `i`, `i+1` in each
/// coordinate. Single pass; the output is for rendering/export only and is
/// never written back into the stored history.
pub fn smooth_positions(positions: &[Point]) -> Vec<Point> {
    if positions.len() < 2 {
        return positions.to_vec();
    }

    let last = positions.len() - 1;
    positions
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i == 0 || i == last {
                *p
            } else {
                let prev = positions[i - 1];
                let next = positions[i + 1];
                Point::new((prev.x + p.x + next.x) / 3, (prev.y + p.y + next.y) / 3)
            }
        })
        .collect()
}

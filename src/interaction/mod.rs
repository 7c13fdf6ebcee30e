use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

/// Entry picked by a tap, in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub x: f64,
    pub y: f64,
    /// Index of the series; always 0 for the single-series widget.
    pub data_set_index: usize,
    pub entry_index: usize,
}

impl Highlight {
    #[must_use]
    pub fn for_entry(entry_index: usize, entry: DataPoint) -> Self {
        Self {
            x: entry.x,
            y: entry.y,
            data_set_index: 0,
            entry_index,
        }
    }
}

/// Finds the entry closest to `(x, y)` in data coordinates.
///
/// Horizontal distance decides first, vertical distance breaks ties, and the
/// lowest index wins a full tie. Non-finite taps and empty series select
/// nothing.
#[must_use]
pub fn nearest_entry(points: &[DataPoint], x: f64, y: f64) -> Option<(usize, DataPoint)> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }

    points
        .iter()
        .copied()
        .enumerate()
        .min_by(|(left_index, left), (right_index, right)| {
            (left.x - x)
                .abs()
                .total_cmp(&(right.x - x).abs())
                .then_with(|| (left.y - y).abs().total_cmp(&(right.y - y).abs()))
                .then_with(|| left_index.cmp(right_index))
        })
}

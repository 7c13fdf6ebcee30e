use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

/// First and last x of the generated placeholder series (inclusive).
pub const SYNTHETIC_X_START: i64 = 5;
pub const SYNTHETIC_X_END: i64 = 10;

/// Label→count input accepted by dataset assignment, kept in insertion order.
pub type CountsByLabel = IndexMap<String, i64>;

/// The single labeled series a widget renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub points: Vec<DataPoint>,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    /// Builds a dataset from label→count input.
    ///
    /// Counts become `y` values at `x = 0, 1, 2, ...` in insertion order. An
    /// empty mapping yields a placeholder series: one point per
    /// `x` in `5..=10` with `y` drawn uniformly from `1..=x`.
    pub fn synthesize<R: Rng>(
        counts: &CountsByLabel,
        label: impl Into<String>,
        rng: &mut R,
    ) -> Self {
        let points = if counts.is_empty() {
            synthetic_points(rng)
        } else {
            counts
                .values()
                .enumerate()
                .map(|(index, count)| DataPoint::new(index as f64, *count as f64))
                .collect()
        };
        Self::new(label, points)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn synthetic_points<R: Rng>(rng: &mut R) -> Vec<DataPoint> {
    (SYNTHETIC_X_START..=SYNTHETIC_X_END)
        .map(|x| DataPoint::new(x as f64, rng.random_range(1..=x) as f64))
        .collect()
}

/// One-shot holder for the widget's dataset.
///
/// `Empty -> Populated` is the only transition; `Populated` is terminal and
/// further assignments are rejected without touching the stored dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DatasetSlot {
    #[default]
    Empty,
    Populated(Dataset),
}

impl DatasetSlot {
    /// Stores `dataset` if the slot is still empty.
    ///
    /// Returns `true` when the transition happened. `build` is only invoked
    /// on the transitioning call so a rejected assignment costs nothing and
    /// draws no random numbers.
    pub fn populate_with(&mut self, build: impl FnOnce() -> Dataset) -> bool {
        match self {
            Self::Empty => {
                *self = Self::Populated(build());
                true
            }
            Self::Populated(_) => false,
        }
    }

    #[must_use]
    pub fn is_populated(&self) -> bool {
        matches!(self, Self::Populated(_))
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            Self::Empty => None,
            Self::Populated(dataset) => Some(dataset),
        }
    }
}

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// Dash segment lengths in points, alternating painted and skipped runs.
pub type DashSegments = SmallVec<[f64; 6]>;

/// Stroke pattern of the series line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinePattern {
    /// Solid stroke. Encoded as a single zero-length segment.
    #[default]
    None,
    Single,
    Double,
    Triple,
    Tiny,
}

impl LinePattern {
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Single,
        Self::Double,
        Self::Triple,
        Self::Tiny,
    ];

    /// Fixed dash table; these lengths are part of the public contract.
    #[must_use]
    pub fn dash_segments(self) -> DashSegments {
        match self {
            Self::None => smallvec![0.0],
            Self::Single => smallvec![10.0],
            Self::Double => smallvec![10.0, 3.0, 10.0, 10.0],
            Self::Triple => smallvec![10.0, 3.0, 10.0, 3.0, 10.0, 10.0],
            Self::Tiny => smallvec![5.0],
        }
    }

    /// Returns `true` when the stroke should be drawn as one continuous run.
    #[must_use]
    pub fn is_solid(self) -> bool {
        self.dash_segments().iter().all(|segment| *segment <= 0.0)
    }
}

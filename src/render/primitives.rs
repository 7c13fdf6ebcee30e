use serde::{Deserialize, Serialize};

/// RGBA color in normalized 0..=1 channel values.
///
/// Channels are stored as given; out-of-range values are only clamped by
/// drawing backends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Neutral accent used as the default series color.
    pub const SYSTEM_BLUE: Self = Self::rgb(0.0, 122.0 / 255.0, 1.0);
    /// Theme foreground used as the default fill color.
    pub const LABEL: Self = Self::BLACK;

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Same color with `alpha` replacing the current alpha channel.
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Channels clamped into `[0, 1]`, non-finite channels mapped to 0.
    #[must_use]
    pub fn clamped(self) -> Self {
        fn channel(value: f64) -> f64 {
            if value.is_finite() {
                value.clamp(0.0, 1.0)
            } else {
                0.0
            }
        }
        Self::rgba(
            channel(self.red),
            channel(self.green),
            channel(self.blue),
            channel(self.alpha),
        )
    }
}

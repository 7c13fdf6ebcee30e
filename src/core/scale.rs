use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Axis along which a `LinearScale` maps into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleAxis {
    /// Grows left to right across `Viewport::width`.
    Horizontal,
    /// Grows bottom to top across `Viewport::height`.
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    axis: ScaleAxis,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64, axis: ScaleAxis) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            axis,
        })
    }

    /// Builds a scale over `[min, max]`, widening a degenerate domain by one
    /// unit on each side so single-valued series still map.
    pub fn covering(min: f64, max: f64, axis: ScaleAxis) -> ChartResult<Self> {
        if min == max {
            return Self::new(min - 1.0, max + 1.0, axis);
        }
        Self::new(min, max, axis)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(match self.axis {
            ScaleAxis::Horizontal => normalized * f64::from(viewport.width),
            ScaleAxis::Vertical => (1.0 - normalized) * f64::from(viewport.height),
        })
    }

    pub fn pixel_to_domain(self, pixel: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = match self.axis {
            ScaleAxis::Horizontal => pixel / f64::from(viewport.width),
            ScaleAxis::Vertical => 1.0 - pixel / f64::from(viewport.height),
        };
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, ScaleAxis};
    use crate::core::Viewport;

    #[test]
    fn vertical_scale_puts_domain_start_at_bottom_edge() {
        let viewport = Viewport::new(200, 100);
        let scale = LinearScale::new(0.0, 10.0, ScaleAxis::Vertical).expect("scale");

        assert_eq!(scale.domain_to_pixel(0.0, viewport).expect("px"), 100.0);
        assert_eq!(scale.domain_to_pixel(10.0, viewport).expect("px"), 0.0);
        assert_eq!(scale.pixel_to_domain(50.0, viewport).expect("value"), 5.0);
    }

    #[test]
    fn covering_widens_degenerate_domain() {
        let scale = LinearScale::covering(3.0, 3.0, ScaleAxis::Horizontal).expect("scale");
        assert_eq!(scale.domain(), (2.0, 4.0));
    }

    #[test]
    fn rejects_invalid_viewport() {
        let scale = LinearScale::new(0.0, 1.0, ScaleAxis::Horizontal).expect("scale");
        assert!(scale.domain_to_pixel(0.5, Viewport::new(0, 10)).is_err());
    }
}

use crate::array;

use super::ContinuousNumericScale;

#[derive(Clone, Debug)]
pub struct LinearScaleConfig {
    pub domain: (f32, f32),
    pub range: (f32, f32),
    pub clamp: bool,
    pub round: bool,
    pub nice: Option<usize>,
}

impl Default for LinearScaleConfig {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
            round: false,
            nice: None,
        }
    }
}

/// A linear scale that maps numeric values from a domain to a range by
/// affine interpolation. Values outside the domain extrapolate unless
/// clamping is enabled.
#[derive(Clone, Debug)]
pub struct LinearScale {
    domain_start: f32,
    domain_end: f32,
    range_start: f32,
    range_end: f32,
    clamp: bool,
    round: bool,
}

impl LinearScale {
    /// Creates a new linear scale with default domain [0, 1] and range [0, 1]
    pub fn new(config: &LinearScaleConfig) -> Self {
        let mut this = Self {
            domain_start: config.domain.0,
            domain_end: config.domain.1,
            range_start: config.range.0,
            range_end: config.range.1,
            clamp: config.clamp,
            round: config.round,
        };

        if let Some(nice) = config.nice {
            this = this.nice(Some(nice));
        }

        this
    }

    /// Extends the domain to nice round numbers for better tick selection
    pub fn nice(mut self, count: Option<usize>) -> Self {
        if self.domain_start == self.domain_end
            || self.domain_start.is_nan()
            || self.domain_end.is_nan()
        {
            return self;
        }

        let reversed = self.domain_start > self.domain_end;
        let (mut start, mut stop) = if reversed {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };

        let count = count.unwrap_or(10);
        let mut prestep = 0.0;
        let mut max_iter = 10;

        // Widening the bounds can change the step; iterate until the step
        // stops moving.
        while max_iter > 0 {
            let step = array::tick_increment(start, stop, count as f32);

            if step == prestep {
                break;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }

            prestep = step;
            max_iter -= 1;
        }

        if reversed {
            self.domain_start = stop;
            self.domain_end = start;
        } else {
            self.domain_start = start;
            self.domain_end = stop;
        }
        self
    }

    pub fn with_domain(mut self, domain: (f32, f32)) -> Self {
        self.domain_start = domain.0;
        self.domain_end = domain.1;
        self
    }

    pub fn with_range(mut self, range: (f32, f32)) -> Self {
        self.range_start = range.0;
        self.range_end = range.1;
        self
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    fn degenerate(&self) -> bool {
        self.domain_start == self.domain_end
            || self.range_start == self.range_end
            || self.domain_start.is_nan()
            || self.domain_end.is_nan()
            || self.range_start.is_nan()
            || self.range_end.is_nan()
    }
}

impl ContinuousNumericScale for LinearScale {
    fn domain(&self) -> (f32, f32) {
        (self.domain_start, self.domain_end)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_start, self.range_end)
    }

    fn clamp(&self) -> bool {
        self.clamp
    }

    /// Maps a value from domain to range. Zero-width domains and ranges
    /// collapse to `range.0` rather than dividing by zero.
    fn scale(&self, value: f32) -> f32 {
        if self.degenerate() {
            return self.range_start;
        }

        let factor = (self.range_end - self.range_start) / (self.domain_end - self.domain_start);
        let offset = self.range_start - factor * self.domain_start;

        let mut v = factor * value + offset;
        if self.clamp {
            let (range_min, range_max) = if self.range_start <= self.range_end {
                (self.range_start, self.range_end)
            } else {
                (self.range_end, self.range_start)
            };
            v = v.clamp(range_min, range_max);
        }
        if self.round {
            v = v.round();
        }
        v
    }

    /// Maps a range value back to the domain
    fn invert(&self, value: f32) -> f32 {
        if self.degenerate() {
            return self.domain_start;
        }

        let factor = (self.domain_end - self.domain_start) / (self.range_end - self.range_start);
        let offset = self.domain_start - factor * self.range_start;

        let v = if self.clamp {
            let (range_min, range_max) = if self.range_start <= self.range_end {
                (self.range_start, self.range_end)
            } else {
                (self.range_end, self.range_start)
            };
            value.clamp(range_min, range_max)
        } else {
            value
        };

        factor * v + offset
    }

    /// Generates evenly spaced tick values within the domain
    fn ticks(&self, count: Option<f32>) -> Vec<f32> {
        let count = count.unwrap_or(10.0);
        array::ticks(self.domain_start, self.domain_end, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_defaults() {
        let scale = LinearScale::new(&Default::default());
        assert_eq!(scale.domain(), (0.0, 1.0));
        assert_eq!(scale.range(), (0.0, 1.0));
        assert!(!scale.clamp());
    }

    #[test]
    fn test_scale_interpolates_and_extrapolates() {
        let scale = LinearScale::new(&LinearScaleConfig {
            domain: (0.0, 10.0),
            range: (0.0, 100.0),
            ..Default::default()
        });

        assert_approx_eq!(f32, scale.scale(0.0), 0.0);
        assert_approx_eq!(f32, scale.scale(5.0), 50.0);
        assert_approx_eq!(f32, scale.scale(10.0), 100.0);
        // No clamping by default, so out-of-domain input extrapolates
        assert_approx_eq!(f32, scale.scale(-5.0), -50.0);
        assert_approx_eq!(f32, scale.scale(15.0), 150.0);
    }

    #[test]
    fn test_scale_clamped() {
        let scale = LinearScale::new(&LinearScaleConfig {
            domain: (10.0, 30.0),
            range: (0.0, 100.0),
            clamp: true,
            ..Default::default()
        });

        let result = scale.scale_slice(&[0.0, 10.0, 20.0, 30.0, 40.0]);
        assert_approx_eq!(f32, result[0], 0.0);
        assert_approx_eq!(f32, result[1], 0.0);
        assert_approx_eq!(f32, result[2], 50.0);
        assert_approx_eq!(f32, result[3], 100.0);
        assert_approx_eq!(f32, result[4], 100.0);
    }

    #[test]
    fn test_scale_inverted_range() {
        let scale = LinearScale::new(&LinearScaleConfig {
            domain: (0.0, 10.0),
            range: (100.0, 0.0),
            ..Default::default()
        });

        assert_approx_eq!(f32, scale.scale(0.0), 100.0);
        assert_approx_eq!(f32, scale.scale(5.0), 50.0);
        assert_approx_eq!(f32, scale.scale(10.0), 0.0);
    }

    #[test]
    fn test_scale_degenerate_domain() {
        let scale = LinearScale::new(&LinearScaleConfig {
            domain: (10.0, 10.0),
            range: (0.0, 100.0),
            ..Default::default()
        });

        for v in [0.0, 10.0, 20.0] {
            let out = scale.scale(v);
            assert!(out.is_finite());
            assert_approx_eq!(f32, out, 0.0);
        }
    }

    #[test]
    fn test_scale_degenerate_range() {
        let scale = LinearScale::new(&LinearScaleConfig {
            domain: (0.0, 10.0),
            range: (1.0, 1.0),
            ..Default::default()
        });

        for v in [0.0, 5.0, 10.0] {
            assert_approx_eq!(f32, scale.scale(v), 1.0);
        }
    }

    #[test]
    fn test_round() {
        let scale = LinearScale::new(&LinearScaleConfig {
            domain: (0.0, 3.0),
            range: (0.0, 10.0),
            round: true,
            ..Default::default()
        });

        assert_approx_eq!(f32, scale.scale(1.0), 3.0);
        assert_approx_eq!(f32, scale.scale(2.0), 7.0);
    }

    #[test]
    fn test_invert_unclamped() {
        let scale = LinearScale::new(&LinearScaleConfig {
            domain: (10.0, 30.0),
            range: (0.0, 100.0),
            ..Default::default()
        });

        let result = scale.invert_slice(&[-25.0, 0.0, 50.0, 100.0, 125.0]);
        assert_approx_eq!(f32, result[0], 5.0);
        assert_approx_eq!(f32, result[1], 10.0);
        assert_approx_eq!(f32, result[2], 20.0);
        assert_approx_eq!(f32, result[3], 30.0);
        assert_approx_eq!(f32, result[4], 35.0);
    }

    #[test]
    fn test_invert_clamped() {
        let scale = LinearScale::new(&LinearScaleConfig {
            domain: (10.0, 30.0),
            range: (0.0, 100.0),
            clamp: true,
            ..Default::default()
        });

        assert_approx_eq!(f32, scale.invert(-25.0), 10.0);
        assert_approx_eq!(f32, scale.invert(125.0), 30.0);
    }

    #[test]
    fn test_scale_invert_round_trip() {
        let scale = LinearScale::new(&LinearScaleConfig {
            domain: (-4.0, 16.0),
            range: (12.0, 320.0),
            ..Default::default()
        });

        for v in [-4.0, -1.5, 0.0, 3.25, 16.0] {
            assert_approx_eq!(f32, scale.invert(scale.scale(v)), v, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_ticks() {
        let scale = LinearScale::new(&LinearScaleConfig {
            domain: (0.0, 10.0),
            range: (0.0, 100.0),
            ..Default::default()
        });

        assert_eq!(scale.ticks(Some(5.0)), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(scale.ticks(Some(2.0)), vec![0.0, 5.0, 10.0]);
        assert_eq!(scale.ticks(Some(1.0)), vec![0.0, 10.0]);
    }

    #[test]
    fn test_nice() {
        let scale = LinearScale::new(&LinearScaleConfig {
            domain: (1.1, 10.9),
            ..Default::default()
        })
        .nice(Some(10));

        assert_eq!(scale.domain(), (1.0, 11.0));
    }

    #[test]
    fn test_nice_reversed_negative() {
        let scale = LinearScale::new(&LinearScaleConfig {
            domain: (-1.1, -10.9),
            ..Default::default()
        })
        .nice(Some(10));

        assert_eq!(scale.domain(), (-1.0, -11.0));
    }
}

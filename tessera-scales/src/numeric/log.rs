use std::sync::Arc;

use crate::array;
use crate::error::TesseraScaleError;

use super::ContinuousNumericScale;

/// Log/exp transform for a fixed base, with direct implementations for the
/// common bases.
#[derive(Clone, Debug)]
enum LogTransform {
    Static {
        log_fun: fn(f32) -> f32,
        pow_fun: fn(f32) -> f32,
        base: f32,
    },
    Custom {
        ln_base: f32,
        base: f32,
    },
}

impl LogTransform {
    fn new(base: f32) -> Self {
        if base == std::f32::consts::E {
            LogTransform::Static {
                log_fun: f32::ln,
                pow_fun: f32::exp,
                base,
            }
        } else if base == 10.0 {
            LogTransform::Static {
                log_fun: f32::log10,
                pow_fun: |x| 10.0f32.powf(x),
                base,
            }
        } else if base == 2.0 {
            LogTransform::Static {
                log_fun: f32::log2,
                pow_fun: |x| 2.0f32.powf(x),
                base,
            }
        } else {
            LogTransform::Custom {
                ln_base: base.ln(),
                base,
            }
        }
    }

    fn log(&self, x: f32) -> f32 {
        match self {
            LogTransform::Static { log_fun, .. } => log_fun(x),
            LogTransform::Custom { ln_base, .. } => x.ln() / ln_base,
        }
    }

    fn pow(&self, x: f32) -> f32 {
        match self {
            LogTransform::Static { pow_fun, .. } => pow_fun(x),
            LogTransform::Custom { base, .. } => base.powf(x),
        }
    }

    fn base(&self) -> f32 {
        match self {
            LogTransform::Static { base, .. } => *base,
            LogTransform::Custom { base, .. } => *base,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogScaleConfig {
    pub domain: (f32, f32),
    pub range: (f32, f32),
    pub base: f32,
    pub clamp: bool,
    pub nice: bool,
}

impl Default for LogScaleConfig {
    fn default() -> Self {
        Self {
            domain: (1.0, 10.0),
            range: (0.0, 1.0),
            base: 10.0,
            clamp: false,
            nice: false,
        }
    }
}

/// A logarithmic scale that interpolates in log space.
///
/// Domain bounds must be strictly positive; construction fails otherwise
/// instead of letting NaN positions leak into rendered geometry.
#[derive(Clone, Debug)]
pub struct LogScale {
    domain_start: f32,
    domain_end: f32,
    range_start: f32,
    range_end: f32,
    clamp: bool,
    transform: Arc<LogTransform>,
}

impl LogScale {
    /// Creates a new log scale with default domain [1, 10] and range [0, 1]
    pub fn try_new(config: &LogScaleConfig) -> Result<Self, TesseraScaleError> {
        if !(config.base > 0.0) || config.base == 1.0 {
            return Err(TesseraScaleError::InvalidLogBase(config.base));
        }
        if !(config.domain.0 > 0.0 && config.domain.1 > 0.0) {
            return Err(TesseraScaleError::NonPositiveLogDomain {
                start: config.domain.0,
                end: config.domain.1,
            });
        }

        let mut this = Self {
            domain_start: config.domain.0,
            domain_end: config.domain.1,
            range_start: config.range.0,
            range_end: config.range.1,
            clamp: config.clamp,
            transform: Arc::new(LogTransform::new(config.base)),
        };
        if config.nice {
            this = this.nice();
        }
        Ok(this)
    }

    /// Returns the logarithm base
    pub fn base(&self) -> f32 {
        self.transform.base()
    }

    /// Computes the logarithm of x in the current base
    pub fn log(&self, x: f32) -> f32 {
        self.transform.log(x)
    }

    /// Computes the current base raised to power x
    pub fn pow(&self, x: f32) -> f32 {
        self.transform.pow(x)
    }

    /// Extends the domain to exact powers of the base
    pub fn nice(mut self) -> Self {
        if self.domain_start.is_nan() || self.domain_end.is_nan() {
            return self;
        }

        // A zero-width domain expands to the surrounding power-of-base
        // interval.
        if self.domain_start == self.domain_end {
            let log_val = self.log(self.domain_start);
            self.domain_start = self.pow(log_val.floor());
            self.domain_end = self.pow(log_val.ceil());
            return self;
        }

        let reversed = self.domain_start > self.domain_end;
        let (start, stop) = if reversed {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };

        let nstart = self.pow(self.log(start).floor());
        let nstop = self.pow(self.log(stop).ceil());

        if reversed {
            self.domain_start = nstop;
            self.domain_end = nstart;
        } else {
            self.domain_start = nstart;
            self.domain_end = nstop;
        }
        self
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Replaces the domain, revalidating positivity.
    pub fn try_with_domain(mut self, domain: (f32, f32)) -> Result<Self, TesseraScaleError> {
        if !(domain.0 > 0.0 && domain.1 > 0.0) {
            return Err(TesseraScaleError::NonPositiveLogDomain {
                start: domain.0,
                end: domain.1,
            });
        }
        self.domain_start = domain.0;
        self.domain_end = domain.1;
        Ok(self)
    }

    pub fn with_range(mut self, range: (f32, f32)) -> Self {
        self.range_start = range.0;
        self.range_end = range.1;
        self
    }

    fn log_span(&self) -> (f32, f32) {
        let log_start = self.log(self.domain_start);
        let log_end = self.log(self.domain_end);
        (log_start, log_end - log_start)
    }
}

impl ContinuousNumericScale for LogScale {
    fn domain(&self) -> (f32, f32) {
        (self.domain_start, self.domain_end)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_start, self.range_end)
    }

    fn clamp(&self) -> bool {
        self.clamp
    }

    /// Maps a value from domain to range via log-space interpolation.
    /// Degenerate domains and ranges collapse to `range.0`; non-positive
    /// inputs resolve to the low end of the range when clamping, and NaN
    /// otherwise.
    fn scale(&self, value: f32) -> f32 {
        if self.domain_start == self.domain_end || self.range_start == self.range_end {
            return self.range_start;
        }

        let (log_start, log_span) = self.log_span();
        if log_span == 0.0 || log_span.is_nan() {
            return self.range_start;
        }

        let factor = (self.range_end - self.range_start) / log_span;
        let offset = self.range_start - factor * log_start;

        if self.clamp {
            let (range_min, range_max) = if self.range_start <= self.range_end {
                (self.range_start, self.range_end)
            } else {
                (self.range_end, self.range_start)
            };
            if value.is_nan() {
                return f32::NAN;
            }
            if value <= 0.0 {
                return if self.range_start <= self.range_end {
                    range_min
                } else {
                    range_max
                };
            }
            (factor * self.log(value) + offset).clamp(range_min, range_max)
        } else if value > 0.0 {
            factor * self.log(value) + offset
        } else if value < 0.0 {
            // Mirror negative input through the origin
            factor * -self.log(-value) + offset
        } else {
            f32::NAN
        }
    }

    /// Maps a range value back to the domain
    fn invert(&self, value: f32) -> f32 {
        if self.domain_start == self.domain_end || self.range_start == self.range_end {
            return self.domain_start;
        }

        let (log_start, log_span) = self.log_span();
        if log_span == 0.0 || log_span.is_nan() {
            return self.domain_start;
        }

        let factor = (self.range_end - self.range_start) / log_span;
        let offset = self.range_start - factor * log_start;

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

        self.pow((v - offset) / factor)
    }

    /// Generates tick values within the domain. Integer bases subdivide
    /// each decade with integer multiples, matching d3's log ticks.
    fn ticks(&self, count: Option<f32>) -> Vec<f32> {
        let count = count.unwrap_or(10.0);
        if !(self.domain_start > 0.0 && self.domain_end > 0.0) {
            return vec![];
        }

        let reversed = self.domain_end < self.domain_start;
        let (u, v) = if reversed {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };

        let mut i = self.log(u);
        let mut j = self.log(v);
        let base = self.base();

        let mut z = Vec::new();
        if (base - base.floor()).abs() < f32::EPSILON && j - i < count {
            // Integer base: fill each power-of-base interval with integer
            // multiples that land inside the domain.
            i = i.floor();
            j = j.ceil();
            for exp in (i as i32)..=(j as i32) {
                for k in 1..(base as i32) {
                    let t = if exp < 0 {
                        k as f32 / self.pow(-exp as f32)
                    } else {
                        k as f32 * self.pow(exp as f32)
                    };
                    if t < u {
                        continue;
                    }
                    if t > v {
                        break;
                    }
                    z.push(t);
                }
            }
            if z.len() as f32 * 2.0 < count {
                z = array::ticks(u, v, count);
            }
        } else {
            z = array::ticks(i, j, (j - i).min(count))
                .into_iter()
                .map(|t| self.pow(t))
                .collect();
        }

        if reversed {
            z.reverse();
        }
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_defaults() -> Result<(), TesseraScaleError> {
        let scale = LogScale::try_new(&Default::default())?;
        assert_eq!(scale.domain(), (1.0, 10.0));
        assert_eq!(scale.range(), (0.0, 1.0));
        assert_eq!(scale.base(), 10.0);
        assert!(!scale.clamp());
        Ok(())
    }

    #[test]
    fn test_non_positive_domain_fails() {
        let err = LogScale::try_new(&LogScaleConfig {
            domain: (0.0, 10.0),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            TesseraScaleError::NonPositiveLogDomain {
                start: 0.0,
                end: 10.0
            }
        );

        assert!(LogScale::try_new(&LogScaleConfig {
            domain: (-1.0, 10.0),
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn test_invalid_base_fails() {
        let err = LogScale::try_new(&LogScaleConfig {
            base: 1.0,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, TesseraScaleError::InvalidLogBase(1.0));
    }

    #[test]
    fn test_scale() -> Result<(), TesseraScaleError> {
        let scale = LogScale::try_new(&LogScaleConfig {
            domain: (1.0, 100.0),
            range: (0.0, 100.0),
            ..Default::default()
        })?;

        assert_approx_eq!(f32, scale.scale(1.0), 0.0);
        assert_approx_eq!(f32, scale.scale(100.0), 100.0);
        assert_approx_eq!(f32, scale.scale(10.0), 50.0, epsilon = 1e-3);
        Ok(())
    }

    #[test]
    fn test_scale_clamped_non_positive_input() -> Result<(), TesseraScaleError> {
        let scale = LogScale::try_new(&LogScaleConfig {
            domain: (1.0, 100.0),
            range: (0.0, 100.0),
            clamp: true,
            ..Default::default()
        })?;

        assert_approx_eq!(f32, scale.scale(0.0), 0.0);
        assert_approx_eq!(f32, scale.scale(-5.0), 0.0);
        assert_approx_eq!(f32, scale.scale(1000.0), 100.0);
        Ok(())
    }

    #[test]
    fn test_base_2() -> Result<(), TesseraScaleError> {
        let scale = LogScale::try_new(&LogScaleConfig {
            domain: (1.0, 32.0),
            range: (0.0, 100.0),
            base: 2.0,
            ..Default::default()
        })?;

        assert_approx_eq!(f32, scale.scale(1.0), 0.0);
        assert_approx_eq!(f32, scale.scale(8.0), 60.0, epsilon = 1e-3);
        assert_approx_eq!(f32, scale.scale(32.0), 100.0);
        Ok(())
    }

    #[test]
    fn test_invert_round_trip() -> Result<(), TesseraScaleError> {
        let scale = LogScale::try_new(&LogScaleConfig {
            domain: (1.0, 100.0),
            range: (0.0, 100.0),
            ..Default::default()
        })?;

        for v in [1.0, 2.5, 10.0, 42.0, 100.0] {
            assert_approx_eq!(f32, scale.invert(scale.scale(v)), v, epsilon = 1e-2);
        }
        Ok(())
    }

    #[test]
    fn test_nice() -> Result<(), TesseraScaleError> {
        let scale = LogScale::try_new(&LogScaleConfig {
            domain: (1.5, 50.0),
            ..Default::default()
        })?
        .nice();

        assert_eq!(scale.domain(), (1.0, 100.0));
        Ok(())
    }

    #[test]
    fn test_ticks_decades() -> Result<(), TesseraScaleError> {
        let scale = LogScale::try_new(&LogScaleConfig {
            domain: (1.0, 100.0),
            range: (0.0, 1.0),
            ..Default::default()
        })?;

        let ticks = scale.ticks(Some(10.0));
        assert_eq!(ticks.first(), Some(&1.0));
        assert_eq!(ticks.last(), Some(&100.0));
        assert!(ticks.contains(&10.0));
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
        Ok(())
    }
}

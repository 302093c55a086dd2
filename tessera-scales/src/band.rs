use serde::{Deserialize, Serialize};

use crate::error::TesseraScaleError;

/// Required band-space steps for a domain of `count` bands with the given
/// padding.
pub fn bandspace(count: usize, padding_inner: Option<f32>, padding_outer: Option<f32>) -> f32 {
    let padding_inner = padding_inner.unwrap_or(0.0).clamp(0.0, 1.0);
    let padding_outer = padding_outer.unwrap_or(0.0).max(0.0);

    count as f32 - padding_inner + padding_outer * 2.0
}

/// Width reduction applied to each bar in a grouped cluster so the group
/// plus its gaps spans one band: 0 for a single bar, otherwise
/// `gap * (count - 1) / count`.
pub fn bar_size_adjustment(bar_count: usize, gap_size: f32) -> f32 {
    if bar_count <= 1 {
        return 0.0;
    }
    gap_size * (bar_count as f32 - 1.0) / bar_count as f32
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BandScaleConfig {
    pub domain: (i32, i32),
    pub range: (f32, f32),
    pub padding_inner: f32,
    pub padding_outer: f32,
    pub align: f32,
    pub round: bool,
}

impl Default for BandScaleConfig {
    fn default() -> Self {
        Self {
            domain: (0, 0),
            range: (0.0, 1.0),
            padding_inner: 0.1,
            padding_outer: 0.0,
            align: 0.5,
            round: false,
        }
    }
}

/// A band scale divides a continuous pixel range into uniform bands, one
/// per integer category index in `domain.0..=domain.1`.
///
/// Like an ordinal scale but with continuous numeric output; the standard
/// positioning scale for bar charts. Indices outside the domain map to
/// `None`.
#[derive(Debug, Clone)]
pub struct BandScale {
    domain: (i32, i32),
    range: (f32, f32),
    padding_inner: f32,
    padding_outer: f32,
    align: f32,
    round: bool,
}

impl BandScale {
    /// Creates a new band scale over the inclusive index domain.
    ///
    /// Fails when the domain is empty (`domain.0 > domain.1`). Padding and
    /// align values are clamped into their valid intervals rather than
    /// rejected.
    pub fn try_new(config: &BandScaleConfig) -> Result<Self, TesseraScaleError> {
        if config.domain.0 > config.domain.1 {
            return Err(TesseraScaleError::EmptyDomain);
        }
        Ok(Self {
            domain: config.domain,
            range: config.range,
            padding_inner: config.padding_inner.clamp(0.0, 1.0),
            padding_outer: config.padding_outer.max(0.0),
            align: config.align.clamp(0.0, 1.0),
            round: config.round,
        })
    }

    pub fn domain(&self) -> (i32, i32) {
        self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn padding_inner(&self) -> f32 {
        self.padding_inner
    }

    pub fn padding_outer(&self) -> f32 {
        self.padding_outer
    }

    /// Number of bands in the domain
    pub fn count(&self) -> usize {
        (self.domain.1 - self.domain.0 + 1) as usize
    }

    fn sorted_range(&self) -> (f32, f32, bool) {
        if self.range.1 < self.range.0 {
            (self.range.1, self.range.0, true)
        } else {
            (self.range.0, self.range.1, false)
        }
    }

    fn raw_step(&self) -> f32 {
        let (start, stop, _) = self.sorted_range();
        (stop - start)
            / 1.0_f32.max(bandspace(
                self.count(),
                Some(self.padding_inner),
                Some(self.padding_outer),
            ))
    }

    /// Distance between the starts of adjacent bands
    pub fn step(&self) -> f32 {
        let step = self.raw_step();
        if self.round {
            step.floor()
        } else {
            step
        }
    }

    /// Width of each band
    pub fn bandwidth(&self) -> f32 {
        let bandwidth = self.step() * (1.0 - self.padding_inner);
        if self.round {
            bandwidth.round()
        } else {
            bandwidth
        }
    }

    /// Start positions of every band, in domain order.
    pub fn positions(&self) -> Vec<f32> {
        let n = self.count();
        let (start, stop, reversed) = self.sorted_range();
        let step = self.step();

        let first = start + (stop - start - step * (n as f32 - self.padding_inner)) * self.align;
        let first = if self.round { first.round() } else { first };

        let mut positions: Vec<f32> = (0..n).map(|i| first + step * i as f32).collect();
        if reversed {
            positions.reverse();
        }
        positions
    }

    /// Maps a category index to the start position of its band, or `None`
    /// when the index lies outside the domain.
    pub fn scale(&self, index: i32) -> Option<f32> {
        if index < self.domain.0 || index > self.domain.1 {
            return None;
        }

        let n = self.count();
        let (start, stop, reversed) = self.sorted_range();
        let step = self.step();

        let first = start + (stop - start - step * (n as f32 - self.padding_inner)) * self.align;
        let first = if self.round { first.round() } else { first };

        let mut i = (index - self.domain.0) as usize;
        if reversed {
            i = n - 1 - i;
        }
        Some(first + step * i as f32)
    }

    /// Maps a pixel position back to the index of the band containing it.
    /// Positions that fall in padding gaps or outside the range resolve to
    /// `None`.
    pub fn invert(&self, value: f32) -> Option<i32> {
        if value.is_nan() {
            return None;
        }

        let positions = self.positions();
        let mut sorted = positions.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let i = sorted.partition_point(|&p| p <= value);
        if i == 0 {
            return None;
        }
        let band_start = sorted[i - 1];
        if value - band_start > self.bandwidth() {
            return None;
        }

        positions
            .iter()
            .position(|&p| p == band_start)
            .map(|i| self.domain.0 + i as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_defaults() -> Result<(), TesseraScaleError> {
        let scale = BandScale::try_new(&BandScaleConfig {
            domain: (0, 2),
            ..Default::default()
        })?;

        assert_eq!(scale.count(), 3);
        assert_eq!(scale.range(), (0.0, 1.0));
        assert_approx_eq!(f32, scale.padding_inner(), 0.1);
        assert_approx_eq!(f32, scale.padding_outer(), 0.0);
        Ok(())
    }

    #[test]
    fn test_empty_domain() {
        let result = BandScale::try_new(&BandScaleConfig {
            domain: (3, 1),
            ..Default::default()
        });
        assert_eq!(result.unwrap_err(), TesseraScaleError::EmptyDomain);
    }

    #[test]
    fn test_no_padding_positions() -> Result<(), TesseraScaleError> {
        let scale = BandScale::try_new(&BandScaleConfig {
            domain: (0, 2),
            range: (0.0, 1.0),
            padding_inner: 0.0,
            ..Default::default()
        })?;

        assert_approx_eq!(f32, scale.scale(0).unwrap(), 0.0);
        assert_approx_eq!(f32, scale.scale(1).unwrap(), 0.3333333);
        assert_approx_eq!(f32, scale.scale(2).unwrap(), 0.6666667);
        assert_approx_eq!(f32, scale.bandwidth(), 0.3333333);
        assert_approx_eq!(f32, scale.step(), 0.3333333);
        Ok(())
    }

    #[test]
    fn test_padding_positions() -> Result<(), TesseraScaleError> {
        let scale = BandScale::try_new(&BandScaleConfig {
            domain: (0, 2),
            range: (0.0, 120.0),
            padding_inner: 0.2,
            padding_outer: 0.2,
            ..Default::default()
        })?;

        assert_approx_eq!(f32, scale.scale(0).unwrap(), 7.5);
        assert_approx_eq!(f32, scale.scale(1).unwrap(), 45.0);
        assert_approx_eq!(f32, scale.scale(2).unwrap(), 82.5);
        assert_approx_eq!(f32, scale.bandwidth(), 30.0);
        Ok(())
    }

    #[test]
    fn test_out_of_domain_index() -> Result<(), TesseraScaleError> {
        let scale = BandScale::try_new(&BandScaleConfig {
            domain: (0, 2),
            ..Default::default()
        })?;

        assert_eq!(scale.scale(-1), None);
        assert_eq!(scale.scale(3), None);
        Ok(())
    }

    #[test]
    fn test_non_zero_domain_start() -> Result<(), TesseraScaleError> {
        let scale = BandScale::try_new(&BandScaleConfig {
            domain: (5, 7),
            range: (0.0, 120.0),
            padding_inner: 0.2,
            padding_outer: 0.2,
            ..Default::default()
        })?;

        assert_approx_eq!(f32, scale.scale(5).unwrap(), 7.5);
        assert_approx_eq!(f32, scale.scale(7).unwrap(), 82.5);
        assert_eq!(scale.scale(4), None);
        Ok(())
    }

    #[test]
    fn test_reversed_range() -> Result<(), TesseraScaleError> {
        let scale = BandScale::try_new(&BandScaleConfig {
            domain: (0, 2),
            range: (120.0, 0.0),
            padding_inner: 0.2,
            padding_outer: 0.2,
            ..Default::default()
        })?;

        // First index lands nearest the high end of the pixel range
        assert_approx_eq!(f32, scale.scale(0).unwrap(), 82.5);
        assert_approx_eq!(f32, scale.scale(2).unwrap(), 7.5);
        Ok(())
    }

    #[test]
    fn test_round() -> Result<(), TesseraScaleError> {
        let scale = BandScale::try_new(&BandScaleConfig {
            domain: (0, 2),
            range: (0.0, 100.0),
            padding_inner: 0.0,
            round: true,
            ..Default::default()
        })?;

        assert_eq!(scale.scale(0).unwrap(), 1.0);
        assert_eq!(scale.scale(1).unwrap(), 34.0);
        assert_eq!(scale.scale(2).unwrap(), 67.0);
        assert_eq!(scale.bandwidth(), 33.0);
        Ok(())
    }

    #[test]
    fn test_invert() -> Result<(), TesseraScaleError> {
        let scale = BandScale::try_new(&BandScaleConfig {
            domain: (0, 2),
            range: (0.0, 120.0),
            padding_inner: 0.2,
            padding_outer: 0.2,
            ..Default::default()
        })?;

        assert_eq!(scale.invert(7.5), Some(0));
        assert_eq!(scale.invert(15.0), Some(0));
        assert_eq!(scale.invert(45.0), Some(1));
        // Padding gap between bands
        assert_eq!(scale.invert(40.0), None);
        // Outside the range
        assert_eq!(scale.invert(-10.0), None);
        assert_eq!(scale.invert(130.0), None);
        assert_eq!(scale.invert(f32::NAN), None);
        Ok(())
    }

    #[test]
    fn test_bandspace() {
        assert_eq!(bandspace(3, None, None), 3.0);
        assert_eq!(bandspace(3, Some(0.2), None), 2.8);
        assert_eq!(bandspace(3, None, Some(0.5)), 4.0);
        assert_eq!(bandspace(3, Some(1.5), Some(-0.5)), 2.0);
    }

    #[test]
    fn test_bar_size_adjustment() {
        assert_eq!(bar_size_adjustment(0, 12.0), 0.0);
        assert_eq!(bar_size_adjustment(1, 12.0), 0.0);
        assert_approx_eq!(f32, bar_size_adjustment(3, 12.0), 8.0);
        assert_approx_eq!(f32, bar_size_adjustment(2, 10.0), 5.0);
    }
}

pub mod linear;
pub mod log;

use serde::{Deserialize, Serialize};

use crate::error::TesseraScaleError;
use linear::{LinearScale, LinearScaleConfig};
use log::{LogScale, LogScaleConfig};

/// Common interface for scales that map a continuous numeric domain onto a
/// continuous pixel range.
pub trait ContinuousNumericScale {
    /// Returns the current domain as (start, end)
    fn domain(&self) -> (f32, f32);

    /// Returns the current range as (start, end)
    fn range(&self) -> (f32, f32);

    /// Returns whether output clamping is enabled
    fn clamp(&self) -> bool;

    /// Maps a single value from domain to range
    fn scale(&self, value: f32) -> f32;

    /// Maps a single value from range back to domain
    fn invert(&self, value: f32) -> f32;

    /// Generates tick values within the domain
    fn ticks(&self, count: Option<f32>) -> Vec<f32>;

    /// Maps a slice of values from domain to range
    fn scale_slice(&self, values: &[f32]) -> Vec<f32> {
        values.iter().map(|v| self.scale(*v)).collect()
    }

    /// Maps a slice of values from range back to domain
    fn invert_slice(&self, values: &[f32]) -> Vec<f32> {
        values.iter().map(|v| self.invert(*v)).collect()
    }
}

/// Interpolation behavior of a numeric scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleType {
    Linear,
    Log,
}

/// Configuration resolving to either a linear or a log scale.
#[derive(Debug, Clone)]
pub struct NumericScaleConfig {
    pub scale_type: ScaleType,
    pub domain: (f32, f32),
    pub range: (f32, f32),
}

impl Default for NumericScaleConfig {
    fn default() -> Self {
        Self {
            scale_type: ScaleType::Linear,
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }
}

#[derive(Clone, Debug)]
pub enum NumericScale {
    Linear(LinearScale),
    Log(LogScale),
}

impl NumericScale {
    /// Builds the scale named by the config's `scale_type`.
    ///
    /// Log scales require positive domain bounds.
    pub fn try_new(config: &NumericScaleConfig) -> Result<Self, TesseraScaleError> {
        match config.scale_type {
            ScaleType::Linear => Ok(NumericScale::Linear(LinearScale::new(&LinearScaleConfig {
                domain: config.domain,
                range: config.range,
                ..Default::default()
            }))),
            ScaleType::Log => Ok(NumericScale::Log(LogScale::try_new(&LogScaleConfig {
                domain: config.domain,
                range: config.range,
                ..Default::default()
            })?)),
        }
    }

    pub fn scale_type(&self) -> ScaleType {
        match self {
            NumericScale::Linear(_) => ScaleType::Linear,
            NumericScale::Log(_) => ScaleType::Log,
        }
    }

    pub fn domain(&self) -> (f32, f32) {
        match self {
            NumericScale::Linear(scale) => scale.domain(),
            NumericScale::Log(scale) => scale.domain(),
        }
    }

    pub fn range(&self) -> (f32, f32) {
        match self {
            NumericScale::Linear(scale) => scale.range(),
            NumericScale::Log(scale) => scale.range(),
        }
    }

    pub fn scale(&self, value: f32) -> f32 {
        match self {
            NumericScale::Linear(scale) => scale.scale(value),
            NumericScale::Log(scale) => scale.scale(value),
        }
    }

    pub fn invert(&self, value: f32) -> f32 {
        match self {
            NumericScale::Linear(scale) => scale.invert(value),
            NumericScale::Log(scale) => scale.invert(value),
        }
    }

    pub fn ticks(&self, count: Option<f32>) -> Vec<f32> {
        match self {
            NumericScale::Linear(scale) => scale.ticks(count),
            NumericScale::Log(scale) => scale.ticks(count),
        }
    }
}

impl From<LinearScale> for NumericScale {
    fn from(scale: LinearScale) -> Self {
        NumericScale::Linear(scale)
    }
}

impl From<LogScale> for NumericScale {
    fn from(scale: LogScale) -> Self {
        NumericScale::Log(scale)
    }
}

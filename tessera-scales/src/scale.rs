use serde::{Deserialize, Serialize};

use crate::band::BandScale;
use crate::numeric::linear::LinearScale;
use crate::numeric::log::LogScale;
use crate::numeric::{ContinuousNumericScale, NumericScale};

/// Discriminant for every scale kind this crate produces.
///
/// Scale kinds are explicit tags; callers dispatch on `kind()` instead of
/// probing for band-scale-only methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleKind {
    Linear,
    Log,
    Band,
}

/// A scale of any kind, ready for axis and mark positioning.
#[derive(Debug, Clone)]
pub enum Scale {
    Linear(LinearScale),
    Log(LogScale),
    Band(BandScale),
}

impl Scale {
    pub fn kind(&self) -> ScaleKind {
        match self {
            Scale::Linear(_) => ScaleKind::Linear,
            Scale::Log(_) => ScaleKind::Log,
            Scale::Band(_) => ScaleKind::Band,
        }
    }

    /// True for scales with a continuous numeric domain
    pub fn is_numeric(&self) -> bool {
        matches!(self, Scale::Linear(_) | Scale::Log(_))
    }

    pub fn is_log(&self) -> bool {
        matches!(self, Scale::Log(_))
    }

    pub fn is_band(&self) -> bool {
        matches!(self, Scale::Band(_))
    }

    /// Pixel range of the scale, whatever its kind
    pub fn range(&self) -> (f32, f32) {
        match self {
            Scale::Linear(scale) => scale.range(),
            Scale::Log(scale) => scale.range(),
            Scale::Band(scale) => scale.range(),
        }
    }

    /// Returns the numeric view of this scale, or `None` for band scales.
    pub fn as_numeric(&self) -> Option<NumericScale> {
        match self {
            Scale::Linear(scale) => Some(NumericScale::Linear(scale.clone())),
            Scale::Log(scale) => Some(NumericScale::Log(scale.clone())),
            Scale::Band(_) => None,
        }
    }

    /// Returns the band view of this scale, or `None` for numeric scales.
    pub fn as_band(&self) -> Option<&BandScale> {
        match self {
            Scale::Band(scale) => Some(scale),
            _ => None,
        }
    }
}

impl From<LinearScale> for Scale {
    fn from(scale: LinearScale) -> Self {
        Scale::Linear(scale)
    }
}

impl From<LogScale> for Scale {
    fn from(scale: LogScale) -> Self {
        Scale::Log(scale)
    }
}

impl From<BandScale> for Scale {
    fn from(scale: BandScale) -> Self {
        Scale::Band(scale)
    }
}

impl From<NumericScale> for Scale {
    fn from(scale: NumericScale) -> Self {
        match scale {
            NumericScale::Linear(scale) => Scale::Linear(scale),
            NumericScale::Log(scale) => Scale::Log(scale),
        }
    }
}

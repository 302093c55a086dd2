use std::fmt;
use std::sync::Arc;

/// An axis range override: literal bounds, or a transform applied to the
/// axis's default bounds.
#[derive(Clone)]
pub enum AxisRange {
    Bounds((f32, f32)),
    Transform(Arc<dyn Fn((f32, f32)) -> (f32, f32) + Send + Sync>),
}

impl AxisRange {
    pub fn bounds(start: f32, end: f32) -> Self {
        AxisRange::Bounds((start, end))
    }

    pub fn transform(f: impl Fn((f32, f32)) -> (f32, f32) + Send + Sync + 'static) -> Self {
        AxisRange::Transform(Arc::new(f))
    }

    /// Resolves this range against the axis's default bounds
    pub fn resolve(&self, default: (f32, f32)) -> (f32, f32) {
        match self {
            AxisRange::Bounds(bounds) => *bounds,
            AxisRange::Transform(f) => f(default),
        }
    }
}

impl fmt::Debug for AxisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisRange::Bounds(bounds) => f.debug_tuple("Bounds").field(bounds).finish(),
            AxisRange::Transform(_) => f.debug_tuple("Transform").finish(),
        }
    }
}

/// Angular axis configuration. Default bounds are (0, 360) degrees.
#[derive(Debug, Clone, Default)]
pub struct AngularAxis {
    pub range: Option<AxisRange>,
}

/// Radial axis configuration. Default bounds are (0, max_radius) pixels.
#[derive(Debug, Clone, Default)]
pub struct RadialAxis {
    pub range: Option<AxisRange>,
}

/// Resolves the angular axis bounds and converts them to radians.
pub fn angular_axis_radians(axis: &AngularAxis) -> (f32, f32) {
    let default = (0.0, 360.0);
    let (start, end) = match &axis.range {
        Some(range) => range.resolve(default),
        None => default,
    };
    (start.to_radians(), end.to_radians())
}

/// Resolves the radial axis bounds in pixels, clamped into
/// `[0, max_radius]`.
pub fn radial_axis_pixels(axis: &RadialAxis, max_radius: f32) -> (f32, f32) {
    let max_radius = max_radius.max(0.0);
    let default = (0.0, max_radius);
    let (start, end) = match &axis.range {
        Some(range) => range.resolve(default),
        None => default,
    };
    (
        start.clamp(0.0, max_radius),
        end.clamp(0.0, max_radius),
    )
}

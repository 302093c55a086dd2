//! Polar geometry for pie and donut charts: padded-angle arc partitioning
//! and polar axis resolution.
//!
//! Angles are radians measured clockwise from 12 o'clock; radii are pixels
//! from the chart center.

pub mod arc;
pub mod axis;

pub use arc::{calculate_arc_data, polar_to_cartesian, ArcDatum, PolarDataPoint, PolarSeries};
pub use axis::{angular_axis_radians, radial_axis_pixels, AngularAxis, AxisRange, RadialAxis};

//! Scale functions for chart axes: mappings from data domains to pixel
//! ranges.
//!
//! Continuous scales ([`numeric::linear::LinearScale`],
//! [`numeric::log::LogScale`]) map numeric values through affine or
//! log-space interpolation. The band scale
//! ([`band::BandScale`]) divides a pixel range into uniform bands for a
//! sequence of category indices. All scales tolerate inverted ranges and
//! degenerate domains without producing NaN positions.

pub mod array;
pub mod band;
pub mod error;
pub mod numeric;
pub mod scale;

//! Scrubber interaction math: pointer-to-data coordinate lookup and label
//! collision avoidance.
//!
//! Everything here runs once per gesture frame, so every function is a
//! cheap pure computation over precomputed position arrays, with no caches
//! and no retained state. Malformed input (empty arrays, out-of-range indices)
//! degrades to sentinels and clamps instead of panicking; a scrub gesture
//! must never take the chart down.

pub mod coords;
pub mod labels;

pub use coords::{
    all_series_coordinates_at_index, are_coordinate_arrays_valid, find_closest_x_index,
    find_closest_x_index_binary, get_data_y, get_screen_x, get_screen_y, SeriesCoordinate,
    SeriesYArrays,
};
pub use labels::{calculate_label_y_positions, DrawingArea, LabelDimension, DEFAULT_MIN_GAP};

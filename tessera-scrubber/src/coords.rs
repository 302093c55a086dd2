use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Returns the index of the position in `x_outputs` closest to `screen_x`,
/// or `None` for an empty array. Ties resolve to the lowest index.
pub fn find_closest_x_index(x_outputs: &[f32], screen_x: f32) -> Option<usize> {
    if x_outputs.is_empty() {
        return None;
    }

    let mut best = 0;
    let mut best_dist = (x_outputs[0] - screen_x).abs();
    for (i, x) in x_outputs.iter().enumerate().skip(1) {
        let dist = (x - screen_x).abs();
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    Some(best)
}

/// Binary-search variant of [`find_closest_x_index`] for sorted,
/// monotonically non-decreasing `x_outputs`.
///
/// Agrees with the linear scan on every query; it exists only to keep
/// per-frame lookups cheap on dense series.
pub fn find_closest_x_index_binary(x_outputs: &[f32], screen_x: f32) -> Option<usize> {
    if x_outputs.is_empty() {
        return None;
    }

    let i = x_outputs.partition_point(|&x| x < screen_x);
    if i == 0 {
        return Some(0);
    }
    if i >= x_outputs.len() {
        return Some(first_of_run(x_outputs, x_outputs.len() - 1));
    }

    // The closest position is the candidate or its predecessor; on a tie
    // the predecessor wins, matching the linear scan's first minimum.
    let before = (screen_x - x_outputs[i - 1]).abs();
    let after = (x_outputs[i] - screen_x).abs();
    if after < before {
        Some(i)
    } else {
        Some(first_of_run(x_outputs, i - 1))
    }
}

// Duplicate positions share a distance; step back to the first of the run
// so ties resolve exactly like the linear scan.
fn first_of_run(x_outputs: &[f32], mut i: usize) -> usize {
    while i > 0 && x_outputs[i - 1] == x_outputs[i] {
        i -= 1;
    }
    i
}

fn clamped_lookup(values: &[f32], index: isize) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let i = index.clamp(0, values.len() as isize - 1) as usize;
    values[i]
}

/// Screen-space x position at `index`, clamped into the array bounds.
/// Gesture handlers routinely produce out-of-range indices; an empty array
/// yields 0.
pub fn get_screen_x(x_outputs: &[f32], index: isize) -> f32 {
    clamped_lookup(x_outputs, index)
}

/// Screen-space y position at a clamped `index`
pub fn get_screen_y(y_outputs: &[f32], index: isize) -> f32 {
    clamped_lookup(y_outputs, index)
}

/// Data-space y value at a clamped `index`
pub fn get_data_y(y_inputs: &[f32], index: isize) -> f32 {
    clamped_lookup(y_inputs, index)
}

/// Precomputed y arrays for one series: screen positions and the data
/// values they were scaled from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SeriesYArrays {
    pub screen_ys: Vec<f32>,
    pub data_ys: Vec<f32>,
}

/// Resolved scrubber coordinates for one series at the active index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SeriesCoordinate {
    pub series_id: String,
    pub screen_x: f32,
    pub screen_y: f32,
    pub data_y: f32,
}

/// Resolves every series' screen and data coordinates at a shared
/// (clamped) index. Output order follows the series map's insertion order.
pub fn all_series_coordinates_at_index(
    x_outputs: &[f32],
    series: &IndexMap<String, SeriesYArrays>,
    index: isize,
) -> Vec<SeriesCoordinate> {
    let screen_x = get_screen_x(x_outputs, index);
    series
        .iter()
        .map(|(series_id, arrays)| SeriesCoordinate {
            series_id: series_id.clone(),
            screen_x,
            screen_y: get_screen_y(&arrays.screen_ys, index),
            data_y: get_data_y(&arrays.data_ys, index),
        })
        .collect()
}

/// True when the x coordinate arrays are usable: non-empty and of equal
/// length. Per-series y arrays are not checked against them.
pub fn are_coordinate_arrays_valid(x_inputs: &[f32], x_outputs: &[f32]) -> bool {
    let valid = !x_inputs.is_empty() && x_inputs.len() == x_outputs.len();
    if !valid {
        tracing::trace!(
            x_inputs = x_inputs.len(),
            x_outputs = x_outputs.len(),
            "coordinate arrays rejected"
        );
    }
    valid
}

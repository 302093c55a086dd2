use serde::{Deserialize, Serialize};

/// A single slice of a pie or donut series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PolarDataPoint {
    pub value: f32,
    pub label: Option<String>,
    pub color: Option<String>,
    pub id: Option<String>,
}

impl PolarDataPoint {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PolarSeries {
    pub id: String,
    pub data: Vec<PolarDataPoint>,
    pub label: Option<String>,
}

impl PolarSeries {
    /// Partitions this series into arcs; see [`calculate_arc_data`].
    pub fn arc_data(
        &self,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
        end_angle: f32,
        pad_angle: f32,
    ) -> Vec<ArcDatum> {
        calculate_arc_data(
            &self.data,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            pad_angle,
        )
    }
}

/// Resolved geometry for one arc: angle bounds in radians, radius bounds in
/// pixels, and the originating data point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArcDatum {
    pub start_angle: f32,
    pub end_angle: f32,
    pub pad_angle: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub index: usize,
    pub data: PolarDataPoint,
}

impl ArcDatum {
    /// Angular span actually drawn, after padding
    pub fn span(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    /// Midpoint of the arc at its mid radius, the anchor for slice labels.
    pub fn centroid(&self) -> (f32, f32) {
        let mid_angle = (self.start_angle + self.end_angle) / 2.0;
        let mid_radius = (self.inner_radius + self.outer_radius) / 2.0;
        polar_to_cartesian(mid_angle, mid_radius)
    }
}

/// Converts a polar coordinate to screen-space offsets from the chart
/// center. Angle zero points up; positive angles sweep clockwise, matching
/// y-down screen coordinates.
pub fn polar_to_cartesian(angle: f32, radius: f32) -> (f32, f32) {
    (radius * angle.sin(), -radius * angle.cos())
}

/// Partitions `[start_angle, end_angle]` into one arc per data point,
/// proportional to the magnitude of each value.
///
/// Sizing uses `value.abs()`; the signed value is carried through untouched
/// in each [`ArcDatum`]. Input order is preserved; there is no sorting by
/// value. `pad_angle` is split evenly off both ends of each arc's
/// allocation, so allocations (padding included) always cover the full
/// interval. An arc too small for its padding collapses to its allocation
/// midpoint rather than inverting. When every value is zero the interval
/// is split evenly.
pub fn calculate_arc_data(
    data: &[PolarDataPoint],
    inner_radius: f32,
    outer_radius: f32,
    start_angle: f32,
    end_angle: f32,
    pad_angle: f32,
) -> Vec<ArcDatum> {
    if data.is_empty() {
        return vec![];
    }

    let total: f32 = data.iter().map(|d| d.value.abs()).sum();
    let span = end_angle - start_angle;
    let dir = if span < 0.0 { -1.0 } else { 1.0 };
    let pad = pad_angle.abs().min(span.abs() / data.len() as f32) * dir;

    let mut arcs = Vec::with_capacity(data.len());
    let mut cursor = start_angle;
    for (index, point) in data.iter().enumerate() {
        let fraction = if total > 0.0 {
            point.value.abs() / total
        } else {
            1.0 / data.len() as f32
        };
        let allocation = fraction * span;

        let mut arc_start = cursor + pad / 2.0;
        let mut arc_end = cursor + allocation - pad / 2.0;
        if (arc_end - arc_start) * dir < 0.0 {
            // Allocation smaller than the padding; collapse to a zero-span
            // arc at the allocation midpoint.
            let mid = cursor + allocation / 2.0;
            arc_start = mid;
            arc_end = mid;
        }

        arcs.push(ArcDatum {
            start_angle: arc_start,
            end_angle: arc_end,
            pad_angle,
            inner_radius,
            outer_radius,
            index,
            data: point.clone(),
        });

        cursor += allocation;
    }

    arcs
}

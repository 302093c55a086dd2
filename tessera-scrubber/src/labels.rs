use indexmap::IndexMap;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Minimum vertical gap between resolved labels, in pixels.
pub const DEFAULT_MIN_GAP: f32 = 2.0;

/// A candidate label with its natural (unconstrained) anchor position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LabelDimension {
    pub id: String,
    pub width: f32,
    pub height: f32,
    pub preferred_x: f32,
    pub preferred_y: f32,
}

/// The plot region labels must stay inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DrawingArea {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Union-find over label indices with iterative find and path compression.
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            // Path halving keeps chains shallow without recursion
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_b] = root_a;
        }
    }
}

struct WorkingLabel {
    input_index: usize,
    preferred_y: f32,
    bounded_y: f32,
    final_y: f32,
}

fn clamp_to_bounds(value: f32, lo: f32, hi: f32) -> f32 {
    if hi < lo {
        // Area shorter than one label; pin everything to its midpoint
        (lo + hi) / 2.0
    } else {
        value.clamp(lo, hi)
    }
}

/// Resolves a vertical position for every candidate label so that
/// overlapping labels spread apart while staying inside the drawing area.
///
/// Labels whose clamped positions sit closer than `label_height + min_gap`
/// merge into a group (transitively). Each group is re-centered on the mean
/// of its members' preferred positions and shifted back inside the area as
/// a rigid block; a group taller than the area compresses its gaps to a
/// 1px floor instead. Relative order within a group is always preserved,
/// and every input id receives exactly one position.
pub fn calculate_label_y_positions(
    dimensions: &[LabelDimension],
    drawing_area: &DrawingArea,
    label_height: f32,
    min_gap: f32,
) -> IndexMap<String, f32> {
    if dimensions.is_empty() {
        return IndexMap::new();
    }

    let lo = drawing_area.y + label_height / 2.0;
    let hi = drawing_area.y + drawing_area.height - label_height / 2.0;

    // Sorted by preferred position; clamping is monotone, so this order
    // also holds for the bounded positions.
    let mut labels: Vec<WorkingLabel> = dimensions
        .iter()
        .enumerate()
        .map(|(input_index, d)| {
            let bounded_y = clamp_to_bounds(d.preferred_y, lo, hi);
            WorkingLabel {
                input_index,
                preferred_y: d.preferred_y,
                bounded_y,
                final_y: bounded_y,
            }
        })
        .sorted_by_key(|l| OrderedFloat(l.preferred_y))
        .collect();

    let spacing = label_height + min_gap;

    let mut groups = UnionFind::new(labels.len());
    for i in 1..labels.len() {
        if labels[i].bounded_y - labels[i - 1].bounded_y < spacing {
            groups.union(i - 1, i);
        }
    }

    // Adjacent connectivity over a sorted list makes every group a
    // contiguous run, but membership still goes through union-find roots.
    let mut members_by_root: IndexMap<usize, Vec<usize>> = IndexMap::new();
    for i in 0..labels.len() {
        let root = groups.find(i);
        members_by_root.entry(root).or_insert_with(Vec::new).push(i);
    }

    for members in members_by_root.values() {
        if members.len() < 2 {
            continue;
        }

        let count = members.len() as f32;
        let needed = count * label_height + (count - 1.0) * min_gap;

        if needed > drawing_area.height {
            // Not enough room at the requested gap; compress toward a 1px
            // floor and center the block on the area.
            let gap = ((drawing_area.height - count * label_height) / (count - 1.0)).max(1.0);
            tracing::trace!(
                members = members.len(),
                gap,
                "label group exceeds drawing area, compressing gaps"
            );
            let total = count * label_height + (count - 1.0) * gap;
            let area_center = drawing_area.y + drawing_area.height / 2.0;
            let mut y = area_center - total / 2.0 + label_height / 2.0;
            for &i in members {
                labels[i].final_y = y;
                y += label_height + gap;
            }
        } else {
            // Center the block on the mean preferred position, then shift
            // it back inside the bounds as a rigid unit.
            let mean: f32 = members.iter().map(|&i| labels[i].preferred_y).sum::<f32>() / count;
            let extent = (count - 1.0) * spacing;
            let mut first = mean - extent / 2.0;

            if first < lo {
                first = lo;
            } else if first + extent > hi {
                first = hi - extent;
            }

            for (offset, &i) in members.iter().enumerate() {
                labels[i].final_y = first + offset as f32 * spacing;
            }
        }
    }

    // Emit in input order so the map iterates the way the caller supplied
    // the labels.
    let mut by_input: Vec<(usize, f32)> = labels
        .iter()
        .map(|l| (l.input_index, l.final_y))
        .collect();
    by_input.sort_by_key(|(input_index, _)| *input_index);

    let mut out = IndexMap::with_capacity(dimensions.len());
    for (input_index, final_y) in by_input {
        out.insert(dimensions[input_index].id.clone(), final_y);
    }
    out
}

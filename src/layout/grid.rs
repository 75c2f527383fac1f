//! Grid placement for small media sets.
//!
//! Decisions are a pure function of item count and the (width, height)
//! pairs. The four-item case scales every item to a common width,
//! scores all 24 orderings with a two-row cost function, and keeps the
//! cheapest; smaller counts use direct orientation rules.

use serde::{Deserialize, Serialize};

/// What a media item is. Rendering cares; layout does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Photo,
    Video,
    AnimatedGif,
}

/// Rectangle descriptor for one attachment. Dimensions come from the
/// scraped metadata and may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub kind: MediaKind,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl MediaItem {
    pub fn new(
        id: impl Into<String>,
        kind: MediaKind,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            width,
            height,
        }
    }
}

/// Dimensions of one item hypothetically rendered at the common width.
/// Index-parallel with the input slice; items that could not be scaled
/// carry `None` in both fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledItem {
    pub scaled_width: Option<f64>,
    pub scaled_height: Option<f64>,
}

/// The chosen arrangement, as item indices into the input slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPlan {
    /// Vertical stack of horizontal rows; each inner list runs left to
    /// right.
    Rows(Vec<Vec<usize>>),
    /// Two side-by-side columns, each listed top to bottom.
    Columns(Vec<usize>, Vec<usize>),
    /// Auto-fit wrapping grid in input order; no height optimization.
    Flow(Vec<usize>),
}

/// Landscape iff `width >= height`, with missing dimensions read as
/// zero. Note `0 >= 0` holds, so a fully dimensionless item counts as
/// landscape.
pub fn is_landscape(item: &MediaItem) -> bool {
    item.width.unwrap_or(0.0) >= item.height.unwrap_or(0.0)
}

/// Scale every item to the narrowest width in the set, keeping aspect
/// ratio. Missing widths count as 1 when picking that minimum; a
/// non-positive minimum leaves the whole set unscaled, as does a
/// missing or zero dimension on an individual item.
pub fn scale_media_list(items: &[MediaItem]) -> Vec<ScaledItem> {
    const UNSCALED: ScaledItem = ScaledItem {
        scaled_width: None,
        scaled_height: None,
    };

    if items.is_empty() {
        return Vec::new();
    }
    let min_width = items
        .iter()
        .map(|m| m.width.unwrap_or(1.0))
        .fold(f64::INFINITY, f64::min);
    if min_width <= 0.0 {
        return vec![UNSCALED; items.len()];
    }

    items
        .iter()
        .map(|m| match (m.width, m.height) {
            (Some(w), Some(h)) if w != 0.0 && h != 0.0 => ScaledItem {
                scaled_width: Some(min_width),
                scaled_height: Some(h * min_width / w),
            },
            _ => UNSCALED,
        })
        .collect()
}

/// All orderings of the given indices, in the enumeration order the
/// four-item search relies on for tie-breaking.
pub fn permutations(indices: &[usize]) -> Vec<Vec<usize>> {
    if indices.len() <= 1 {
        return vec![indices.to_vec()];
    }
    let mut result = Vec::new();
    for (i, &first) in indices.iter().enumerate() {
        let rest: Vec<usize> = indices
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, &v)| v)
            .collect();
        for mut perm in permutations(&rest) {
            perm.insert(0, first);
            result.push(perm);
        }
    }
    result
}

/// Choose an arrangement for the given items.
///
/// Dispatches purely on count: one to three items follow orientation
/// case rules, exactly four run the permutation search, and anything
/// else (including zero) falls back to a flow grid in input order.
pub fn plan_layout(items: &[MediaItem]) -> LayoutPlan {
    match items.len() {
        1 => LayoutPlan::Rows(vec![vec![0]]),
        2 => plan_two(items),
        3 => plan_three(items),
        4 => plan_four(items),
        n => {
            tracing::debug!(count = n, "unhandled media count, using flow layout");
            LayoutPlan::Flow((0..n).collect())
        }
    }
}

fn plan_two(items: &[MediaItem]) -> LayoutPlan {
    let first_wide = is_landscape(&items[0]);
    let second_wide = is_landscape(&items[1]);

    if !first_wide && !second_wide {
        // Two portraits sit side by side.
        return LayoutPlan::Rows(vec![vec![0, 1]]);
    }
    // Otherwise stack vertically, landscape first on a mixed pair.
    if first_wide {
        LayoutPlan::Rows(vec![vec![0], vec![1]])
    } else {
        LayoutPlan::Rows(vec![vec![1], vec![0]])
    }
}

fn plan_three(items: &[MediaItem]) -> LayoutPlan {
    let wide: Vec<usize> = (0..3).filter(|&i| is_landscape(&items[i])).collect();
    let tall: Vec<usize> = (0..3).filter(|&i| !is_landscape(&items[i])).collect();

    match wide.len() {
        3 => LayoutPlan::Rows(vec![vec![0], vec![1], vec![2]]),
        0 => LayoutPlan::Rows(vec![vec![0, 1, 2]]),
        // Two landscapes stack in the left column, the portrait stands
        // alone on the right.
        2 => LayoutPlan::Columns(wide, tall),
        // One landscape full width on top, two portraits below.
        _ => LayoutPlan::Rows(vec![wide, tall]),
    }
}

fn plan_four(items: &[MediaItem]) -> LayoutPlan {
    let scaled = scale_media_list(items);
    let heights: Vec<f64> = scaled
        .iter()
        .map(|s| s.scaled_height.unwrap_or(0.0))
        .collect();

    // Score each ordering [a, b, c, d] as a 2x2 grid: row one is (a, b),
    // row two is (c, d), each row as tall as its taller member. Strict
    // `<` keeps the first minimum in enumeration order.
    let mut best_perm = vec![0, 1, 2, 3];
    let mut best_cost = f64::INFINITY;
    for perm in permutations(&[0, 1, 2, 3]) {
        let cost =
            heights[perm[0]].max(heights[perm[1]]) + heights[perm[2]].max(heights[perm[3]]);
        if cost < best_cost {
            best_cost = cost;
            best_perm = perm;
        }
    }

    // The winning ordering renders as two columns taking alternating
    // members, not as the 2x2 grid the cost models.
    LayoutPlan::Columns(
        vec![best_perm[0], best_perm[2]],
        vec![best_perm[1], best_perm[3]],
    )
}

//! Nested Shelf Maker
//!
//! Derives the concentric profiles of a nested, box-jointed shelf and the
//! physical layers cut from them.
//!
//! Each profile is a rounded frame. The frame of shelf `i + 1` wraps the
//! frame of shelf `i` with one tool gap of clearance on every side, so the
//! whole set can be cut from a single panel and slid apart afterwards.
//! Front, middle and back layers all use the same stencil; the middle layers
//! additionally carry the notch reliefs that let the joints seat square.
//!
//! Everything in here is a pure function of its input.

pub mod types;

pub use types::{
    clamp_radius, layer_count, Notch, NotchSide, Outline, OutlineSet, PartType, ShelfParameters,
    ShelfPart,
};

use shelfkit_core::clamp;
use std::sync::Arc;

/// Derive the nested outlines, innermost first.
///
/// The last element is the outermost profile and therefore the footprint of
/// every part. `shelf_count <= 0` yields an empty set.
pub fn derive_outlines(params: &ShelfParameters) -> OutlineSet {
    if params.shelf_count <= 0 {
        return OutlineSet::default();
    }

    let border = params.border_thickness;
    let tool_gap = params.tool_gap;
    let radius_fraction = params.radius_fraction();
    let min_radius = tool_gap / 2.0;

    let mut outlines = Vec::with_capacity(params.shelf_count as usize);
    let mut inner_width = params.min_inner_width;
    let mut inner_height = params.min_inner_height;

    for _ in 0..params.shelf_count {
        let inner_radius = min_radius.max(radius_fraction * inner_width.min(inner_height));
        let outer_radius = inner_radius + border;
        let outer_width = inner_width + border * 2.0;
        let outer_height = inner_height + border * 2.0;

        let notches = build_notches(
            &NotchFrame {
                outer_width,
                outer_height,
                outer_radius,
                inner_width,
            },
            params,
        );

        outlines.push(Outline {
            outer_width,
            outer_height,
            outer_radius,
            inner_width,
            inner_height,
            inner_radius,
            notches,
        });

        // The next shelf must clear this one's border by the tool gap on both sides
        inner_width = outer_width + tool_gap * 2.0;
        inner_height = outer_height + tool_gap * 2.0;
    }

    tracing::debug!(
        shelves = outlines.len(),
        outer_width = outlines.last().map(|o| o.outer_width),
        outer_height = outlines.last().map(|o| o.outer_height),
        "derived nested outlines"
    );

    OutlineSet::new(outlines)
}

/// The parts of an outline the notch layout depends on.
struct NotchFrame {
    outer_width: f64,
    outer_height: f64,
    outer_radius: f64,
    inner_width: f64,
}

/// Lay out notch rows along the straight part of the vertical edges.
///
/// Rows are spaced by the notch interval and the group is centred in the
/// straight run between the corner arcs. Each row produces a left and a
/// right notch at the same height.
fn build_notches(frame: &NotchFrame, params: &ShelfParameters) -> Vec<Notch> {
    let tool_width = params.tool_gap;
    let size = params.notch_size.max(tool_width);
    let interval = params.notch_interval.max(1.0);
    let straight_height = (frame.outer_height - frame.outer_radius * 2.0).max(0.0);

    if straight_height < size {
        return Vec::new();
    }

    let count = (((straight_height - size) / interval).floor() as usize + 1).max(1);
    let used = (count - 1) as f64 * interval + size;
    let start = frame.outer_radius + (straight_height - used) / 2.0;

    let entrance_radius = params.notch_corner_radius.min(size / 2.0).max(0.0);
    let material_radius = (tool_width / 2.0).min(size / 2.0).max(0.0);

    let inner_offset_x = (frame.outer_width - frame.inner_width) / 2.0;
    let max_x = frame.outer_width - size;
    let left_x = clamp(inner_offset_x - size, 0.0, max_x);
    let right_x = clamp(inner_offset_x + frame.inner_width, 0.0, max_x);

    let mut notches = Vec::with_capacity(count * 2);
    for index in 0..count {
        let y = start + index as f64 * interval;

        for (x, side) in [(left_x, NotchSide::Left), (right_x, NotchSide::Right)] {
            notches.push(Notch {
                x,
                y,
                size,
                entrance_radius,
                material_radius,
                side,
            });
        }
    }

    notches
}

/// Turn an outline set into the physical layers of the stack.
///
/// Emits front, `middle_count` middles and back, every one sized to the
/// outermost outline and sharing `outlines`. The list is truncated to
/// [`layer_count`] entries and never padded. An empty set yields no parts.
pub fn assemble_parts(outlines: &Arc<OutlineSet>, middle_count: i32) -> Vec<Arc<ShelfPart>> {
    if outlines.is_empty() {
        return Vec::new();
    }

    let layers = layer_count(middle_count);
    let mut parts = Vec::with_capacity(layers);

    let mut push = |part_type: PartType, label: String| {
        if let Some(part) = ShelfPart::new(part_type, label, Arc::clone(outlines)) {
            parts.push(Arc::new(part));
        }
    };

    push(PartType::Front, "Front".to_string());
    for middle_index in 0..middle_count.max(0) {
        push(PartType::Middle, format!("Middle {}", middle_index + 1));
    }
    push(PartType::Back, "Back".to_string());

    parts.truncate(layers);
    parts
}

/// Derive outlines and assemble parts in one call.
pub fn build_shelf_parts(params: &ShelfParameters) -> Vec<Arc<ShelfPart>> {
    let outlines = Arc::new(derive_outlines(params));
    assemble_parts(&outlines, params.middle_count)
}

/// Total depth of the assembled stack.
pub fn stack_depth(plywood_thickness: f64, middle_count: i32) -> f64 {
    plywood_thickness * layer_count(middle_count) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(shelf_count: i32) -> ShelfParameters {
        ShelfParameters {
            shelf_count,
            middle_count: 6,
            min_inner_width: 109.0,
            min_inner_height: 109.0,
            border_thickness: 30.0,
            tool_gap: 6.0,
            radius_percent: 15.0,
            notch_size: 8.0,
            notch_interval: 20.0,
            notch_corner_radius: 1.0,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_single_shelf_dimensions() {
        let outlines = derive_outlines(&params(1));
        assert_eq!(outlines.len(), 1);

        let o = &outlines[0];
        assert_eq!(o.inner_width, 109.0);
        assert_eq!(o.inner_height, 109.0);
        assert!(approx(o.inner_radius, 16.35));
        assert!(approx(o.outer_radius, 46.35));
        assert_eq!(o.outer_width, 169.0);
        assert_eq!(o.outer_height, 169.0);
    }

    #[test]
    fn test_non_positive_shelf_count_is_empty() {
        assert!(derive_outlines(&params(0)).is_empty());
        assert!(derive_outlines(&params(-3)).is_empty());
        assert!(build_shelf_parts(&params(0)).is_empty());
    }

    #[test]
    fn test_radius_floor_is_half_tool_gap() {
        let mut p = params(1);
        p.radius_percent = 0.0;
        let outlines = derive_outlines(&p);
        assert_eq!(outlines[0].inner_radius, 3.0);
        assert_eq!(outlines[0].outer_radius, 33.0);
    }

    #[test]
    fn test_radius_percent_is_clamped() {
        let mut p = params(1);
        p.radius_percent = 80.0;
        let outlines = derive_outlines(&p);
        assert!(approx(outlines[0].inner_radius, 54.5));

        p.radius_percent = -10.0;
        let outlines = derive_outlines(&p);
        assert_eq!(outlines[0].inner_radius, 3.0);
    }

    #[test]
    fn test_second_shelf_wraps_first() {
        let outlines = derive_outlines(&params(2));
        assert_eq!(outlines[1].inner_width, 169.0 + 12.0);
        assert_eq!(outlines[1].outer_width, 181.0 + 60.0);
    }

    #[test]
    fn test_notch_layout_for_reference_shelf() {
        let outlines = derive_outlines(&params(1));
        let o = &outlines[0];

        // straight run 169 - 2 * 46.35 = 76.3, size 8, interval 20
        // count = floor(68.3 / 20) + 1 = 4, used = 68, start = 46.35 + 4.15
        assert_eq!(o.notches.len(), 8);
        let first = &o.notches[0];
        assert!(approx(first.y, 50.5));
        assert_eq!(first.side, NotchSide::Left);
        assert_eq!(first.x, 22.0);
        assert_eq!(first.size, 8.0);
        assert_eq!(first.entrance_radius, 1.0);
        assert_eq!(first.material_radius, 3.0);

        let second = &o.notches[1];
        assert_eq!(second.side, NotchSide::Right);
        assert_eq!(second.x, 139.0);
        assert_eq!(second.y, first.y);

        assert!(approx(o.notches[7].y, 50.5 + 60.0));
    }

    #[test]
    fn test_short_edge_has_no_notches() {
        let mut p = params(1);
        p.radius_percent = 50.0;
        // inner radius 54.5, outer radius 84.5 on a 169 high frame: no straight run
        let outlines = derive_outlines(&p);
        assert!(outlines[0].notches.is_empty());
    }

    #[test]
    fn test_notch_size_never_below_tool_gap() {
        let mut p = params(1);
        p.notch_size = 2.0;
        p.notch_corner_radius = 10.0;
        let outlines = derive_outlines(&p);
        let notch = outlines[0].notches[0];
        assert_eq!(notch.size, 6.0);
        assert_eq!(notch.entrance_radius, 3.0);
        assert_eq!(notch.material_radius, 3.0);
    }

    #[test]
    fn test_assemble_labels_and_ids() {
        let parts = build_shelf_parts(&params(3));
        assert_eq!(parts.len(), 8);
        assert_eq!(parts[0].id, "front-Front");
        assert_eq!(parts[1].label, "Middle 1");
        assert_eq!(parts[6].id, "middle-Middle 6");
        assert_eq!(parts[7].part_type, PartType::Back);

        let largest = parts[0].outlines.outermost().map(|o| o.outer_width);
        assert!(parts.iter().all(|p| Some(p.width) == largest));
        assert!(parts
            .windows(2)
            .all(|w| Arc::ptr_eq(&w[0].outlines, &w[1].outlines)));
    }

    #[test]
    fn test_negative_middle_count_keeps_front_and_back() {
        let mut p = params(2);
        p.middle_count = -4;
        let parts = build_shelf_parts(&p);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].part_type, PartType::Front);
        assert_eq!(parts[1].part_type, PartType::Back);
    }

    #[test]
    fn test_stack_depth() {
        assert_eq!(stack_depth(18.0, 6), 144.0);
        assert_eq!(stack_depth(18.0, -1), 36.0);
    }
}

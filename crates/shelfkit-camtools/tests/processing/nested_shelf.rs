//! Outline derivation and part assembly against hand-computed layouts

use shelfkit_camtools::nested_shelf::{
    build_shelf_parts, derive_outlines, stack_depth, NotchSide, PartType, ShelfParameters,
};

fn stock_parameters() -> ShelfParameters {
    ShelfParameters {
        shelf_count: 7,
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

#[test]
fn test_stock_outline_chain() {
    let outlines = derive_outlines(&stock_parameters());
    assert_eq!(outlines.len(), 7);

    // each cavity grows by two borders plus two tool gaps
    for (index, outline) in outlines.iter().enumerate() {
        let expected_inner = 109.0 + 72.0 * index as f64;
        assert!((outline.inner_width - expected_inner).abs() < 1e-9);
        assert!((outline.outer_width - (expected_inner + 60.0)).abs() < 1e-9);
        assert!((outline.outer_radius - outline.inner_radius - 30.0).abs() < 1e-9);
    }

    let outermost = outlines.outermost().expect("seven outlines");
    assert!((outermost.outer_width - 601.0).abs() < 1e-9);
    assert!((outermost.outer_height - 601.0).abs() < 1e-9);
}

#[test]
fn test_notches_sit_beside_the_cavity() {
    let outlines = derive_outlines(&stock_parameters());

    for outline in outlines.iter() {
        let (inner_dx, _) = outline.inner_offset();
        for notch in outline.notches_on(NotchSide::Left) {
            assert!((notch.x + notch.size - inner_dx).abs() < 1e-9);
        }
        for notch in outline.notches_on(NotchSide::Right) {
            assert!((notch.x - (inner_dx + outline.inner_width)).abs() < 1e-9);
        }
        for notch in &outline.notches {
            assert!(notch.y >= outline.outer_radius - 1e-9);
            assert!(notch.y + notch.size <= outline.outer_height - outline.outer_radius + 1e-9);
            assert!((notch.material_radius - 3.0).abs() < 1e-9);
            assert!((notch.entrance_radius - 1.0).abs() < 1e-9);
        }
    }
}

#[test]
fn test_stock_stack() {
    let parts = build_shelf_parts(&stock_parameters());
    assert_eq!(parts.len(), 8);
    assert_eq!(parts[0].part_type, PartType::Front);
    assert_eq!(parts[7].part_type, PartType::Back);
    assert!(parts[1..7].iter().all(|p| p.part_type == PartType::Middle));
    assert_eq!(parts[6].id, "middle-Middle 6");

    assert!((stack_depth(18.0, 6) - 144.0).abs() < 1e-9);
}

#[test]
fn test_single_cavity_without_room_for_notches() {
    // radius 50% of a 20 mm cavity leaves no straight edge for reliefs
    let params = ShelfParameters {
        shelf_count: 1,
        min_inner_width: 20.0,
        min_inner_height: 20.0,
        border_thickness: 2.0,
        radius_percent: 50.0,
        ..stock_parameters()
    };
    let outlines = derive_outlines(&params);
    assert_eq!(outlines.len(), 1);
    assert!(outlines[0].notches.is_empty());
}

//! Packing the stock stack onto plywood sheets

use shelfkit_camtools::nested_shelf::{build_shelf_parts, ShelfParameters};
use shelfkit_camtools::planner::{plan_shelves, SheetSpec};
use shelfkit_camtools::sheet_layout::pack_sheets;

fn parameters(shelf_count: i32, middle_count: i32) -> ShelfParameters {
    ShelfParameters {
        shelf_count,
        middle_count,
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
fn test_stock_stack_fills_one_sheet() {
    let plan = plan_shelves(
        &parameters(7, 6),
        SheetSpec {
            width: 1220.0,
            height: 2440.0,
            gap: 6.0,
        },
    );

    assert_eq!(plan.sheets.len(), 1);
    let sheet = &plan.sheets[0];
    assert_eq!(sheet.len(), 8);

    let positions: Vec<(f64, f64)> = sheet.placements.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(
        positions,
        vec![
            (6.0, 6.0),
            (613.0, 6.0),
            (6.0, 613.0),
            (613.0, 613.0),
            (6.0, 1220.0),
            (613.0, 1220.0),
            (6.0, 1827.0),
            (613.0, 1827.0),
        ]
    );
}

#[test]
fn test_short_sheets_take_one_row_each() {
    let parts = build_shelf_parts(&parameters(7, 6));
    let sheets = pack_sheets(&parts, 1220.0, 1000.0, 6.0);

    assert_eq!(sheets.len(), 4);
    assert_eq!(sheets[3].id, "sheet-4");
    assert!(sheets.iter().all(|s| s.len() == 2));
    assert!(sheets
        .iter()
        .flat_map(|s| &s.placements)
        .all(|p| p.y == 6.0));
}

#[test]
fn test_every_part_is_placed_once() {
    let parts = build_shelf_parts(&parameters(3, 4));
    let sheets = pack_sheets(&parts, 600.0, 600.0, 6.0);

    let mut placed: Vec<&str> = sheets
        .iter()
        .flat_map(|s| &s.placements)
        .map(|p| p.part.id.as_str())
        .collect();
    placed.sort_unstable();

    let mut expected: Vec<&str> = parts.iter().map(|p| p.id.as_str()).collect();
    expected.sort_unstable();

    assert_eq!(placed, expected);
}

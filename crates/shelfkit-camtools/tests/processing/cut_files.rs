//! SVG, G-code and JSON output for a planned stack

use shelfkit_camtools::export::{write_plan, ExportFormat};
use shelfkit_camtools::gcode_export::{generate_sheet_gcode, CutProgramSettings};
use shelfkit_camtools::nested_shelf::ShelfParameters;
use shelfkit_camtools::planner::{plan_shelves, ShelfPlan, SheetSpec};
use shelfkit_camtools::svg_export::render_sheet_svg;

fn small_plan() -> ShelfPlan {
    plan_shelves(
        &ShelfParameters {
            shelf_count: 2,
            middle_count: 1,
            min_inner_width: 109.0,
            min_inner_height: 109.0,
            border_thickness: 30.0,
            tool_gap: 6.0,
            radius_percent: 15.0,
            notch_size: 8.0,
            notch_interval: 20.0,
            notch_corner_radius: 1.0,
        },
        SheetSpec {
            width: 1220.0,
            height: 2440.0,
            gap: 6.0,
        },
    )
}

#[test]
fn test_svg_marks_every_part() {
    let plan = small_plan();
    let svg = render_sheet_svg(&plan.sheets[0], 1220.0, 2440.0);

    assert!(svg.contains("viewBox=\"0 0 1220 2440\""));
    assert!(svg.contains("data-part=\"front-Front\""));
    assert!(svg.contains("data-part=\"middle-Middle 1\" data-type=\"middle\""));
    assert!(svg.contains("data-part=\"back-Back\""));
    // two outlines per part
    assert_eq!(svg.matches("fill-rule=\"evenodd\"").count(), 6);
    // only the middle part carries reliefs, one path per outline
    assert_eq!(svg.matches("fill=\"#f8fafc\"/>").count(), 2);
}

#[test]
fn test_gcode_program_structure() {
    let plan = small_plan();
    let settings = CutProgramSettings {
        passes: 2,
        ..CutProgramSettings::default()
    };
    let gcode = generate_sheet_gcode(&plan.sheets[0], 1220.0, 2440.0, &settings)
        .expect("settings are valid");

    assert!(gcode.contains("G21 ; Set units to millimeters"));
    assert!(gcode.contains("; Part: Middle 1"));
    assert!(gcode.contains("; outline 2 relief 1"));
    assert!(gcode.contains("; Pass 2/2 at Z-0.500"));
    assert!(!gcode.contains("Z-0.000"));
    assert!(gcode.trim_end().ends_with("M2 ; Program end"));

    // reliefs and cavity are cut before the frame of the same outline
    let middle = gcode.find("; Part: Middle 1").expect("middle part");
    let middle = &gcode[middle..];
    let relief = middle.find("; outline 1 relief 1").expect("relief cut");
    let cavity = middle.find("; outline 1 cavity").expect("cavity cut");
    let frame = middle.find("; outline 1 frame").expect("frame cut");
    assert!(relief < cavity && cavity < frame);
}

#[test]
fn test_invalid_program_settings_are_rejected() {
    let plan = small_plan();
    let settings = CutProgramSettings {
        segment_length: 0.0,
        ..CutProgramSettings::default()
    };
    assert!(generate_sheet_gcode(&plan.sheets[0], 1220.0, 2440.0, &settings).is_err());
}

#[test]
fn test_write_plan_all_formats() {
    let plan = small_plan();
    let dir = tempfile::tempdir().expect("temp dir");

    let written = write_plan(
        &plan,
        dir.path(),
        &ExportFormat::ALL,
        &CutProgramSettings::default(),
    )
    .expect("export succeeds");

    let names: Vec<String> = written
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["sheet-1.svg", "sheet-1.gcode", "layout.json"]);

    let json = std::fs::read_to_string(dir.path().join("layout.json")).expect("layout written");
    let restored: ShelfPlan = serde_json::from_str(&json).expect("layout parses");
    assert_eq!(restored.parts.len(), 3);
    assert_eq!(restored.sheets[0].id, "sheet-1");
    assert_eq!(restored.sheets[0].placements[1].part.label, "Middle 1");
}

#[test]
fn test_write_plan_without_shelves_writes_only_layout() {
    let mut plan = small_plan();
    plan.parameters.shelf_count = 0;
    plan.parts.clear();
    plan.sheets.clear();
    let dir = tempfile::tempdir().expect("temp dir");

    let written = write_plan(&plan, dir.path(), &ExportFormat::ALL, &CutProgramSettings::default())
        .expect("an empty plan exports");
    assert_eq!(written, vec![dir.path().join("layout.json")]);

    let json = std::fs::read_to_string(&written[0]).expect("layout written");
    let restored: ShelfPlan = serde_json::from_str(&json).expect("layout parses");
    assert!(restored.sheets.is_empty());
}

#[test]
fn test_write_plan_rejects_invalid_parameters() {
    let mut plan = small_plan();
    plan.parameters.radius_percent = 80.0;
    let dir = tempfile::tempdir().expect("temp dir");

    let err = write_plan(&plan, dir.path(), &[ExportFormat::Json], &CutProgramSettings::default())
        .unwrap_err();
    assert!(matches!(err, shelfkit_camtools::CamToolError::Parameter(_)));
}

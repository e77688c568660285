//! SVG sheet export
//!
//! One SVG document per stock sheet. Each outline of a placed part is drawn
//! as an even-odd filled frame (outer contour plus cavity), tinted by its
//! position in the outline set; middle layers also show their notch reliefs.
//! Units are millimetres.

use crate::contour::{fmt_mm, placement_cuts};
use crate::sheet_layout::SheetLayout;
use std::fmt::Write as _;

/// Frame tints, indexed by outline position modulo the palette length.
pub const OUTLINE_PALETTE: [&str; 8] = [
    "#0f172a", "#0f766e", "#7c3aed", "#c2410c", "#1d4ed8", "#0f766e", "#b45309", "#4f46e5",
];

const SHEET_FILL: &str = "#f8fafc";
const SHEET_STROKE: &str = "#cbd5f5";
const LABEL_FILL: &str = "#111827";

/// Render one sheet layout as a standalone SVG document.
pub fn render_sheet_svg(sheet: &SheetLayout, sheet_width: f64, sheet_height: f64) -> String {
    let w = fmt_mm(sheet_width);
    let h = fmt_mm(sheet_height);
    let mut svg = String::new();

    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\">"
    );
    let _ = writeln!(svg, "  <title>{}</title>", escape_xml(&sheet.id));
    let _ = writeln!(
        svg,
        "  <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"{SHEET_FILL}\" stroke=\"{SHEET_STROKE}\" stroke-width=\"2\"/>"
    );

    for placement in &sheet.placements {
        let part = &placement.part;
        let _ = writeln!(
            svg,
            "  <g data-part=\"{}\" data-type=\"{}\">",
            escape_xml(&part.id),
            part.part_type
        );

        for cut in placement_cuts(placement) {
            let color = OUTLINE_PALETTE[cut.outline_index % OUTLINE_PALETTE.len()];
            let _ = writeln!(
                svg,
                "    <path d=\"{} {}\" fill=\"{color}\" fill-opacity=\"0.18\" fill-rule=\"evenodd\"/>",
                cut.outer.to_svg_path(),
                cut.inner.to_svg_path()
            );

            if !cut.reliefs.is_empty() {
                let reliefs: Vec<String> = cut.reliefs.iter().map(|c| c.to_svg_path()).collect();
                let _ = writeln!(
                    svg,
                    "    <path d=\"{}\" fill=\"{SHEET_FILL}\"/>",
                    reliefs.join(" ")
                );
            }
        }

        let _ = writeln!(
            svg,
            "    <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"{LABEL_FILL}\">{}</text>",
            fmt_mm(placement.x + 6.0),
            fmt_mm(placement.y + 16.0),
            escape_xml(&part.label)
        );
        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

//! Cut program export
//!
//! Emits one G-code program per stock sheet. Every outline of every placed
//! part is cut innermost first, and within an outline the notch reliefs and
//! cavity go before the outer frame so the part never comes loose before
//! its inner features are done.
//!
//! Sheet coordinates have Y pointing down; the program mirrors Y so the
//! machine origin is the sheet's bottom-left corner.

use crate::arc_expander::{ArcExpander, ArcExpanderConfig};
use crate::contour::{placement_cuts, Contour};
use crate::error::{CamToolError, CamToolResult};
use crate::optimizer::GCodeOptimizer;
use crate::sheet_layout::SheetLayout;
use serde::{Deserialize, Serialize};
use shelfkit_core::Point;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutProgramSettings {
    /// Number of passes over every contour
    pub passes: u32,
    /// Depth added per pass (mm)
    pub z_step_down: f64,
    /// Spindle speed or laser power (S word)
    pub power: u32,
    /// Cutting feed rate (mm/min)
    pub feed_rate: f64,
    /// Travel height between contours (mm)
    pub safe_z: f64,
    /// Maximum chord length when flattening corner arcs (mm)
    pub segment_length: f64,
}

impl Default for CutProgramSettings {
    fn default() -> Self {
        Self {
            passes: 3,
            z_step_down: 0.5,
            power: 1000,
            feed_rate: 500.0,
            safe_z: 5.0,
            segment_length: 0.5,
        }
    }
}

impl CutProgramSettings {
    pub fn validate(&self) -> CamToolResult<()> {
        if self.passes == 0 {
            return Err(CamToolError::InvalidParameters(
                "passes must be at least 1".to_string(),
            ));
        }
        if !(self.feed_rate.is_finite() && self.feed_rate > 0.0) {
            return Err(CamToolError::InvalidParameters(format!(
                "feed rate must be positive, got {}",
                self.feed_rate
            )));
        }
        if !(self.z_step_down.is_finite() && self.z_step_down >= 0.0) {
            return Err(CamToolError::InvalidParameters(format!(
                "z step down must not be negative, got {}",
                self.z_step_down
            )));
        }
        if !(self.segment_length.is_finite() && self.segment_length > 0.0) {
            return Err(CamToolError::InvalidParameters(format!(
                "segment length must be positive, got {}",
                self.segment_length
            )));
        }
        Ok(())
    }
}

/// Generate the cut program for one sheet.
pub fn generate_sheet_gcode(
    sheet: &SheetLayout,
    sheet_width: f64,
    sheet_height: f64,
    settings: &CutProgramSettings,
) -> CamToolResult<String> {
    settings.validate()?;

    let expander = ArcExpander::new(ArcExpanderConfig {
        segment_length: settings.segment_length,
        ..ArcExpanderConfig::default()
    });

    let mut gcode = String::new();

    gcode.push_str("; ShelfKit cut program\n");
    gcode.push_str(&format!("; Sheet: {}\n", sheet.id));
    gcode.push_str(&format!(
        "; Sheet size: {}x{} mm\n",
        sheet_width, sheet_height
    ));
    gcode.push_str(&format!("; Parts: {}\n", sheet.placements.len()));
    for placement in &sheet.placements {
        gcode.push_str(&format!(
            ";   {} at X{:.3} Y{:.3} ({:.3}x{:.3} mm)\n",
            placement.part.label,
            placement.x,
            placement.y,
            placement.part.width,
            placement.part.height
        ));
    }
    gcode.push_str(";\n");
    gcode.push_str(&format!("; Passes: {}\n", settings.passes));
    gcode.push_str(&format!("; Z step down: {} mm\n", settings.z_step_down));
    gcode.push_str(&format!("; Power: S{}\n", settings.power));
    gcode.push_str(&format!("; Feed rate: {:.0} mm/min\n", settings.feed_rate));
    gcode.push_str("; Origin: bottom-left corner of the sheet\n");
    gcode.push_str(";\n");

    gcode.push_str("G21 ; Set units to millimeters\n");
    gcode.push_str("G90 ; Absolute positioning\n");
    gcode.push_str("G17 ; XY plane selection\n");
    gcode.push_str(&format!(
        "G0 Z{:.3} ; Move to safe height\n\n",
        settings.safe_z
    ));

    for placement in &sheet.placements {
        gcode.push_str(&format!("; Part: {}\n", placement.part.label));

        for cut in placement_cuts(placement) {
            for (index, relief) in cut.reliefs.iter().enumerate() {
                let name = format!("outline {} relief {}", cut.outline_index + 1, index + 1);
                emit_contour(&mut gcode, &name, relief, &expander, sheet_height, settings);
            }
            let name = format!("outline {} cavity", cut.outline_index + 1);
            emit_contour(&mut gcode, &name, &cut.inner, &expander, sheet_height, settings);
            let name = format!("outline {} frame", cut.outline_index + 1);
            emit_contour(&mut gcode, &name, &cut.outer, &expander, sheet_height, settings);
        }

        gcode.push('\n');
    }

    gcode.push_str("M5 ; Ensure laser off\n");
    gcode.push_str(&format!(
        "G0 Z{:.3} ; Move to safe height\n",
        settings.safe_z
    ));
    gcode.push_str("G0 X0 Y0 ; Return to origin\n");
    gcode.push_str("M2 ; Program end\n");

    let lines: Vec<String> = gcode.lines().map(str::to_string).collect();
    let mut optimized = GCodeOptimizer::optimize(&lines).join("\n");
    optimized.push('\n');

    tracing::debug!(
        sheet = %sheet.id,
        lines = lines.len(),
        "generated cut program"
    );

    Ok(optimized)
}

fn emit_contour(
    gcode: &mut String,
    name: &str,
    contour: &Contour,
    expander: &ArcExpander,
    sheet_height: f64,
    settings: &CutProgramSettings,
) {
    let points = contour.flatten(expander);
    let Some(first) = points.first().copied() else {
        return;
    };
    let to_machine = |p: Point| (p.x, sheet_height - p.y);
    let (start_x, start_y) = to_machine(first);

    gcode.push_str(&format!("; {}\n", name));
    gcode.push_str(&format!("G0 Z{:.3}\n", settings.safe_z));
    gcode.push_str(&format!(
        "G0 X{:.3} Y{:.3} ; Rapid to start\n",
        start_x, start_y
    ));

    for pass_num in 1..=settings.passes {
        let z_depth = 0.0 - (pass_num as f64 - 1.0) * settings.z_step_down;
        gcode.push_str(&format!(
            "; Pass {}/{} at Z{:.3}\n",
            pass_num, settings.passes, z_depth
        ));
        gcode.push_str(&format!("G0 Z{:.3}\n", z_depth));
        gcode.push_str(&format!("M3 S{}\n", settings.power));

        for (idx, point) in points.iter().skip(1).enumerate() {
            let (x, y) = to_machine(*point);
            if idx == 0 {
                gcode.push_str(&format!(
                    "G1 X{:.3} Y{:.3} F{:.0}\n",
                    x, y, settings.feed_rate
                ));
            } else {
                gcode.push_str(&format!("G1 X{:.3} Y{:.3}\n", x, y));
            }
        }

        gcode.push_str("M5\n");

        if pass_num < settings.passes {
            gcode.push_str(&format!(
                "G0 X{:.3} Y{:.3} ; Return to start\n",
                start_x, start_y
            ));
        }
    }
}

//! Writes a shelf plan to disk as SVG sheets, G-code programs and/or JSON.

use crate::error::CamToolResult;
use crate::gcode_export::{generate_sheet_gcode, CutProgramSettings};
use crate::planner::ShelfPlan;
use crate::svg_export::render_sheet_svg;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Svg,
    Gcode,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [Self::Svg, Self::Gcode, Self::Json];

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Gcode => "gcode",
            Self::Json => "json",
        }
    }
}

/// Write `plan` into `dir` in each of `formats`. SVG and G-code produce one
/// file per sheet (`sheet-N.svg`, `sheet-N.gcode`); JSON writes the whole
/// plan to `layout.json`. A plan without sheets produces no sheet files.
/// Returns the written paths in order.
pub fn write_plan(
    plan: &ShelfPlan,
    dir: &Path,
    formats: &[ExportFormat],
    program: &CutProgramSettings,
) -> CamToolResult<Vec<PathBuf>> {
    plan.parameters.validate()?;
    if plan.sheets.is_empty() {
        tracing::warn!("the plan has no parts; only the JSON layout is written");
    }

    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    for format in formats {
        match format {
            ExportFormat::Svg => {
                for sheet in &plan.sheets {
                    let path = dir.join(format!("{}.{}", sheet.id, format.extension()));
                    fs::write(&path, render_sheet_svg(sheet, plan.sheet.width, plan.sheet.height))?;
                    written.push(path);
                }
            }
            ExportFormat::Gcode => {
                for sheet in &plan.sheets {
                    let gcode =
                        generate_sheet_gcode(sheet, plan.sheet.width, plan.sheet.height, program)?;
                    let path = dir.join(format!("{}.{}", sheet.id, format.extension()));
                    fs::write(&path, gcode)?;
                    written.push(path);
                }
            }
            ExportFormat::Json => {
                let path = dir.join(format!("layout.{}", format.extension()));
                fs::write(&path, serde_json::to_string_pretty(plan)?)?;
                written.push(path);
            }
        }
    }

    tracing::info!(files = written.len(), dir = %dir.display(), "exported shelf plan");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!(ExportFormat::Gcode.extension(), "gcode");
        assert_eq!(
            serde_json::to_string(&ExportFormat::ALL).expect("serializable"),
            r#"["svg","gcode","json"]"#
        );
    }
}

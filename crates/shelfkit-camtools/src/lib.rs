//! # ShelfKit CAM Tools
//!
//! Geometry and cut-file generation for nested, box-jointed shelves.
//!
//! ## Pipeline
//!
//! - **Nested Shelf Maker**: derives the concentric outlines and the front,
//!   middle and back layers cut from them
//! - **Sheet Layout**: shelf-packs the layers onto stock sheets
//! - **Planner**: runs both end to end, with an optional memo cache
//!
//! ## Output
//!
//! - **Contours**: rounded frames and notch reliefs as path segments
//! - **SVG Export**: per-sheet preview drawings
//! - **G-Code Export**: per-sheet cut programs
//! - **Arc Expander**: corner arc flattening for G-code
//! - **Optimizer**: G-code minimization

pub mod arc_expander;
pub mod contour;
pub mod error;
pub mod export;
pub mod gcode_export;
pub mod nested_shelf;
pub mod optimizer;
pub mod planner;
pub mod sheet_layout;
pub mod svg_export;

// Re-export commonly used items
pub use arc_expander::{ArcExpander, ArcExpanderConfig};
pub use contour::{placement_cuts, Contour, OutlineCut, PathSegment};
pub use error::{CamToolError, CamToolResult};
pub use export::{write_plan, ExportFormat};
pub use gcode_export::{generate_sheet_gcode, CutProgramSettings};
pub use nested_shelf::{
    assemble_parts, build_shelf_parts, derive_outlines, stack_depth, Notch, NotchSide, Outline,
    OutlineSet, PartType, ShelfParameters, ShelfPart,
};
pub use optimizer::GCodeOptimizer;
pub use planner::{plan_shelves, ShelfPlan, ShelfPlanCache, SheetSpec};
pub use sheet_layout::{pack_sheets, PartPlacement, SheetLayout};
pub use svg_export::{render_sheet_svg, OUTLINE_PALETTE};

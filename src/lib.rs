//! # ShelfKit
//!
//! Planner for nested, box-jointed plywood shelves:
//! - Derives the concentric panel outlines and their notch reliefs
//! - Assembles front, middle and back layers
//! - Packs the layers onto stock sheets
//! - Exports SVG previews, G-code cut programs and a JSON layout
//!
//! ## Architecture
//!
//! ShelfKit is organized as a workspace with multiple crates:
//!
//! 1. **shelfkit-core** - Geometry primitives and parameter errors
//! 2. **shelfkit-camtools** - Outline derivation, sheet packing, cut-file export
//! 3. **shelfkit-settings** - Configuration files and defaults
//! 4. **shelfkit** - Command-line binary that integrates all crates

pub mod cli;

pub use shelfkit_core::{ParameterError, Point, Rect};

pub use shelfkit_camtools::{
    build_shelf_parts, derive_outlines, pack_sheets, plan_shelves, stack_depth, write_plan,
    CutProgramSettings, ExportFormat, Notch, NotchSide, Outline, OutlineSet, PartPlacement,
    PartType, ShelfParameters, ShelfPart, ShelfPlan, ShelfPlanCache, SheetLayout, SheetSpec,
};

pub use shelfkit_settings::{Config, ExportSettings, PlywoodSettings, ShelfSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

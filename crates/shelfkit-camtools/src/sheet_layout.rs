//! Sheet Layout
//!
//! Greedy row ("shelf") packing of rectangular parts onto stock sheets.
//!
//! Parts are sorted tallest first and laid left to right; a row wraps when
//! the next part would cross the sheet's right edge, and a new sheet starts
//! when the next row would cross the bottom edge. There is no rotation and
//! no backtracking, so the result is fully determined by the input order.

use crate::nested_shelf::ShelfPart;
use serde::{Deserialize, Serialize};
use shelfkit_core::Rect;
use std::cmp::Ordering;
use std::sync::Arc;

/// A part positioned on a sheet. `x`/`y` are the top-left corner of the
/// part's bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartPlacement {
    pub part: Arc<ShelfPart>,
    pub x: f64,
    pub y: f64,
}

impl PartPlacement {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.part.width, self.part.height)
    }
}

/// The placements that went onto one stock sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub id: String,
    pub placements: Vec<PartPlacement>,
}

impl SheetLayout {
    fn numbered(index: usize) -> Self {
        Self {
            id: format!("sheet-{}", index),
            placements: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }
}

/// Row cursor. Starts one gap in from the top-left corner.
#[derive(Clone, Copy, Debug)]
struct LayoutCursor {
    x: f64,
    y: f64,
    row_height: f64,
    gap: f64,
}

impl LayoutCursor {
    fn new(gap: f64) -> Self {
        Self {
            x: gap,
            y: gap,
            row_height: 0.0,
            gap,
        }
    }

    fn at_row_start(&self) -> bool {
        self.x <= self.gap
    }

    fn next_row(&mut self) {
        self.x = self.gap;
        self.y += self.row_height + self.gap;
        self.row_height = 0.0;
    }

    fn place(&mut self, width: f64, height: f64) -> (f64, f64) {
        let position = (self.x, self.y);
        self.x += width + self.gap;
        self.row_height = self.row_height.max(height);
        position
    }
}

/// Pack `parts` onto as many `sheet_width` × `sheet_height` sheets as needed.
///
/// A part larger than the sheet is still placed at the cursor; nothing is
/// rejected. Such placements are reported with a warning.
pub fn pack_sheets(
    parts: &[Arc<ShelfPart>],
    sheet_width: f64,
    sheet_height: f64,
    gap: f64,
) -> Vec<SheetLayout> {
    let mut sheets = Vec::new();
    let mut current = SheetLayout::numbered(1);
    let mut cursor = LayoutCursor::new(gap);
    let bounds = Rect::new(0.0, 0.0, sheet_width, sheet_height);

    // sort_by is stable, so equal heights keep their input order
    let mut sorted: Vec<&Arc<ShelfPart>> = parts.iter().collect();
    sorted.sort_by(|a, b| b.height.partial_cmp(&a.height).unwrap_or(Ordering::Equal));

    for part in sorted {
        if cursor.x + part.width + gap > sheet_width && !cursor.at_row_start() {
            cursor.next_row();
        }

        if cursor.y + part.height + gap > sheet_height && !current.is_empty() {
            let next = SheetLayout::numbered(sheets.len() + 2);
            sheets.push(std::mem::replace(&mut current, next));
            cursor = LayoutCursor::new(gap);
        }

        let (x, y) = cursor.place(part.width, part.height);
        let placement = PartPlacement {
            part: Arc::clone(part),
            x,
            y,
        };

        if !bounds.contains_rect(&placement.rect()) {
            tracing::warn!(
                part = %part.id,
                sheet = %current.id,
                width = part.width,
                height = part.height,
                sheet_width,
                sheet_height,
                "part does not fit on the sheet; placed out of bounds"
            );
        }

        current.placements.push(placement);
    }

    if !current.is_empty() {
        sheets.push(current);
    }

    tracing::debug!(
        parts = parts.len(),
        sheets = sheets.len(),
        "packed parts onto sheets"
    );

    sheets
}

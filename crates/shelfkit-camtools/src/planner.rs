//! Shelf planning pipeline
//!
//! `plan_shelves` runs derivation, assembly and packing end to end.
//! [`ShelfPlanCache`] is an explicit, caller-owned memo over it, keyed by the
//! complete input so a front-end can call it on every parameter change.

use crate::nested_shelf::{build_shelf_parts, ShelfParameters, ShelfPart};
use crate::sheet_layout::{pack_sheets, SheetLayout};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Stock sheet dimensions and the spacing kept between parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetSpec {
    pub width: f64,
    pub height: f64,
    pub gap: f64,
}

/// Everything produced for one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfPlan {
    pub parameters: ShelfParameters,
    pub sheet: SheetSpec,
    pub parts: Vec<Arc<ShelfPart>>,
    pub sheets: Vec<SheetLayout>,
}

/// Derive, assemble and pack.
pub fn plan_shelves(params: &ShelfParameters, sheet: SheetSpec) -> ShelfPlan {
    let parts = build_shelf_parts(params);
    let sheets = pack_sheets(&parts, sheet.width, sheet.height, sheet.gap);

    tracing::debug!(
        parts = parts.len(),
        sheets = sheets.len(),
        "planned shelf set"
    );

    ShelfPlan {
        parameters: *params,
        sheet,
        parts,
        sheets,
    }
}

/// Bit-exact key over every input of [`plan_shelves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PlanKey {
    shelf_count: i32,
    middle_count: i32,
    lengths: [u64; 11],
}

impl PlanKey {
    fn new(params: &ShelfParameters, sheet: &SheetSpec) -> Self {
        Self {
            shelf_count: params.shelf_count,
            middle_count: params.middle_count,
            lengths: [
                params.min_inner_width.to_bits(),
                params.min_inner_height.to_bits(),
                params.border_thickness.to_bits(),
                params.tool_gap.to_bits(),
                params.radius_percent.to_bits(),
                params.notch_size.to_bits(),
                params.notch_interval.to_bits(),
                params.notch_corner_radius.to_bits(),
                sheet.width.to_bits(),
                sheet.height.to_bits(),
                sheet.gap.to_bits(),
            ],
        }
    }
}

/// Memoizes [`plan_shelves`]. The engine is deterministic, so a hit returns
/// exactly what a fresh computation would.
#[derive(Debug, Default)]
pub struct ShelfPlanCache {
    entries: HashMap<PlanKey, Arc<ShelfPlan>>,
    capacity: Option<usize>,
    hits: u64,
    misses: u64,
}

impl ShelfPlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that forgets everything once it holds `capacity` plans.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity.max(1)),
            ..Self::default()
        }
    }

    pub fn plan(&mut self, params: &ShelfParameters, sheet: SheetSpec) -> Arc<ShelfPlan> {
        let key = PlanKey::new(params, &sheet);
        if let Some(plan) = self.entries.get(&key) {
            self.hits += 1;
            return Arc::clone(plan);
        }

        self.misses += 1;
        if let Some(capacity) = self.capacity {
            if self.entries.len() >= capacity {
                tracing::debug!(capacity, "plan cache full, clearing");
                self.entries.clear();
            }
        }

        let plan = Arc::new(plan_shelves(params, sheet));
        self.entries.insert(key, Arc::clone(&plan));
        plan
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

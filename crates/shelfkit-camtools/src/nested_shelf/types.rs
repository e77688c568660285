//! Type definitions for the nested shelf maker

use serde::{Deserialize, Serialize};
use shelfkit_core::{clamp, ParameterError, ParameterResult};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Every input the outline derivation needs. There are no hidden defaults:
/// callers fill in every field (the settings crate supplies stock values).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShelfParameters {
    /// Number of nested profiles. `<= 0` produces no outlines.
    pub shelf_count: i32,
    /// Extra layers stacked between front and back.
    pub middle_count: i32,
    /// Width of the innermost cavity (mm)
    pub min_inner_width: f64,
    /// Height of the innermost cavity (mm)
    pub min_inner_height: f64,
    /// Wall width of every profile (mm)
    pub border_thickness: f64,
    /// Cutting tool clearance (mm). Floors the corner radius, spaces the
    /// nested profiles and sizes notch reliefs.
    pub tool_gap: f64,
    /// Corner rounding as a percentage of the smaller inner side, 0..=50
    pub radius_percent: f64,
    /// Edge length of a notch relief (mm), never smaller than `tool_gap`
    pub notch_size: f64,
    /// Vertical pitch between notch rows (mm), at least 1
    pub notch_interval: f64,
    /// Rounding of the notch corners at the cavity entrance (mm)
    pub notch_corner_radius: f64,
}

impl ShelfParameters {
    /// Check the input before it reaches the engine. The engine itself
    /// clamps silently; this is for front-ends that want to report bad
    /// values instead.
    pub fn validate(&self) -> ParameterResult<()> {
        ParameterError::check_positive("min_inner_width", self.min_inner_width)?;
        ParameterError::check_positive("min_inner_height", self.min_inner_height)?;
        ParameterError::check_non_negative("border_thickness", self.border_thickness)?;
        ParameterError::check_non_negative("tool_gap", self.tool_gap)?;
        ParameterError::check_range("radius_percent", self.radius_percent, 0.0, 50.0)?;
        ParameterError::check_non_negative("notch_size", self.notch_size)?;
        ParameterError::check_non_negative("notch_interval", self.notch_interval)?;
        ParameterError::check_non_negative("notch_corner_radius", self.notch_corner_radius)?;

        if self.shelf_count < 0 {
            return Err(ParameterError::Negative {
                name: "shelf_count".to_string(),
                value: self.shelf_count as f64,
            });
        }
        if self.middle_count < 0 {
            return Err(ParameterError::Negative {
                name: "middle_count".to_string(),
                value: self.middle_count as f64,
            });
        }

        Ok(())
    }

    /// Number of physical layers in the stack: front, middles and back.
    pub fn layer_count(&self) -> usize {
        layer_count(self.middle_count)
    }

    /// Radius percentage as a fraction, clamped to 0..=0.5.
    pub(crate) fn radius_fraction(&self) -> f64 {
        clamp(self.radius_percent, 0.0, 50.0) / 100.0
    }
}

/// `max(2, 2 + middle_count)`
pub fn layer_count(middle_count: i32) -> usize {
    (2i64 + middle_count as i64).max(2) as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotchSide {
    Left,
    Right,
}

/// A square relief cut into a profile so a round tool can clear the square
/// corner where the next layer's finger seats.
///
/// `x`/`y` are relative to the outline's outer bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Notch {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Rounding of the corners facing the cavity, at most `size / 2`
    pub entrance_radius: f64,
    /// Rounding of the corners the tool cuts into, at most `tool_gap / 2`
    pub material_radius: f64,
    pub side: NotchSide,
}

/// One nested rectangular profile: a rounded frame with a rounded cavity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub outer_width: f64,
    pub outer_height: f64,
    pub outer_radius: f64,
    pub inner_width: f64,
    pub inner_height: f64,
    pub inner_radius: f64,
    pub notches: Vec<Notch>,
}

impl Outline {
    /// Outer corner radius limited to half the shorter outer side.
    pub fn clamped_outer_radius(&self) -> f64 {
        clamp_radius(self.outer_radius, self.outer_width, self.outer_height)
    }

    /// Inner corner radius limited to half the shorter inner side.
    pub fn clamped_inner_radius(&self) -> f64 {
        clamp_radius(self.inner_radius, self.inner_width, self.inner_height)
    }

    /// Offset of the cavity from the outer top-left corner.
    pub fn inner_offset(&self) -> (f64, f64) {
        (
            (self.outer_width - self.inner_width) / 2.0,
            (self.outer_height - self.inner_height) / 2.0,
        )
    }

    pub fn notches_on(&self, side: NotchSide) -> impl Iterator<Item = &Notch> {
        self.notches.iter().filter(move |n| n.side == side)
    }
}

/// `max(0, min(radius, width / 2, height / 2))`
pub fn clamp_radius(radius: f64, width: f64, height: f64) -> f64 {
    radius.min(width / 2.0).min(height / 2.0).max(0.0)
}

/// The chain of nested outlines, innermost first. Built once per derivation
/// and shared read-only by every part cut from it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutlineSet(Vec<Outline>);

impl OutlineSet {
    pub fn new(outlines: Vec<Outline>) -> Self {
        Self(outlines)
    }

    /// The largest profile, i.e. the footprint of the whole panel.
    pub fn outermost(&self) -> Option<&Outline> {
        self.0.last()
    }
}

impl Deref for OutlineSet {
    type Target = [Outline];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Outline>> for OutlineSet {
    fn from(outlines: Vec<Outline>) -> Self {
        Self(outlines)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartType {
    Front,
    Middle,
    Back,
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => write!(f, "front"),
            Self::Middle => write!(f, "middle"),
            Self::Back => write!(f, "back"),
        }
    }
}

/// One physical panel. All parts of a stack are cut with the same stencil
/// and only differ in role and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfPart {
    pub id: String,
    pub part_type: PartType,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub label: String,
    pub outlines: Arc<OutlineSet>,
}

impl ShelfPart {
    /// Build a part sized to the outermost outline. Returns `None` when the
    /// set is empty.
    pub fn new(
        part_type: PartType,
        label: impl Into<String>,
        outlines: Arc<OutlineSet>,
    ) -> Option<Self> {
        let label = label.into();
        let largest = outlines.outermost()?;
        Some(Self {
            id: format!("{}-{}", part_type, label),
            part_type,
            width: largest.outer_width,
            height: largest.outer_height,
            radius: largest.outer_radius,
            label,
            outlines,
        })
    }

    /// Notch reliefs are only cut through the middle layers; front and back
    /// keep a closed face.
    pub fn has_notch_reliefs(&self) -> bool {
        self.part_type == PartType::Middle
    }
}

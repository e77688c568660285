//! Cut contours
//!
//! Converts placed parts into closed cut paths: the rounded outer frame and
//! rounded cavity of every nested outline, plus the notch reliefs on middle
//! layers. Contours are in sheet coordinates (mm, Y down).

use crate::arc_expander::ArcExpander;
use crate::nested_shelf::{Notch, NotchSide, Outline};
use crate::sheet_layout::PartPlacement;
use shelfkit_core::geometry::EPSILON;
use shelfkit_core::Point;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc from the current point. `positive_sweep` is the SVG
    /// sweep flag (angle increasing, which is clockwise on screen).
    ArcTo {
        end: Point,
        center: Point,
        radius: f64,
        positive_sweep: bool,
    },
    Close,
}

/// One closed cut path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour {
    pub segments: Vec<PathSegment>,
}

impl Contour {
    /// Rectangle with all four corners rounded by `radius`, which is clamped
    /// to half the shorter side. Traced clockwise on screen from the end of
    /// the top-left corner arc.
    pub fn rounded_rect(x: f64, y: f64, width: f64, height: f64, radius: f64) -> Self {
        let r = radius.min(width / 2.0).min(height / 2.0).max(0.0);
        let mut c = ContourBuilder::new(Point::new(x + r, y));

        c.line_to(Point::new(x + width - r, y));
        c.arc_to(Point::new(x + width, y + r), Point::new(x + width - r, y + r), r);
        c.line_to(Point::new(x + width, y + height - r));
        c.arc_to(
            Point::new(x + width - r, y + height),
            Point::new(x + width - r, y + height - r),
            r,
        );
        c.line_to(Point::new(x + r, y + height));
        c.arc_to(Point::new(x, y + height - r), Point::new(x + r, y + height - r), r);
        c.line_to(Point::new(x, y + r));
        c.arc_to(Point::new(x + r, y), Point::new(x + r, y + r), r);

        c.close()
    }

    /// Relief cut for a notch whose outline's outer corner sits at `origin`.
    ///
    /// The two corners away from the cavity (left side of a left notch,
    /// right side of a right notch) are rounded by the material radius; the
    /// cavity side stays square where it opens into the frame.
    pub fn notch_relief(notch: &Notch, origin: Point) -> Self {
        let x = origin.x + notch.x;
        let y = origin.y + notch.y;
        let size = notch.size;
        let r = notch.material_radius.min(size / 2.0).max(0.0);

        match notch.side {
            NotchSide::Left => {
                let mut c = ContourBuilder::new(Point::new(x + r, y));
                c.line_to(Point::new(x + size, y));
                c.line_to(Point::new(x + size, y + size));
                c.line_to(Point::new(x + r, y + size));
                c.arc_to(Point::new(x, y + size - r), Point::new(x + r, y + size - r), r);
                c.line_to(Point::new(x, y + r));
                c.arc_to(Point::new(x + r, y), Point::new(x + r, y + r), r);
                c.close()
            }
            NotchSide::Right => {
                let mut c = ContourBuilder::new(Point::new(x, y));
                c.line_to(Point::new(x + size - r, y));
                c.arc_to(Point::new(x + size, y + r), Point::new(x + size - r, y + r), r);
                c.line_to(Point::new(x + size, y + size - r));
                c.arc_to(
                    Point::new(x + size - r, y + size),
                    Point::new(x + size - r, y + size - r),
                    r,
                );
                c.line_to(Point::new(x, y + size));
                c.close()
            }
        }
    }

    pub fn start(&self) -> Option<Point> {
        match self.segments.first() {
            Some(PathSegment::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// SVG path data (`M`, `L`, `A`, `Z`).
    pub fn to_svg_path(&self) -> String {
        let mut d = String::new();
        for segment in &self.segments {
            if !d.is_empty() {
                d.push(' ');
            }
            let _ = match segment {
                PathSegment::MoveTo(p) => write!(d, "M {} {}", fmt_mm(p.x), fmt_mm(p.y)),
                PathSegment::LineTo(p) => write!(d, "L {} {}", fmt_mm(p.x), fmt_mm(p.y)),
                PathSegment::ArcTo {
                    end,
                    radius,
                    positive_sweep,
                    ..
                } => write!(
                    d,
                    "A {r} {r} 0 0 {} {} {}",
                    u8::from(*positive_sweep),
                    fmt_mm(end.x),
                    fmt_mm(end.y),
                    r = fmt_mm(*radius)
                ),
                PathSegment::Close => write!(d, "Z"),
            };
        }
        d
    }

    /// Polyline through the contour with arcs flattened. The first point is
    /// repeated at the end when the contour is closed.
    pub fn flatten(&self, expander: &ArcExpander) -> Vec<Point> {
        let mut points: Vec<Point> = Vec::new();
        let mut start: Option<Point> = None;

        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => {
                    start = Some(p);
                    points.push(p);
                }
                PathSegment::LineTo(p) => push_unique_point(&mut points, p),
                PathSegment::ArcTo {
                    end,
                    center,
                    positive_sweep,
                    ..
                } => {
                    let from = points.last().copied().unwrap_or(end);
                    for p in expander.expand_arc(from, end, center, positive_sweep) {
                        push_unique_point(&mut points, p);
                    }
                }
                PathSegment::Close => {
                    if let Some(first) = start {
                        push_unique_point(&mut points, first);
                    }
                }
            }
        }

        points
    }
}

fn push_unique_point(path: &mut Vec<Point>, point: Point) {
    if let Some(last) = path.last() {
        if last.approx_eq(point) {
            return;
        }
    }
    path.push(point);
}

/// Accumulates segments, dropping zero-radius arcs as plain corners and
/// zero-length lines.
struct ContourBuilder {
    segments: Vec<PathSegment>,
    current: Point,
}

impl ContourBuilder {
    fn new(start: Point) -> Self {
        Self {
            segments: vec![PathSegment::MoveTo(start)],
            current: start,
        }
    }

    fn line_to(&mut self, p: Point) {
        if !self.current.approx_eq(p) {
            self.segments.push(PathSegment::LineTo(p));
            self.current = p;
        }
    }

    fn arc_to(&mut self, end: Point, center: Point, radius: f64) {
        if radius > EPSILON {
            self.segments.push(PathSegment::ArcTo {
                end,
                center,
                radius,
                positive_sweep: true,
            });
            self.current = end;
        } else {
            self.line_to(end);
        }
    }

    fn close(mut self) -> Contour {
        self.segments.push(PathSegment::Close);
        Contour {
            segments: self.segments,
        }
    }
}

/// The cuts belonging to one outline of a placed part.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineCut {
    /// Position in the outline set, innermost first
    pub outline_index: usize,
    pub outer: Contour,
    pub inner: Contour,
    pub reliefs: Vec<Contour>,
}

/// Top-left corner of `outline` when centred in the placement's footprint.
pub fn outline_origin(placement: &PartPlacement, outline: &Outline) -> Point {
    Point::new(
        placement.x + (placement.part.width - outline.outer_width) / 2.0,
        placement.y + (placement.part.height - outline.outer_height) / 2.0,
    )
}

/// Every cut for a placed part, innermost outline first.
pub fn placement_cuts(placement: &PartPlacement) -> Vec<OutlineCut> {
    let with_reliefs = placement.part.has_notch_reliefs();

    placement
        .part
        .outlines
        .iter()
        .enumerate()
        .map(|(outline_index, outline)| {
            let origin = outline_origin(placement, outline);
            let (inner_dx, inner_dy) = outline.inner_offset();

            let outer = Contour::rounded_rect(
                origin.x,
                origin.y,
                outline.outer_width,
                outline.outer_height,
                outline.clamped_outer_radius(),
            );
            let inner = Contour::rounded_rect(
                origin.x + inner_dx,
                origin.y + inner_dy,
                outline.inner_width,
                outline.inner_height,
                outline.clamped_inner_radius(),
            );
            let reliefs = if with_reliefs {
                outline
                    .notches
                    .iter()
                    .map(|notch| Contour::notch_relief(notch, origin))
                    .collect()
            } else {
                Vec::new()
            };

            OutlineCut {
                outline_index,
                outer,
                inner,
                reliefs,
            }
        })
        .collect()
}

/// Format a length with at most three decimals and no trailing zeros.
pub fn fmt_mm(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

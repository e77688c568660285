//! Arc Expander
//!
//! Flattens the corner arcs of cut contours into line segments for
//! controllers and file formats without arc support.

use shelfkit_core::Point;
use std::f64::consts::PI;

/// Arc expansion configuration
#[derive(Debug, Clone)]
pub struct ArcExpanderConfig {
    /// Maximum chord length (mm)
    pub segment_length: f64,
    /// Minimum number of segments per arc
    pub min_segments: usize,
}

impl Default for ArcExpanderConfig {
    fn default() -> Self {
        Self {
            segment_length: 0.5,
            min_segments: 4,
        }
    }
}

/// Converts arcs to line segments
#[derive(Debug)]
pub struct ArcExpander {
    config: ArcExpanderConfig,
}

impl ArcExpander {
    /// Create a new arc expander
    pub fn new(config: ArcExpanderConfig) -> Self {
        Self { config }
    }

    /// Expand an arc into points, excluding `start` and ending exactly on
    /// `end`.
    ///
    /// `positive_sweep` follows the SVG sweep flag: the angle measured from
    /// `center` increases from start to end.
    pub fn expand_arc(
        &self,
        start: Point,
        end: Point,
        center: Point,
        positive_sweep: bool,
    ) -> Vec<Point> {
        let radius = start.distance_to(center);

        let start_angle = (start.y - center.y).atan2(start.x - center.x);
        let end_angle = (end.y - center.y).atan2(end.x - center.x);

        let mut angle_delta = end_angle - start_angle;
        if !positive_sweep && angle_delta > 0.0 {
            angle_delta -= 2.0 * PI;
        } else if positive_sweep && angle_delta < 0.0 {
            angle_delta += 2.0 * PI;
        }

        let arc_length = radius * angle_delta.abs();
        let by_length = if self.config.segment_length > 0.0 {
            (arc_length / self.config.segment_length).ceil() as usize
        } else {
            0
        };
        let num_segments = by_length.max(self.config.min_segments).max(1);

        let mut points = Vec::with_capacity(num_segments);
        for i in 1..num_segments {
            let fraction = i as f64 / num_segments as f64;
            let angle = start_angle + angle_delta * fraction;
            points.push(Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }
        points.push(end);

        points
    }
}

impl Default for ArcExpander {
    fn default() -> Self {
        Self::new(ArcExpanderConfig::default())
    }
}

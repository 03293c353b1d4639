//! Draw commands for arc rendering.
//!
//! Everything a round progress indicator paints reduces to these primitives.

use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    /// Flat cap at endpoint
    #[default]
    Butt,
    /// Rounded cap
    Round,
}

/// How the stroke is laid along its path.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum StrokePattern {
    /// Continuous stroke
    #[default]
    Solid,
    /// Repeating filled circles stamped along the path, rotated to follow
    /// the path tangent.
    Dotted {
        /// Diameter of each dot
        diameter: f32,
        /// Path length between consecutive dot centers
        spacing: f32,
    },
}

/// Stroke style for arc rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
    /// Stroke pattern
    pub pattern: StrokePattern,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            cap: LineCap::Butt,
            pattern: StrokePattern::Solid,
        }
    }
}

impl StrokeStyle {
    /// Solid stroke with the given color and width.
    #[must_use]
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    /// Set the line cap.
    #[must_use]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set the stroke pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: StrokePattern) -> Self {
        self.pattern = pattern;
        self
    }
}

/// 2D transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f]
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Identity transformation.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }
}

/// Drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Stroke an arc of the ellipse inscribed in `oval`
    Arc {
        /// Bounding rectangle of the arc's ellipse
        oval: Rect,
        /// Start angle in degrees, clockwise from 3 o'clock
        start_angle: f32,
        /// Sweep in degrees, clockwise
        sweep_angle: f32,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Fill a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill color
        color: Color,
    },

    /// Group of commands with transform
    Group {
        /// Child commands
        children: Vec<DrawCommand>,
        /// Transform to apply
        transform: Transform2D,
    },
}

impl DrawCommand {
    /// Create a stroked arc.
    #[must_use]
    pub fn stroked_arc(oval: Rect, start_angle: f32, sweep_angle: f32, style: StrokeStyle) -> Self {
        Self::Arc {
            oval,
            start_angle,
            sweep_angle,
            style,
        }
    }

    /// Create a filled circle.
    #[must_use]
    pub fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // StrokeStyle Tests
    // =========================================================================

    #[test]
    fn test_stroke_style_default() {
        let style = StrokeStyle::default();
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.width, 1.0);
        assert_eq!(style.cap, LineCap::Butt);
        assert_eq!(style.pattern, StrokePattern::Solid);
    }

    #[test]
    fn test_stroke_style_builder() {
        let style = StrokeStyle::solid(Color::WHITE, 8.0)
            .with_cap(LineCap::Round)
            .with_pattern(StrokePattern::Dotted {
                diameter: 2.0,
                spacing: 50.0,
            });
        assert_eq!(style.width, 8.0);
        assert_eq!(style.cap, LineCap::Round);
        assert!(matches!(style.pattern, StrokePattern::Dotted { .. }));
    }

    // =========================================================================
    // Transform2D Tests
    // =========================================================================

    #[test]
    fn test_transform_identity() {
        let t = Transform2D::identity();
        assert_eq!(t.matrix, [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(Transform2D::default(), t);
    }

    #[test]
    fn test_transform_translate() {
        let t = Transform2D::translate(10.0, -5.0);
        assert_eq!(t.matrix, [1.0, 0.0, 0.0, 1.0, 10.0, -5.0]);
    }

    // =========================================================================
    // DrawCommand Tests
    // =========================================================================

    #[test]
    fn test_stroked_arc() {
        let oval = Rect::new(0.0, 0.0, 100.0, 100.0);
        let cmd = DrawCommand::stroked_arc(oval, 270.0, 90.0, StrokeStyle::default());
        match cmd {
            DrawCommand::Arc {
                oval: o,
                start_angle,
                sweep_angle,
                ..
            } => {
                assert_eq!(o, oval);
                assert_eq!(start_angle, 270.0);
                assert_eq!(sweep_angle, 90.0);
            }
            _ => panic!("Expected Arc command"),
        }
    }

    #[test]
    fn test_draw_command_serializes() {
        let cmd = DrawCommand::filled_circle(Point::new(1.0, 2.0), 3.0, Color::BLACK);
        let json = serde_json::to_string(&cmd).unwrap();
        let back: DrawCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}

//! Widget and canvas traits.
//!
//! Widgets follow a layout-paint cycle:
//!
//! 1. **Layout**: Receive the bounds allocated by the host
//! 2. **Paint**: Record draw operations onto a [`Canvas`]
//!
//! # Examples
//!
//! ```
//! use roundprogress_core::{Canvas, Color, Point, RecordingCanvas};
//!
//! let mut canvas = RecordingCanvas::new();
//! canvas.fill_circle(Point::new(10.0, 10.0), 4.0, Color::WHITE);
//! assert_eq!(canvas.command_count(), 1);
//! ```

use crate::draw::{StrokeStyle, Transform2D};
use crate::geometry::{Rect, Size};
use crate::{Color, Point};

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait.
pub trait Widget: Send + Sync {
    /// Position the widget within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Record draw operations for the widget's current state.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Stroke an arc of the ellipse inscribed in `oval`.
    ///
    /// Angles are in degrees, clockwise from the 3 o'clock position.
    fn stroke_arc(&mut self, oval: Rect, start_angle: f32, sweep_angle: f32, style: &StrokeStyle);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Push a transform.
    fn push_transform(&mut self, transform: Transform2D);

    /// Pop the transform.
    fn pop_transform(&mut self);
}

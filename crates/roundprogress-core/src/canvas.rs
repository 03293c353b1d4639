//! Canvas implementations for rendering.

use crate::draw::{DrawCommand, StrokeStyle, Transform2D};
use crate::widget::Canvas;
use crate::{Color, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to a GPU or WASM backend)
/// - Diffing (compare render outputs)
///
/// Commands recorded between `push_transform` and `pop_transform` are
/// collected into a single [`DrawCommand::Group`].
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    open_groups: Vec<(Transform2D, Vec<DrawCommand>)>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded top-level draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Get the number of recorded top-level commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.open_groups.clear();
    }

    /// Add a raw draw command.
    pub fn add_command(&mut self, command: DrawCommand) {
        match self.open_groups.last_mut() {
            Some((_, children)) => children.push(command),
            None => self.commands.push(command),
        }
    }
}

impl Canvas for RecordingCanvas {
    fn stroke_arc(&mut self, oval: Rect, start_angle: f32, sweep_angle: f32, style: &StrokeStyle) {
        self.add_command(DrawCommand::stroked_arc(
            oval,
            start_angle,
            sweep_angle,
            *style,
        ));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.add_command(DrawCommand::filled_circle(center, radius, color));
    }

    fn push_transform(&mut self, transform: Transform2D) {
        self.open_groups.push((transform, Vec::new()));
    }

    fn pop_transform(&mut self) {
        if let Some((transform, children)) = self.open_groups.pop() {
            self.add_command(DrawCommand::Group {
                children,
                transform,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // RecordingCanvas Creation Tests
    // =========================================================================

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    // =========================================================================
    // Drawing Tests
    // =========================================================================

    #[test]
    fn test_stroke_arc() {
        let mut canvas = RecordingCanvas::new();
        let style = StrokeStyle::solid(Color::WHITE, 4.0);
        canvas.stroke_arc(Rect::new(0.0, 0.0, 50.0, 50.0), 180.0, 360.0, &style);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Arc {
                start_angle,
                sweep_angle,
                style: s,
                ..
            } => {
                assert_eq!(*start_angle, 180.0);
                assert_eq!(*sweep_angle, 360.0);
                assert_eq!(*s, style);
            }
            _ => panic!("Expected Arc command"),
        }
    }

    #[test]
    fn test_fill_circle() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::new(50.0, 50.0), 25.0, Color::BLACK);

        assert_eq!(
            canvas.commands(),
            &[DrawCommand::filled_circle(
                Point::new(50.0, 50.0),
                25.0,
                Color::BLACK
            )]
        );
    }

    // =========================================================================
    // Transform Tests
    // =========================================================================

    #[test]
    fn test_transform_groups_children() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_transform(Transform2D::translate(10.0, 20.0));
        canvas.fill_circle(Point::ORIGIN, 1.0, Color::WHITE);
        canvas.fill_circle(Point::ORIGIN, 2.0, Color::WHITE);
        assert!(canvas.is_empty());
        canvas.pop_transform();

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Group {
                children,
                transform,
            } => {
                assert_eq!(children.len(), 2);
                assert_eq!(*transform, Transform2D::translate(10.0, 20.0));
            }
            _ => panic!("Expected Group command"),
        }
    }

    #[test]
    fn test_pop_without_push_is_noop() {
        let mut canvas = RecordingCanvas::new();
        canvas.pop_transform();
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_transform(Transform2D::identity());
        canvas.fill_circle(Point::ORIGIN, 1.0, Color::WHITE);
        canvas.clear();
        assert!(canvas.is_empty());
        canvas.pop_transform();
        assert!(canvas.is_empty());
    }
}

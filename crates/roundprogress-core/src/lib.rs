//! Core types and traits for round progress indicators.
//!
//! This crate provides the foundational types the widgets build on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Padding`]
//! - Color representation: [`Color`]
//! - Draw commands and the [`Canvas`] they are recorded onto
//! - The frame-driven [`ProgressAnimator`]

pub mod animation;
mod canvas;
mod color;
pub mod draw;
mod geometry;
pub mod widget;

pub use animation::{interpolate, AnimationId, ProgressAnimation, ProgressAnimator, StepOutcome};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use draw::{DrawCommand, LineCap, StrokePattern, StrokeStyle, Transform2D};
pub use geometry::{Padding, Point, Rect, Size};
pub use widget::{Canvas, LayoutResult, Widget};

//! Arc geometry for round progress indicators.
//!
//! [`compute_geometry`] is a pure function: it turns the widget's render
//! state and bounds into a [`RenderDescription`] (background arc, progress
//! arc, end caps) which a [`Canvas`] then draws.

use crate::error::StyleParseError;
use roundprogress_core::{
    Canvas, Color, LineCap, Padding, Point, Rect, Size, StrokePattern, StrokeStyle,
};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Start angle of the background arc, in degrees, for every style.
pub const BACKGROUND_START_ANGLE: f32 = 180.0;

/// Arc length between the dots of a dotted background.
pub const DOT_SPACING: f32 = 50.0;

/// Angular step used when walking an arc to place dot stamps.
const STAMP_WALK_STEP_DEGREES: f32 = 0.25;

// =============================================================================
// Styles
// =============================================================================

/// Style as written in configuration: a name or an integer attribute code.
#[derive(Deserialize)]
#[serde(untagged)]
enum StyleRepr {
    Code(i64),
    Name(String),
}

impl StyleRepr {
    fn resolve<T>(
        self,
        kind: &'static str,
        from_code: fn(i64) -> Option<T>,
        from_name: fn(&str) -> Option<T>,
    ) -> Result<T, StyleParseError> {
        let (parsed, value) = match self {
            Self::Code(code) => (from_code(code), code.to_string()),
            Self::Name(name) => (from_name(&name), name),
        };
        parsed.ok_or(StyleParseError { kind, value })
    }
}

/// Shape of the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStyle {
    /// Full circle, progress starting at 12 o'clock
    #[default]
    Full,
    /// Upper semicircle, progress starting at 9 o'clock
    Half,
}

impl ProgressStyle {
    /// Map an integer attribute code (`0` full, `1` half).
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Full),
            1 => Some(Self::Half),
            _ => None,
        }
    }

    /// Map a style name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "full" => Some(Self::Full),
            "half" => Some(Self::Half),
            _ => None,
        }
    }

    /// Angle at which the progress arc begins, in degrees.
    #[must_use]
    pub const fn start_angle(self) -> f32 {
        match self {
            Self::Full => 270.0,
            Self::Half => 180.0,
        }
    }

    /// Total sweep available to progress, in degrees.
    #[must_use]
    pub const fn sweep_angle(self) -> f32 {
        match self {
            Self::Full => 360.0,
            Self::Half => 180.0,
        }
    }
}

impl<'de> Deserialize<'de> for ProgressStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        StyleRepr::deserialize(deserializer)?
            .resolve("progress style", Self::from_code, Self::from_name)
            .map_err(de::Error::custom)
    }
}

/// How the background arc is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    /// Continuous stroke
    #[default]
    Solid,
    /// Row of dots following the arc
    Dotted,
}

impl BackgroundStyle {
    /// Map an integer attribute code (`0` solid, `1` dotted).
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Solid),
            1 => Some(Self::Dotted),
            _ => None,
        }
    }

    /// Map a style name, ignoring case. `full` is accepted for `solid`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "solid" | "full" => Some(Self::Solid),
            "dotted" => Some(Self::Dotted),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for BackgroundStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        StyleRepr::deserialize(deserializer)?
            .resolve("background style", Self::from_code, Self::from_name)
            .map_err(de::Error::custom)
    }
}

// =============================================================================
// Inputs
// =============================================================================

/// Everything about the widget that affects how it looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcRenderState {
    /// Value being displayed (may lag the committed progress)
    pub animated_progress: f32,
    /// Upper bound of the progress range
    pub max: i32,
    /// Full circle or semicircle
    pub style: ProgressStyle,
    /// Solid or dotted background
    pub background_style: BackgroundStyle,
    /// Stroke width of the progress arc
    pub stroke_width: f32,
    /// Stroke width of the background arc
    pub background_stroke_width: f32,
    /// Progress arc and cap color
    pub primary_color: Color,
    /// Background arc color
    pub background_color: Color,
    /// Whether caps are drawn at all
    pub end_cap_visible: bool,
    /// Cap radius
    pub end_cap_size: f32,
    /// Draw caps even when nothing has progressed
    pub zero_progress_cap_enabled: bool,
}

/// Widget size and padding, as last reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WidgetBounds {
    /// Widget size
    pub size: Size,
    /// Padding inside the widget
    pub padding: Padding,
}

impl WidgetBounds {
    /// Create bounds from a size and padding.
    #[must_use]
    pub const fn new(size: Size, padding: Padding) -> Self {
        Self { size, padding }
    }
}

// =============================================================================
// Output
// =============================================================================

/// One stroked arc of the description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSpec {
    /// Bounding rectangle of the arc's ellipse
    pub oval: Rect,
    /// Start angle in degrees, clockwise from 3 o'clock
    pub start_angle: f32,
    /// Sweep in degrees
    pub sweep_angle: f32,
    /// Stroke to draw it with
    pub stroke: StrokeStyle,
}

/// Position and orientation of one dot on a dotted arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotStamp {
    /// Dot center
    pub center: Point,
    /// Tangent direction at the center, in degrees
    pub rotation: f32,
}

impl ArcSpec {
    /// Angle at which the arc ends.
    #[must_use]
    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle
    }

    /// Point on the arc `sweep` degrees past its start.
    #[must_use]
    pub fn point_at_sweep(&self, sweep: f32) -> Point {
        self.oval.point_at_angle(self.start_angle + sweep)
    }

    /// Where a dotted stroke stamps its dots.
    ///
    /// The first dot sits on the arc start; each following one is
    /// `spacing` further along the arc. Solid strokes have no stamps.
    #[must_use]
    pub fn dot_stamps(&self) -> Vec<DotStamp> {
        let StrokePattern::Dotted { spacing, .. } = self.stroke.pattern else {
            return Vec::new();
        };
        if spacing <= 0.0 || self.sweep_angle <= 0.0 || self.oval.is_empty() {
            return Vec::new();
        }

        let steps = (self.sweep_angle / STAMP_WALK_STEP_DEGREES).ceil() as usize;
        let step = self.sweep_angle / steps as f32;

        let mut stamps = vec![self.stamp_at(0.0)];
        let mut walked = 0.0;
        let mut next = spacing;
        let mut previous = self.point_at_sweep(0.0);
        for i in 1..=steps {
            let sweep = step * i as f32;
            let point = self.point_at_sweep(sweep);
            walked += previous.distance(&point);
            previous = point;
            if walked >= next {
                stamps.push(self.stamp_at(sweep));
                next += spacing;
            }
        }
        stamps
    }

    fn stamp_at(&self, sweep: f32) -> DotStamp {
        let radians = (self.start_angle + sweep).to_radians();
        let dx = -(self.oval.width / 2.0) * radians.sin();
        let dy = (self.oval.height / 2.0) * radians.cos();
        DotStamp {
            center: self.point_at_sweep(sweep),
            rotation: dy.atan2(dx).to_degrees(),
        }
    }

    /// Stroke this arc onto a canvas.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.stroke_arc(self.oval, self.start_angle, self.sweep_angle, &self.stroke);
    }
}

/// Which end of the progress arc a cap marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapKind {
    /// Static cap at the arc start
    Fixed,
    /// Cap following the end of the progress arc
    Moving,
}

/// A filled end-cap circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapSpec {
    /// Which end this cap marks
    pub kind: CapKind,
    /// Circle center
    pub center: Point,
    /// Circle radius
    pub radius: f32,
    /// Fill color
    pub color: Color,
}

/// Everything needed to paint the widget once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderDescription {
    /// Background (capacity) arc
    pub background: Option<ArcSpec>,
    /// Progress arc
    pub progress: Option<ArcSpec>,
    /// Zero, one or two caps; fixed cap first
    pub caps: Vec<CapSpec>,
}

impl RenderDescription {
    /// Description that draws nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether nothing would be drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.progress.is_none() && self.caps.is_empty()
    }

    /// Draw background, progress and caps, in that order.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for arc in self.background.iter().chain(self.progress.iter()) {
            arc.draw(canvas);
        }
        for cap in &self.caps {
            canvas.fill_circle(cap.center, cap.radius, cap.color);
        }
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Degrees of arc covered by `animated_progress` out of `max`.
///
/// A non-positive `max` yields zero sweep. The progress value is clamped
/// into `[0, max]` first.
#[must_use]
pub fn progress_sweep(animated_progress: f32, max: i32, sweep_angle: f32) -> f32 {
    if max <= 0 {
        return 0.0;
    }
    let max = max as f32;
    animated_progress.clamp(0.0, max) * sweep_angle / max
}

/// Rectangle the arcs are inscribed in, inset by padding and stroke width.
#[must_use]
pub fn arc_rect(bounds: &WidgetBounds, stroke_width: f32) -> Rect {
    let WidgetBounds { size, padding } = bounds;
    Rect::from_ltrb(
        padding.left + stroke_width,
        padding.top + stroke_width,
        size.width - padding.right - stroke_width,
        size.height - padding.bottom - stroke_width,
    )
}

/// Compute what to draw for `state` inside `bounds`.
///
/// Unlaid-out bounds, or bounds too small to hold the arc after padding and
/// stroke inset, give an empty description.
#[must_use]
pub fn compute_geometry(state: &ArcRenderState, bounds: &WidgetBounds) -> RenderDescription {
    if bounds.size.is_empty() {
        return RenderDescription::empty();
    }
    let oval = arc_rect(bounds, state.stroke_width);
    if oval.is_empty() {
        return RenderDescription::empty();
    }

    let sweep_angle = state.style.sweep_angle();
    let start_angle = state.style.start_angle();

    let background_pattern = match state.background_style {
        BackgroundStyle::Solid => StrokePattern::Solid,
        BackgroundStyle::Dotted => StrokePattern::Dotted {
            diameter: state.background_stroke_width / 2.0,
            spacing: DOT_SPACING,
        },
    };
    let background = ArcSpec {
        oval,
        start_angle: BACKGROUND_START_ANGLE,
        sweep_angle,
        stroke: StrokeStyle::solid(state.background_color, state.background_stroke_width)
            .with_pattern(background_pattern),
    };

    let progress = ArcSpec {
        oval,
        start_angle,
        sweep_angle: progress_sweep(state.animated_progress, state.max, sweep_angle),
        stroke: StrokeStyle::solid(state.primary_color, state.stroke_width)
            .with_cap(LineCap::Round),
    };

    let show_caps = state.end_cap_visible
        && (state.zero_progress_cap_enabled || state.animated_progress > 0.0);
    let caps = if show_caps {
        [
            (CapKind::Fixed, progress.point_at_sweep(0.0)),
            (CapKind::Moving, progress.point_at_sweep(progress.sweep_angle)),
        ]
        .into_iter()
        .map(|(kind, center)| CapSpec {
            kind,
            center,
            radius: state.end_cap_size,
            color: state.primary_color,
        })
        .collect()
    } else {
        Vec::new()
    };

    RenderDescription {
        background: Some(background),
        progress: Some(progress),
        caps,
    }
}

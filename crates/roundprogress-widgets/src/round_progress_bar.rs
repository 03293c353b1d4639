//! Round progress bar widget.

use crate::arc_geometry::{
    compute_geometry, ArcRenderState, BackgroundStyle, ProgressStyle, RenderDescription,
    WidgetBounds,
};
use crate::config::RoundProgressConfig;
use crate::error::ConfigError;
use roundprogress_core::{
    widget::LayoutResult, AnimationId, Canvas, Color, Padding, Point, ProgressAnimator, Rect, Size,
    StepOutcome, Transform2D, Widget,
};
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Circular or semicircular progress indicator.
///
/// Progress changes animate over the configured duration while the widget
/// is visible. The host drives frames through [`advance`](Self::advance) or
/// [`on_frame`](Self::on_frame) and repaints when
/// [`take_repaint_request`](Self::take_repaint_request) says so.
#[derive(Debug)]
pub struct RoundProgressBar {
    /// Committed progress, always in `[0, max]`
    progress: i32,
    /// Value currently rendered
    animated_progress: f32,
    /// Upper bound of the progress range
    max: i32,
    style: ProgressStyle,
    background_style: BackgroundStyle,
    stroke_width: f32,
    background_stroke_width: f32,
    primary_color: Color,
    background_color: Color,
    end_cap_visible: bool,
    end_cap_size: f32,
    zero_progress_cap_enabled: bool,
    animation_duration: Duration,
    /// Size and padding, relative to `origin`
    bounds: WidgetBounds,
    /// Position assigned by layout
    origin: Point,
    visible: bool,
    attached: bool,
    repaint_requested: bool,
    animator: ProgressAnimator,
}

impl RoundProgressBar {
    /// Create a widget from configuration.
    pub fn new(config: RoundProgressConfig) -> Self {
        if config.max <= 0 {
            warn!(max = config.max, "round progress max is not positive");
        }
        let progress = clamp_progress(config.progress, config.max);
        Self {
            progress,
            animated_progress: progress as f32,
            max: config.max,
            style: config.style,
            background_style: config.background_style,
            stroke_width: config.stroke_width,
            background_stroke_width: config.background_stroke_width,
            primary_color: config.progress_color,
            background_color: config.background_color,
            end_cap_visible: config.end_cap_visible,
            end_cap_size: config.end_cap_size,
            zero_progress_cap_enabled: config.zero_progress_enabled,
            animation_duration: Duration::from_millis(u64::from(config.animation_duration)),
            bounds: WidgetBounds::default(),
            origin: Point::ORIGIN,
            visible: true,
            attached: true,
            repaint_requested: true,
            animator: ProgressAnimator::new(),
        }
    }

    /// Create a widget from optional configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingConfiguration`] when `config` is `None`.
    pub fn from_config(config: Option<RoundProgressConfig>) -> Result<Self, ConfigError> {
        config.map(Self::new).ok_or(ConfigError::MissingConfiguration)
    }

    /// Create a widget from a YAML document.
    ///
    /// # Errors
    ///
    /// See [`RoundProgressConfig::from_yaml`].
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        RoundProgressConfig::from_yaml(yaml).map(Self::new)
    }

    // =========================================================================
    // Progress
    // =========================================================================

    /// Set the progress, clamped to `[0, max]`.
    ///
    /// While visible and attached the rendered value animates from where it
    /// currently is and the new animation's id is returned. Otherwise the
    /// change applies immediately. Either way a repaint is requested.
    /// Setting the committed value again does nothing.
    pub fn set_progress(&mut self, progress: i32) -> Option<AnimationId> {
        let target = clamp_progress(progress, self.max);
        if target == self.progress {
            return None;
        }
        self.progress = target;

        if self.visible && self.attached {
            let from = self.animated_progress;
            let id = self
                .animator
                .animate_to(from, target as f32, self.animation_duration);
            self.repaint_requested = true;
            debug!(
                from,
                to = target,
                duration_ms = self.animation_duration.as_millis() as u64,
                generation = id.generation(),
                "progress animation started"
            );
            Some(id)
        } else {
            self.animator.cancel();
            self.animated_progress = target as f32;
            self.repaint_requested = true;
            debug!(progress = target, "progress applied immediately");
            None
        }
    }

    /// Committed progress.
    #[must_use]
    pub fn progress(&self) -> i32 {
        self.progress
    }

    /// Value currently rendered.
    #[must_use]
    pub fn animated_progress(&self) -> f32 {
        self.animated_progress
    }

    /// Set the rendered value directly, clamped to `[0, max]`.
    pub fn set_animated_progress(&mut self, value: f32) {
        self.animated_progress = value.clamp(0.0, self.max.max(0) as f32);
        self.repaint_requested = true;
    }

    /// Drive the running animation by `dt`.
    pub fn advance(&mut self, dt: Duration) -> StepOutcome {
        let animated = &mut self.animated_progress;
        let repaint = &mut self.repaint_requested;
        let outcome = self.animator.advance(dt, |value| {
            *animated = value;
            *repaint = true;
        });
        trace!(?outcome, value = self.animated_progress, "animation frame");
        outcome
    }

    /// Drive animation `id` by `dt`. Frames for superseded animations are
    /// ignored.
    pub fn on_frame(&mut self, id: AnimationId, dt: Duration) -> StepOutcome {
        let animated = &mut self.animated_progress;
        let repaint = &mut self.repaint_requested;
        let outcome = self.animator.step(id, dt, |value| {
            *animated = value;
            *repaint = true;
        });
        if outcome == StepOutcome::Stale {
            trace!(generation = id.generation(), "stale animation frame dropped");
        } else {
            trace!(?outcome, value = self.animated_progress, "animation frame");
        }
        outcome
    }

    /// Whether a progress animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Set the maximum. Progress is re-clamped immediately.
    pub fn set_max(&mut self, max: i32) {
        if max <= 0 {
            warn!(max, "round progress max is not positive");
        }
        self.max = max;

        let clamped = clamp_progress(self.progress, max);
        let upper = max.max(0) as f32;
        if clamped != self.progress || !(0.0..=upper).contains(&self.animated_progress) {
            self.progress = clamped;
            self.animator.cancel();
            self.animated_progress = clamped as f32;
        }
        self.repaint_requested = true;
    }

    /// Upper bound of the progress range.
    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Set the progress arc and cap color.
    pub fn set_primary_color(&mut self, color: Color) {
        self.primary_color = color;
        self.repaint_requested = true;
    }

    /// Progress arc and cap color.
    #[must_use]
    pub fn primary_color(&self) -> Color {
        self.primary_color
    }

    /// Set the background arc color.
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
        self.repaint_requested = true;
    }

    /// Background arc color.
    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Switch between full circle and semicircle.
    pub fn set_style(&mut self, style: ProgressStyle) {
        self.style = style;
        self.repaint_requested = true;
    }

    /// Progress style.
    #[must_use]
    pub fn style(&self) -> ProgressStyle {
        self.style
    }

    /// Switch between solid and dotted background.
    pub fn set_background_style(&mut self, style: BackgroundStyle) {
        self.background_style = style;
        self.repaint_requested = true;
    }

    /// Background style.
    #[must_use]
    pub fn background_style(&self) -> BackgroundStyle {
        self.background_style
    }

    /// Set the progress arc stroke width.
    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
        self.repaint_requested = true;
    }

    /// Progress arc stroke width.
    #[must_use]
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Set the background arc stroke width.
    pub fn set_background_stroke_width(&mut self, width: f32) {
        self.background_stroke_width = width;
        self.repaint_requested = true;
    }

    /// Background arc stroke width.
    #[must_use]
    pub fn background_stroke_width(&self) -> f32 {
        self.background_stroke_width
    }

    /// Show or hide the end caps.
    pub fn set_end_cap_visible(&mut self, visible: bool) {
        self.end_cap_visible = visible;
        self.repaint_requested = true;
    }

    /// Whether end caps are drawn.
    #[must_use]
    pub fn is_end_cap_visible(&self) -> bool {
        self.end_cap_visible
    }

    /// Set the end cap radius.
    pub fn set_end_cap_size(&mut self, size: f32) {
        self.end_cap_size = size;
        self.repaint_requested = true;
    }

    /// End cap radius.
    #[must_use]
    pub fn end_cap_size(&self) -> f32 {
        self.end_cap_size
    }

    /// Draw caps even when progress is zero.
    pub fn set_zero_progress_cap_enabled(&mut self, enabled: bool) {
        self.zero_progress_cap_enabled = enabled;
        self.repaint_requested = true;
    }

    /// Whether caps are drawn at zero progress.
    #[must_use]
    pub fn is_zero_progress_cap_enabled(&self) -> bool {
        self.zero_progress_cap_enabled
    }

    /// Set the duration used by subsequent progress animations.
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.animation_duration = duration;
        self.repaint_requested = true;
    }

    /// Progress animation duration.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Show or hide the widget. Hiding finishes any animation at once.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        if !visible {
            self.animator.cancel();
            self.animated_progress = self.progress as f32;
        }
        self.repaint_requested = true;
    }

    /// Whether the widget is visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Detach from the host. The running animation is cancelled and later
    /// progress changes apply without animating.
    pub fn detach(&mut self) {
        let cancelled = self.animator.cancel();
        self.attached = false;
        debug!(
            cancelled = cancelled.map(AnimationId::generation),
            "round progress bar detached"
        );
    }

    /// Whether the widget is attached to a host.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Record new size and padding.
    pub fn on_size_changed(&mut self, size: Size, padding: Padding) {
        self.bounds = WidgetBounds::new(size, padding);
        self.repaint_requested = true;
    }

    /// Current padding.
    #[must_use]
    pub fn padding(&self) -> Padding {
        self.bounds.padding
    }

    /// Whether something changed since the last repaint request was taken.
    #[must_use]
    pub fn needs_repaint(&self) -> bool {
        self.repaint_requested
    }

    /// Consume the repaint request.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Snapshot of everything geometry depends on.
    #[must_use]
    pub fn render_state(&self) -> ArcRenderState {
        ArcRenderState {
            animated_progress: self.animated_progress,
            max: self.max,
            style: self.style,
            background_style: self.background_style,
            stroke_width: self.stroke_width,
            background_stroke_width: self.background_stroke_width,
            primary_color: self.primary_color,
            background_color: self.background_color,
            end_cap_visible: self.end_cap_visible,
            end_cap_size: self.end_cap_size,
            zero_progress_cap_enabled: self.zero_progress_cap_enabled,
        }
    }

    /// What the widget draws right now, in local coordinates.
    #[must_use]
    pub fn geometry(&self) -> RenderDescription {
        compute_geometry(&self.render_state(), &self.bounds)
    }
}

impl Widget for RoundProgressBar {
    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.origin = bounds.origin();
        self.bounds.size = bounds.size();
        self.repaint_requested = true;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if !self.visible {
            return;
        }
        let description = self.geometry();
        if description.is_empty() {
            return;
        }

        if self.origin == Point::ORIGIN {
            description.draw(canvas);
        } else {
            canvas.push_transform(Transform2D::translate(self.origin.x, self.origin.y));
            description.draw(canvas);
            canvas.pop_transform();
        }
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.bounds.size.width,
            self.bounds.size.height,
        )
    }
}

fn clamp_progress(progress: i32, max: i32) -> i32 {
    progress.clamp(0, max.max(0))
}

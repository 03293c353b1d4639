//! Progress animation driven by the host's frame clock.
//!
//! The animator never sleeps or spawns work. The host calls
//! [`ProgressAnimator::step`] once per frame with the elapsed time and the
//! animator reports the interpolated value through a callback. Each call to
//! [`ProgressAnimator::animate_to`] bumps a generation counter, so frames
//! scheduled for a superseded animation are recognised and dropped.

use std::time::Duration;

// =============================================================================
// Interpolation
// =============================================================================

/// Linear interpolation between `from` and `to` at fraction `t`.
///
/// `t` is clamped to `[0, 1]`. The same formula serves increasing and
/// decreasing transitions.
#[must_use]
pub fn interpolate(from: f32, to: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    (to - from).mul_add(t, from)
}

// =============================================================================
// AnimationId / StepOutcome
// =============================================================================

/// Generation tag identifying one animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

impl AnimationId {
    /// Raw generation number.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Result of delivering one frame to the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// An intermediate value was emitted; more frames are needed.
    Running,
    /// The final target value was emitted; the animation is gone.
    Finished,
    /// The frame belonged to a superseded or cancelled animation. Nothing
    /// was emitted.
    Stale,
    /// No animation is running.
    Idle,
}

// =============================================================================
// ProgressAnimation
// =============================================================================

/// A single linear transition between two progress values.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressAnimation {
    id: AnimationId,
    /// Value at animation start
    pub from: f32,
    /// Target value
    pub to: f32,
    /// Total duration
    pub duration: Duration,
    /// Elapsed time, never beyond `duration`
    pub elapsed: Duration,
}

impl ProgressAnimation {
    /// Identifier of this run.
    #[must_use]
    pub fn id(&self) -> AnimationId {
        self.id
    }

    /// Fraction of the duration elapsed, from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
        }
    }

    /// Current interpolated value. Exactly `to` once complete.
    #[must_use]
    pub fn value(&self) -> f32 {
        if self.is_complete() {
            self.to
        } else {
            interpolate(self.from, self.to, self.progress())
        }
    }

    /// Whether the full duration has elapsed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }
}

// =============================================================================
// ProgressAnimator
// =============================================================================

/// Runs at most one [`ProgressAnimation`] at a time.
#[derive(Debug, Default)]
pub struct ProgressAnimator {
    generation: u64,
    current: Option<ProgressAnimation>,
}

impl ProgressAnimator {
    /// Create an idle animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating from `from` to `to`, superseding any running
    /// animation.
    pub fn animate_to(&mut self, from: f32, to: f32, duration: Duration) -> AnimationId {
        self.generation += 1;
        let id = AnimationId(self.generation);
        self.current = Some(ProgressAnimation {
            id,
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        });
        id
    }

    /// Deliver a frame to animation `id`.
    ///
    /// Emits one value through `on_update` unless the id is stale. The last
    /// emitted value of a run is exactly its target.
    pub fn step(
        &mut self,
        id: AnimationId,
        dt: Duration,
        on_update: impl FnOnce(f32),
    ) -> StepOutcome {
        if self.current.as_ref().map(ProgressAnimation::id) != Some(id) {
            return StepOutcome::Stale;
        }
        self.advance(dt, on_update)
    }

    /// Deliver a frame to whichever animation is running.
    pub fn advance(&mut self, dt: Duration, on_update: impl FnOnce(f32)) -> StepOutcome {
        let Some(animation) = self.current.as_mut() else {
            return StepOutcome::Idle;
        };

        animation.advance(dt);
        if animation.is_complete() {
            let target = animation.to;
            self.current = None;
            on_update(target);
            StepOutcome::Finished
        } else {
            on_update(animation.value());
            StepOutcome::Running
        }
    }

    /// Drop the running animation, if any. Its id becomes stale.
    pub fn cancel(&mut self) -> Option<AnimationId> {
        self.current.take().map(|animation| animation.id)
    }

    /// The running animation.
    #[must_use]
    pub fn current(&self) -> Option<&ProgressAnimation> {
        self.current.as_ref()
    }

    /// Whether an animation is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }
}

// =============================================================================
// Tests - TDD Style
// =============================================================================

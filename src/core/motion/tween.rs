//! Time-based interpolation with overwrite semantics
//!
//! A [`Tween`] moves a value from a start to a target over a fixed duration.
//! [`Animated`] owns the current value of one property and at most one tween;
//! retargeting starts a new tween from wherever the value is *now*, replacing
//! the previous one, so rapid input never queues stale targets.

use super::easing::Timing;
use super::transform::Lerp;

/// One transition between two values
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    timing: Timing,
    elapsed: f64,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, timing: Timing) -> Self {
        Self {
            from,
            to,
            timing,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the new value
    pub fn advance(&mut self, dt: f64) -> T {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.value()
    }

    /// Current interpolated value. Exactly `to` once finished.
    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.to;
        }
        let progress = self.elapsed / self.timing.duration;
        self.from.lerp(&self.to, self.timing.ease.apply(progress))
    }

    pub fn is_finished(&self) -> bool {
        self.timing.duration <= 0.0 || self.elapsed >= self.timing.duration
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }
}

/// A single animated property
#[derive(Clone, Debug, PartialEq)]
pub struct Animated<T> {
    current: T,
    tween: Option<Tween<T>>,
}

impl<T: Lerp + PartialEq> Animated<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            tween: None,
        }
    }

    pub fn value(&self) -> T {
        self.current
    }

    /// Where the value is heading (or already is, when idle)
    pub fn target(&self) -> T {
        self.tween.map(|t| t.target()).unwrap_or(self.current)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Start animating toward `to`, replacing any in-flight tween.
    ///
    /// Retargeting to the value the property is already heading to (or resting
    /// at) keeps the current motion.
    pub fn animate_to(&mut self, to: T, timing: Timing) {
        if self.target() == to {
            return;
        }
        self.tween = Some(Tween::new(self.current, to, timing));
    }

    /// Jump to `value` and drop any in-flight tween
    pub fn set(&mut self, value: T) {
        self.current = value;
        self.tween = None;
    }

    /// Advance the active tween. Returns `true` while still animating.
    pub fn tick(&mut self, dt: f64) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        self.current = tween.advance(dt);
        if tween.is_finished() {
            self.tween = None;
            return false;
        }
        true
    }
}

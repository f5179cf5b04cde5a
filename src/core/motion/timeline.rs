//! Sequenced and decorative motion
//!
//! - [`IntroTimeline`]: the hero entrance, a handful of from-to steps whose
//!   start times come from overlap positions (`"-=0.7"`) like an authoring
//!   timeline.
//! - Deterministic per-index randomness for decorations that are rendered on
//!   the server and must match on the client.

use super::easing::{Ease, Timing};
use super::scheduler::Animate;
use super::transform::{Lerp, Transform};

/// Where a step starts relative to the steps before it
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// At the current end of the timeline
    After,
    /// `seconds` before the current end (`"-=seconds"`)
    Overlap(f64),
    /// At an absolute time
    At(f64),
}

/// One element's entrance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroStep {
    /// DOM id of the element
    pub target: &'static str,
    /// Starting pose; the element animates from here to the identity pose
    pub from: Transform,
    pub timing: Timing,
    pub delay: f64,
    pub position: Position,
}

impl IntroStep {
    const fn new(target: &'static str, from: Transform, duration: f64, position: Position) -> Self {
        Self {
            target,
            from,
            timing: Timing::new(duration, Ease::Power3Out),
            delay: 0.0,
            position,
        }
    }

    const fn delayed(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }
}

const fn hidden(translate_x: f64, translate_y: f64, scale: f64) -> Transform {
    Transform {
        rotate_x: 0.0,
        rotate_y: 0.0,
        translate_x,
        translate_y,
        scale,
        opacity: 0.0,
    }
}

pub const HERO_TITLE: &str = "hero-title";
pub const HERO_SUBTITLE: &str = "hero-subtitle";
pub const HERO_CTA: &str = "hero-cta";
pub const HERO_VISUAL: &str = "hero-visual";

/// Hero entrance: title, subtitle, buttons, then the dashboard visual
pub const HERO_INTRO: [IntroStep; 4] = [
    IntroStep::new(HERO_TITLE, hidden(0.0, 100.0, 1.0), 1.0, Position::After).delayed(0.2),
    IntroStep::new(HERO_SUBTITLE, hidden(0.0, 50.0, 1.0), 1.0, Position::Overlap(0.7)),
    IntroStep::new(HERO_CTA, hidden(0.0, 0.0, 0.9), 0.8, Position::Overlap(0.6)),
    IntroStep::new(HERO_VISUAL, hidden(100.0, 0.0, 1.0), 1.2, Position::Overlap(1.0)),
];

/// Start time of each step, in seconds from the beginning of the timeline.
///
/// The timeline's end is the latest end of any step placed so far; overlaps
/// never start a step before zero.
pub fn timeline_offsets(steps: &[IntroStep]) -> Vec<f64> {
    let mut end: f64 = 0.0;
    steps
        .iter()
        .map(|step| {
            let anchor = match step.position {
                Position::After => end,
                Position::Overlap(seconds) => (end - seconds).max(0.0),
                Position::At(at) => at.max(0.0),
            };
            let start = anchor + step.delay.max(0.0);
            end = end.max(start + step.timing.duration.max(0.0));
            start
        })
        .collect()
}

/// Plays a list of intro steps once
#[derive(Clone, Debug)]
pub struct IntroTimeline {
    steps: Vec<IntroStep>,
    starts: Vec<f64>,
    elapsed: f64,
}

impl IntroTimeline {
    pub fn new(steps: &[IntroStep]) -> Self {
        Self {
            starts: timeline_offsets(steps),
            steps: steps.to_vec(),
            elapsed: 0.0,
        }
    }

    pub fn hero() -> Self {
        Self::new(&HERO_INTRO)
    }

    pub fn steps(&self) -> &[IntroStep] {
        &self.steps
    }

    /// Time at which the last step settles
    pub fn duration(&self) -> f64 {
        self.steps
            .iter()
            .zip(&self.starts)
            .map(|(step, start)| start + step.timing.duration)
            .fold(0.0, f64::max)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration()
    }

    /// Pose of step `index` at the current time
    pub fn pose(&self, index: usize) -> Option<Transform> {
        let step = self.steps.get(index)?;
        let start = self.starts[index];
        let local = self.elapsed - start;
        if local <= 0.0 {
            return Some(step.from);
        }
        if step.timing.duration <= 0.0 || local >= step.timing.duration {
            return Some(Transform::IDENTITY);
        }
        let progress = step.timing.ease.apply(local / step.timing.duration);
        Some(step.from.lerp(&Transform::IDENTITY, progress))
    }
}

impl Animate for IntroTimeline {
    fn tick(&mut self, dt: f64) -> bool {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        !self.is_finished()
    }
}

/// Stable pseudo-random number in `[0, 1)` for `seed`
pub fn pseudo_random(seed: u32) -> f64 {
    let mut x = seed.wrapping_mul(0x9E37_79B9).wrapping_add(0x7F4A_7C15);
    x ^= x >> 16;
    x = x.wrapping_mul(0x85EB_CA6B);
    x ^= x >> 13;
    x = x.wrapping_mul(0xC2B2_AE35);
    x ^= x >> 16;
    f64::from(x) / (f64::from(u32::MAX) + 1.0)
}

/// Scale for a load bar given a random draw: `[0.4, 1.0]`
pub fn jitter_scale(r: f64) -> f64 {
    0.4 + 0.6 * r.clamp(0.0, 1.0)
}

/// Number of circuit paths behind the page
pub const CIRCUIT_PATHS: usize = 6;
/// Number of data packets travelling along them
pub const DATA_PACKETS: usize = 15;

/// Draw-in of one circuit path
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineTiming {
    /// Seconds, `[2, 4)`
    pub draw: f64,
    /// Final stroke opacity, `[0.4, 0.7)`
    pub opacity: f64,
}

pub fn line_timing(index: usize) -> LineTiming {
    let seed = index as u32 * 2;
    LineTiming {
        draw: 2.0 + 2.0 * pseudo_random(seed),
        opacity: 0.4 + 0.3 * pseudo_random(seed + 1),
    }
}

/// Motion of one data packet
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PacketTiming {
    /// Index of the circuit path it follows
    pub path: usize,
    /// Seconds per traversal, `[3, 7)`
    pub duration: f64,
    /// Seconds before the first traversal, `[0, 5)`
    pub delay: f64,
}

pub fn packet_timing(index: usize) -> PacketTiming {
    let seed = 1000 + index as u32 * 2;
    PacketTiming {
        path: index % CIRCUIT_PATHS,
        duration: 3.0 + 4.0 * pseudo_random(seed),
        delay: 5.0 * pseudo_random(seed + 1),
    }
}

/// Jitter loop of one hero load bar
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarTiming {
    pub low: f64,
    pub high: f64,
    /// Stagger from the previous bar
    pub delay: f64,
    pub period: f64,
}

pub fn bar_timing(index: usize) -> BarTiming {
    let seed = 2000 + index as u32 * 2;
    let a = jitter_scale(pseudo_random(seed));
    let b = jitter_scale(pseudo_random(seed + 1));
    BarTiming {
        low: a.min(b),
        high: a.max(b),
        delay: 0.1 * index as f64,
        period: 0.6,
    }
}

/// Seconds per horizontal loop of the back, middle and front chart layers
pub const CHART_LAYER_LOOPS: [f64; 3] = [25.0, 18.0, 12.0];
/// Horizontal distance each chart layer travels per loop, px
pub const CHART_LOOP_WIDTH: f64 = 450.0;

/// Scroll reveal: starting offset (px), duration (s) and observer margin that
/// fires once an element's top crosses 85% of the viewport height
pub const REVEAL_OFFSET: f64 = 50.0;
pub const REVEAL_DURATION: f64 = 1.0;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -15% 0px";

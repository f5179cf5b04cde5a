//! Custom cursor: a fast dot and a slow ring chasing the pointer

use super::easing::{Ease, Timing};
use super::transform::Point;
use super::tween::Animated;

/// Class every registered tilt surface carries
pub const INTERACTIVE_CLASS: &str = "interactive-card";

/// Elements that make the ring grow when hovered
pub const INTERACTIVE_SELECTOR: &str = "button, a, .interactive-card";

const DOT_FOLLOW: Timing = Timing::new(0.1, Ease::Power3Out);
const RING_FOLLOW: Timing = Timing::new(0.4, Ease::Power3Out);
const HOVER: Timing = Timing::new(0.3, Ease::Power1Out);
const PRESS: Timing = Timing::new(0.2, Ease::Power1Out);

const DOT_HOVER_SCALE: f64 = 1.5;
const RING_HOVER_SCALE: f64 = 2.5;
const PRESS_FACTOR: f64 = 0.8;

/// One follower element (position in viewport px and its scale)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowerPose {
    pub position: Point,
    pub scale: f64,
}

impl FollowerPose {
    /// CSS transform centering the element on `position`
    pub fn to_css(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%) scale({:.3})",
            self.position.x, self.position.y, self.scale
        )
    }
}

#[derive(Clone, Debug)]
struct Follower {
    position: Animated<Point>,
    scale: Animated<f64>,
    follow: Timing,
}

impl Follower {
    fn new(follow: Timing) -> Self {
        Self {
            position: Animated::new(Point::default()),
            scale: Animated::new(1.0),
            follow,
        }
    }

    fn tick(&mut self, dt: f64) -> bool {
        let moving = self.position.tick(dt);
        let scaling = self.scale.tick(dt);
        moving || scaling
    }

    fn pose(&self) -> FollowerPose {
        FollowerPose {
            position: self.position.value(),
            scale: self.scale.value(),
        }
    }
}

/// Viewport-global cursor follower pair
#[derive(Clone, Debug)]
pub struct CursorState {
    dot: Follower,
    ring: Follower,
    /// 0 = idle ring, 1 = highlighted ring
    highlight: Animated<f64>,
    hovering: bool,
    pressed: bool,
    seen_pointer: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            dot: Follower::new(DOT_FOLLOW),
            ring: Follower::new(RING_FOLLOW),
            highlight: Animated::new(0.0),
            hovering: false,
            pressed: false,
            seen_pointer: false,
        }
    }

    /// Chase the pointer. The very first sample places both followers directly.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let to = Point::new(x, y);
        if !self.seen_pointer {
            self.seen_pointer = true;
            self.dot.position.set(to);
            self.ring.position.set(to);
            return;
        }
        for f in [&mut self.dot, &mut self.ring] {
            let timing = f.follow;
            f.position.animate_to(to, timing);
        }
    }

    /// Update the hover flag. Returns `true` if it changed.
    pub fn set_hovering(&mut self, hovering: bool) -> bool {
        if self.hovering == hovering {
            return false;
        }
        self.hovering = hovering;
        let level = if hovering { 1.0 } else { 0.0 };
        self.highlight.animate_to(level, HOVER);
        self.retarget_scale(HOVER);
        true
    }

    pub fn on_pointer_down(&mut self) {
        if !self.pressed {
            self.pressed = true;
            self.retarget_scale(PRESS);
        }
    }

    pub fn on_pointer_up(&mut self) {
        if self.pressed {
            self.pressed = false;
            self.retarget_scale(PRESS);
        }
    }

    fn retarget_scale(&mut self, timing: Timing) {
        let press = if self.pressed { PRESS_FACTOR } else { 1.0 };
        let (dot, ring) = if self.hovering {
            (DOT_HOVER_SCALE, RING_HOVER_SCALE)
        } else {
            (1.0, 1.0)
        };
        self.dot.scale.animate_to(dot * press, timing);
        self.ring.scale.animate_to(ring * press, timing);
    }

    pub fn tick(&mut self, dt: f64) -> bool {
        let dot = self.dot.tick(dt);
        let ring = self.ring.tick(dt);
        let highlight = self.highlight.tick(dt);
        dot || ring || highlight
    }

    pub fn is_animating(&self) -> bool {
        self.dot.position.is_animating()
            || self.dot.scale.is_animating()
            || self.ring.position.is_animating()
            || self.ring.scale.is_animating()
            || self.highlight.is_animating()
    }

    pub fn dot(&self) -> FollowerPose {
        self.dot.pose()
    }

    pub fn ring(&self) -> FollowerPose {
        self.ring.pose()
    }

    /// Hidden until the first pointer sample arrives
    pub fn is_visible(&self) -> bool {
        self.seen_pointer
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Ring background for the current highlight level
    pub fn ring_fill(&self) -> String {
        format!("rgba(234, 75, 113, {:.3})", 0.15 * self.highlight.value())
    }

    /// Ring border color for the current highlight level
    pub fn ring_border(&self) -> String {
        format!("rgba(234, 75, 113, {:.3})", 0.4 + 0.2 * self.highlight.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(c: &mut CursorState) {
        let mut frames = 0;
        while c.tick(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 1000);
        }
    }

    #[test]
    fn test_first_sample_snaps() {
        let mut c = CursorState::new();
        assert!(!c.is_visible());
        c.on_pointer_move(300.0, 120.0);
        assert!(c.is_visible());
        assert_eq!(c.dot().position, Point::new(300.0, 120.0));
        assert_eq!(c.ring().position, Point::new(300.0, 120.0));
        assert!(!c.is_animating());
    }

    #[test]
    fn test_dot_leads_ring() {
        let mut c = CursorState::new();
        c.on_pointer_move(0.0, 0.0);
        c.on_pointer_move(100.0, 0.0);
        c.tick(0.05);
        assert!(c.dot().position.x > c.ring().position.x);

        c.tick(0.05);
        assert_eq!(c.dot().position.x, 100.0);
        assert!(c.ring().position.x < 100.0);

        settle(&mut c);
        assert_eq!(c.ring().position.x, 100.0);
    }

    #[test]
    fn test_hover_scales_and_highlights() {
        let mut c = CursorState::new();
        assert!(c.set_hovering(true));
        assert!(!c.set_hovering(true));
        settle(&mut c);
        assert_eq!(c.ring().scale, 2.5);
        assert_eq!(c.dot().scale, 1.5);
        assert_eq!(c.ring_fill(), "rgba(234, 75, 113, 0.150)");
        assert_eq!(c.ring_border(), "rgba(234, 75, 113, 0.600)");

        c.set_hovering(false);
        settle(&mut c);
        assert_eq!(c.ring().scale, 1.0);
        assert_eq!(c.dot().scale, 1.0);
        assert_eq!(c.ring_border(), "rgba(234, 75, 113, 0.400)");
    }

    #[test]
    fn test_press_composes_with_hover() {
        let mut c = CursorState::new();
        c.on_pointer_down();
        settle(&mut c);
        assert_eq!(c.ring().scale, 0.8);
        assert_eq!(c.dot().scale, 0.8);

        c.set_hovering(true);
        settle(&mut c);
        assert_eq!(c.ring().scale, 2.5 * 0.8);

        c.on_pointer_up();
        settle(&mut c);
        assert_eq!(c.ring().scale, 2.5);
        assert!(!c.is_pressed());
    }

    #[test]
    fn test_non_finite_samples_are_ignored() {
        let mut c = CursorState::new();
        c.on_pointer_move(f64::NAN, 4.0);
        assert!(!c.is_visible());
    }

    #[test]
    fn test_css() {
        let pose = FollowerPose {
            position: Point::new(10.0, 20.5),
            scale: 1.5,
        };
        assert_eq!(
            pose.to_css(),
            "translate3d(10.00px, 20.50px, 0) translate(-50%, -50%) scale(1.500)"
        );
    }
}

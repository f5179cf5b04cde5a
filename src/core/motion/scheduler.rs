//! Frame scheduler
//!
//! Owns every registered animation and advances them once per rendering frame.
//! The scheduler never requests frames itself; the browser driver asks it
//! whether another frame is needed:
//!
//! - after any input retargets an animation, call [`Scheduler::wake`] and
//!   request a frame if it returns `true`
//! - inside the frame callback, call [`Scheduler::frame`] and request the next
//!   frame only if it returns `true`
//!
//! When nothing moves the loop stops and costs nothing until the next wake.

use std::cell::RefCell;
use std::rc::Rc;

use super::cursor::CursorState;
use super::surface::Surface;

/// Anything that advances with time
pub trait Animate {
    /// Advance by `dt` seconds. Returns `true` while more frames are needed.
    fn tick(&mut self, dt: f64) -> bool;
}

impl Animate for Surface {
    fn tick(&mut self, dt: f64) -> bool {
        Surface::tick(self, dt)
    }
}

impl Animate for CursorState {
    fn tick(&mut self, dt: f64) -> bool {
        CursorState::tick(self, dt)
    }
}

impl<T: Animate + ?Sized> Animate for Box<T> {
    fn tick(&mut self, dt: f64) -> bool {
        (**self).tick(dt)
    }
}

impl<T: Animate + ?Sized> Animate for Rc<RefCell<T>> {
    fn tick(&mut self, dt: f64) -> bool {
        match self.try_borrow_mut() {
            Ok(mut inner) => inner.tick(dt),
            // Busy in an event handler; try again next frame
            Err(_) => true,
        }
    }
}

/// Converts `requestAnimationFrame` timestamps into frame deltas
#[derive(Clone, Debug)]
pub struct FrameClock {
    last_ms: Option<f64>,
    lag_threshold_ms: f64,
    adjusted_lag_ms: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            last_ms: None,
            lag_threshold_ms: 500.0,
            adjusted_lag_ms: 33.0,
        }
    }
}

impl FrameClock {
    /// Seconds since the previous frame. The first frame after a reset is 0,
    /// and a gap above the lag threshold counts as one adjusted step.
    pub fn delta(&mut self, now_ms: f64) -> f64 {
        let Some(last) = self.last_ms.replace(now_ms) else {
            return 0.0;
        };
        let elapsed = now_ms - last;
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return 0.0;
        }
        if elapsed > self.lag_threshold_ms {
            return self.adjusted_lag_ms / 1000.0;
        }
        elapsed / 1000.0
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Handle for one registered animation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotId(u64);

/// Registry of animations plus the running/idle flag of the frame loop
pub struct Scheduler<A> {
    entries: Vec<(SlotId, A)>,
    next_id: u64,
    clock: FrameClock,
    running: bool,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            clock: FrameClock::default(),
            running: false,
        }
    }
}

impl<A: Animate> Scheduler<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, animation: A) -> SlotId {
        let id = SlotId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, animation));
        id
    }

    /// Remove an animation. Unknown ids are ignored.
    pub fn unregister(&mut self, id: SlotId) -> Option<A> {
        let index = self.entries.iter().position(|(slot, _)| *slot == id)?;
        let (_, animation) = self.entries.remove(index);
        if self.entries.is_empty() {
            self.running = false;
            self.clock.reset();
        }
        Some(animation)
    }

    /// Mark the loop as running. Returns `true` when the caller has to request
    /// a frame (the loop was idle).
    pub fn wake(&mut self) -> bool {
        if self.running || self.entries.is_empty() {
            return false;
        }
        self.running = true;
        self.clock.reset();
        true
    }

    /// Advance every animation for the frame at `now_ms`. Returns `true` while
    /// another frame is needed.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if !self.running {
            return false;
        }
        let dt = self.clock.delta(now_ms);
        let mut active = false;
        for (_, animation) in self.entries.iter_mut() {
            // Every entry ticks, even after one reports activity
            active |= animation.tick(dt);
        }
        if !active {
            self.running = false;
            self.clock.reset();
        }
        active
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motion::profile::SurfaceClass;
    use crate::core::motion::tilt::{PointerSample, Rect};
    use crate::core::motion::transform::Transform;

    /// Counts down a fixed number of ticks and records the deltas it saw
    #[derive(Default)]
    struct Countdown {
        remaining: u32,
        deltas: Vec<f64>,
    }

    impl Animate for Countdown {
        fn tick(&mut self, dt: f64) -> bool {
            self.deltas.push(dt);
            self.remaining = self.remaining.saturating_sub(1);
            self.remaining > 0
        }
    }

    #[test]
    fn test_clock_first_frame_and_lag_smoothing() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.delta(1000.0), 0.0);
        assert_eq!(clock.delta(1016.0), 0.016);
        assert_eq!(clock.delta(5000.0), 0.033);
        assert_eq!(clock.delta(4000.0), 0.0);
        clock.reset();
        assert_eq!(clock.delta(9000.0), 0.0);
    }

    #[test]
    fn test_wake_only_requests_when_idle() {
        let mut scheduler = Scheduler::new();
        assert!(!scheduler.wake(), "nothing registered");

        scheduler.register(Countdown {
            remaining: 2,
            ..Default::default()
        });
        assert!(scheduler.wake());
        assert!(!scheduler.wake(), "already running");
        assert!(scheduler.is_running());
    }

    #[test]
    fn test_loop_goes_idle() {
        let mut scheduler = Scheduler::new();
        scheduler.register(Countdown {
            remaining: 3,
            ..Default::default()
        });
        scheduler.wake();
        assert!(scheduler.frame(0.0));
        assert!(scheduler.frame(16.0));
        assert!(!scheduler.frame(32.0));
        assert!(!scheduler.is_running());
        assert!(!scheduler.frame(48.0), "idle scheduler does not tick");
    }

    #[test]
    fn test_every_entry_ticks_each_frame() {
        let mut scheduler = Scheduler::new();
        let a = scheduler.register(Countdown {
            remaining: 5,
            ..Default::default()
        });
        let b = scheduler.register(Countdown {
            remaining: 1,
            ..Default::default()
        });
        scheduler.wake();
        scheduler.frame(0.0);
        scheduler.frame(10.0);

        let a = scheduler.unregister(a).unwrap();
        let b = scheduler.unregister(b).unwrap();
        assert_eq!(a.deltas, vec![0.0, 0.01]);
        assert_eq!(b.deltas, vec![0.0, 0.01]);
        assert!(scheduler.is_empty());
        assert!(!scheduler.is_running());
    }

    #[test]
    fn test_unregister_unknown_is_ignored() {
        let mut scheduler: Scheduler<Countdown> = Scheduler::new();
        let id = scheduler.register(Countdown::default());
        assert!(scheduler.unregister(id).is_some());
        assert!(scheduler.unregister(id).is_none());
    }

    #[test]
    fn test_shared_surfaces_settle() {
        let surface = Rc::new(RefCell::new(Surface::new(SurfaceClass::Benefit)));
        let mut scheduler: Scheduler<Rc<RefCell<Surface>>> = Scheduler::new();
        scheduler.register(surface.clone());

        let rect = Rect::new(0.0, 0.0, 300.0, 150.0);
        surface
            .borrow_mut()
            .on_pointer_move(PointerSample::new(20.0, 20.0), rect);
        assert!(scheduler.wake());

        let mut now = 0.0;
        while scheduler.frame(now) {
            now += 16.0;
            assert!(now < 60_000.0);
        }
        surface.borrow_mut().on_pointer_leave();
        assert!(scheduler.wake());
        while scheduler.frame(now) {
            now += 16.0;
        }
        assert_eq!(surface.borrow().card_transform(), Transform::IDENTITY);
    }

    #[test]
    fn test_busy_entry_waits_for_next_frame() {
        let shared = Rc::new(RefCell::new(Countdown {
            remaining: 1,
            ..Default::default()
        }));
        let mut handle = shared.clone();
        let guard = shared.borrow_mut();
        assert!(handle.tick(0.1));
        drop(guard);
        assert!(!handle.tick(0.1));
    }
}

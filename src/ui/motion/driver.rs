//! Browser frame loop
//!
//! One [`Scheduler`] per tab, created on first use by [`init_motion`].
//! Bindings hand it an animation and keep the returned [`FrameSubscription`];
//! dropping the subscription unregisters the animation. Input handlers call
//! [`wake`] after retargeting, and the loop stops requesting frames as soon as
//! nothing moves.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::motion::{Animate, Scheduler, SlotId};

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;
#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::{JsCast, closure::Closure};

/// Animation shared between its binding and the scheduler
pub type SharedAnimation = Rc<RefCell<dyn Animate>>;

struct Driver {
    scheduler: Scheduler<SharedAnimation>,
    #[cfg(not(feature = "ssr"))]
    on_frame: Closure<dyn FnMut(f64)>,
}

impl Driver {
    fn new() -> Self {
        Self {
            scheduler: Scheduler::new(),
            #[cfg(not(feature = "ssr"))]
            on_frame: Closure::new(move |now_ms: f64| {
                if advance(now_ms) {
                    request_frame();
                }
            }),
        }
    }
}

thread_local! {
    static DRIVER: RefCell<Option<Driver>> = const { RefCell::new(None) };
    // Unsubscriptions that arrived while the scheduler was busy
    static PENDING_REMOVALS: RefCell<Vec<SlotId>> = const { RefCell::new(Vec::new()) };
}

/// Create the tab's frame driver. Later calls do nothing.
pub fn init_motion() {
    let _ = DRIVER.try_with(|cell| {
        if let Ok(mut slot) = cell.try_borrow_mut() {
            if slot.is_none() {
                *slot = Some(Driver::new());
            }
        }
    });
}

fn with_scheduler<R>(f: impl FnOnce(&mut Scheduler<SharedAnimation>) -> R) -> Option<R> {
    DRIVER
        .try_with(|cell| {
            let mut slot = cell.try_borrow_mut().ok()?;
            let driver = slot.as_mut()?;
            let removed: Vec<SharedAnimation> = PENDING_REMOVALS
                .try_with(|p| std::mem::take(&mut *p.borrow_mut()))
                .unwrap_or_default()
                .into_iter()
                .filter_map(|id| driver.scheduler.unregister(id))
                .collect();
            let result = f(&mut driver.scheduler);
            drop(slot);
            drop(removed);
            Some(result)
        })
        .ok()
        .flatten()
}

/// Register `animation` with the frame loop
pub fn subscribe(animation: SharedAnimation) -> FrameSubscription {
    init_motion();
    FrameSubscription {
        id: with_scheduler(|s| s.register(animation)),
    }
}

/// Restart the frame loop if it is idle
pub fn wake() {
    if with_scheduler(|s| s.wake()).unwrap_or(false) {
        request_frame();
    }
}

/// Run one frame. Returns `true` while another frame is needed.
fn advance(now_ms: f64) -> bool {
    with_scheduler(|s| s.frame(now_ms)).unwrap_or(false)
}

#[cfg(not(feature = "ssr"))]
fn request_frame() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = DRIVER.try_with(|cell| {
        let Ok(slot) = cell.try_borrow() else {
            return;
        };
        if let Some(driver) = slot.as_ref() {
            if let Err(e) = window.request_animation_frame(driver.on_frame.as_ref().unchecked_ref()) {
                leptos::logging::warn!("requestAnimationFrame failed: {:?}", e);
            }
        }
    });
}

#[cfg(feature = "ssr")]
fn request_frame() {}

/// Keeps an animation registered with the frame loop until dropped
pub struct FrameSubscription {
    id: Option<SlotId>,
}

impl FrameSubscription {
    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }
}

impl Drop for FrameSubscription {
    fn drop(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        // Unregistering from inside a frame has to wait for the next pass
        if with_scheduler(|s| s.unregister(id)).is_none() {
            let _ = PENDING_REMOVALS.try_with(|p| p.borrow_mut().push(id));
        }
    }
}

#[cfg(test)]
fn registered() -> usize {
    with_scheduler(|s| s.len()).unwrap_or(0)
}

#[cfg(test)]
fn is_running() -> bool {
    with_scheduler(|s| s.is_running()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Steps(u32);

    impl Animate for Steps {
        fn tick(&mut self, _dt: f64) -> bool {
            self.0 = self.0.saturating_sub(1);
            self.0 > 0
        }
    }

    /// Drops its own subscription on the first tick
    struct SelfRemoving(Option<FrameSubscription>);

    impl Animate for SelfRemoving {
        fn tick(&mut self, _dt: f64) -> bool {
            self.0.take();
            true
        }
    }

    #[test]
    fn test_init_is_idempotent() {
        init_motion();
        let _sub = subscribe(Rc::new(RefCell::new(Steps(3))));
        init_motion();
        assert_eq!(registered(), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let sub = subscribe(Rc::new(RefCell::new(Steps(3))));
        assert!(sub.is_active());
        let other = subscribe(Rc::new(RefCell::new(Steps(3))));
        assert_eq!(registered(), 2);

        drop(sub);
        assert_eq!(registered(), 1);
        drop(other);
        assert_eq!(registered(), 0);
    }

    #[test]
    fn test_wake_and_go_idle() {
        let _sub = subscribe(Rc::new(RefCell::new(Steps(2))));
        assert!(!is_running());

        wake();
        assert!(is_running());
        assert!(advance(0.0));
        assert!(!advance(16.0));
        assert!(!is_running());

        // Idle until the next wake
        assert!(!advance(32.0));
    }

    #[test]
    fn test_unsubscribe_during_frame_is_deferred() {
        let slot = Rc::new(RefCell::new(SelfRemoving(None)));
        let own = subscribe(slot.clone());
        slot.borrow_mut().0 = Some(own);
        let _keep = subscribe(Rc::new(RefCell::new(Steps(10))));
        assert_eq!(registered(), 2);

        wake();
        advance(0.0);
        // Removed on the next pass through the scheduler
        assert_eq!(registered(), 1);
    }
}

//! Custom cursor overlay
//!
//! Two fixed elements (dot and ring) driven by [`CursorState`]. Window
//! listeners only retarget; the frame driver writes the styles.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;

use super::driver::FrameSubscription;
use crate::core::motion::CursorState;

type SharedCursor = StoredValue<Rc<RefCell<CursorState>>, LocalStorage>;

#[component]
pub fn CustomCursor() -> impl IntoView {
    let dot = NodeRef::<Div>::new();
    let ring = NodeRef::<Div>::new();
    let state: SharedCursor = StoredValue::new_local(Rc::new(RefCell::new(CursorState::new())));
    let subscription = StoredValue::new_local(None::<FrameSubscription>);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{mousedown, mousemove, mouseover, mouseup};
        use leptos::wasm_bindgen::JsCast;
        use leptos::web_sys;

        use super::driver;
        use crate::core::motion::INTERACTIVE_SELECTOR;

        Effect::new(move |_| {
            let (Some(dot), Some(ring)) = (dot.get(), ring.get()) else {
                return;
            };
            if subscription.with_value(Option::is_some) {
                return;
            }
            let bound = bound::BoundCursor::new(state.get_value(), dot.into(), ring.into());
            subscription.set_value(Some(driver::subscribe(Rc::new(RefCell::new(bound)))));
        });

        let handles = [
            window_event_listener(mousemove, move |ev| {
                let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
                retarget(state, |c| c.on_pointer_move(x, y));
            }),
            window_event_listener(mousedown, move |_| retarget(state, CursorState::on_pointer_down)),
            window_event_listener(mouseup, move |_| retarget(state, CursorState::on_pointer_up)),
            window_event_listener(mouseover, move |ev| {
                let hovering = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
                    .is_some();
                if state.with_value(|c| c.borrow_mut().set_hovering(hovering)) {
                    driver::wake();
                }
            }),
        ];

        on_cleanup(move || {
            for handle in handles {
                handle.remove();
            }
        });
    }

    #[cfg(feature = "ssr")]
    let _ = state;

    on_cleanup(move || {
        subscription.try_update_value(Option::take);
    });

    view! {
        <div aria-hidden="true" class="hidden md:block">
            <div
                node_ref=dot
                class="fixed top-0 left-0 w-2.5 h-2.5 rounded-full bg-n8n-pink pointer-events-none z-[100001] shadow-[0_0_10px_rgba(234,75,113,0.3)] will-change-transform"
                style="opacity: 0;"
            ></div>
            <div
                node_ref=ring
                class="fixed top-0 left-0 w-9 h-9 rounded-full border pointer-events-none z-[100000] will-change-transform"
                style="opacity: 0; border-color: rgba(234, 75, 113, 0.4);"
            ></div>
        </div>
    }
}

#[cfg(not(feature = "ssr"))]
fn retarget(state: SharedCursor, update: impl FnOnce(&mut CursorState)) {
    state.with_value(|c| update(&mut c.borrow_mut()));
    super::driver::wake();
}

#[cfg(not(feature = "ssr"))]
mod bound {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::web_sys;

    use crate::core::motion::{Animate, CursorState};

    pub struct BoundCursor {
        state: Rc<RefCell<CursorState>>,
        dot: web_sys::HtmlElement,
        ring: web_sys::HtmlElement,
    }

    impl BoundCursor {
        pub fn new(
            state: Rc<RefCell<CursorState>>,
            dot: web_sys::HtmlElement,
            ring: web_sys::HtmlElement,
        ) -> Self {
            Self { state, dot, ring }
        }

        fn render(&self) {
            let Ok(state) = self.state.try_borrow() else {
                return;
            };
            let opacity = if state.is_visible() { "1" } else { "0" };

            let dot = self.dot.style();
            let _ = dot.set_property("transform", &state.dot().to_css());
            let _ = dot.set_property("opacity", opacity);

            let ring = self.ring.style();
            let _ = ring.set_property("transform", &state.ring().to_css());
            let _ = ring.set_property("opacity", opacity);
            let _ = ring.set_property("background-color", &state.ring_fill());
            let _ = ring.set_property("border-color", &state.ring_border());
        }
    }

    impl Animate for BoundCursor {
        fn tick(&mut self, dt: f64) -> bool {
            let active = self.state.tick(dt);
            self.render();
            active
        }
    }
}

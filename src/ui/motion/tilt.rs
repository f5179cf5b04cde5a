//! Tilt card component
//!
//! Wraps its children in an element that tilts toward the pointer. A
//! descendant marked with [`LAYER_ATTR`] is driven as the card's decorative
//! layer (feature icon, pricing badge, template glow).

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;

use super::driver::{self, FrameSubscription};
use crate::core::motion::{INTERACTIVE_CLASS, Surface, SurfaceClass};

/// Attribute marking the decorative layer inside a card
pub const LAYER_ATTR: &str = "data-tilt-layer";

#[component]
pub fn TiltCard(
    surface: SurfaceClass,
    #[prop(into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let state = StoredValue::new_local(Rc::new(RefCell::new(Surface::new(surface))));
    let subscription = StoredValue::new_local(None::<FrameSubscription>);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        let Some(card) = node.get() else {
            return;
        };
        if subscription.with_value(Option::is_some) {
            return;
        }
        let bound = bound::BoundSurface::new(state.get_value(), card.into());
        subscription.set_value(Some(driver::subscribe(Rc::new(RefCell::new(bound)))));
    });

    on_cleanup(move || {
        state.try_with_value(|s| s.borrow_mut().dispose());
        subscription.try_update_value(Option::take);
    });

    let on_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::motion::{PointerSample, Rect};

            let Some(card) = node.get_untracked() else {
                return;
            };
            // Read every time; cards move while the page scrolls
            let r = card.get_bounding_client_rect();
            let rect = Rect::new(r.left(), r.top(), r.width(), r.height());
            let sample = PointerSample::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            if state.with_value(|s| s.borrow_mut().on_pointer_move(sample, rect)) {
                driver::wake();
            }
        }
        #[cfg(feature = "ssr")]
        let _ = ev;
    };

    let on_leave = move |_: leptos::ev::MouseEvent| {
        if state.with_value(|s| s.borrow_mut().on_pointer_leave()) {
            driver::wake();
        }
    };

    view! {
        <div
            node_ref=node
            class=move || format!("preserve-3d will-change-transform {INTERACTIVE_CLASS} {}", class.get())
            data-surface=surface.as_str()
            on:mousemove=on_move
            on:mouseleave=on_leave
        >
            {children()}
        </div>
    }
}

#[cfg(not(feature = "ssr"))]
mod bound {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::wasm_bindgen::JsCast;
    use leptos::web_sys;

    use super::LAYER_ATTR;
    use crate::core::motion::{Animate, Surface};

    /// Surface state plus the elements it is written to
    pub struct BoundSurface {
        surface: Rc<RefCell<Surface>>,
        card: web_sys::HtmlElement,
        layer: Option<web_sys::HtmlElement>,
    }

    impl BoundSurface {
        pub fn new(surface: Rc<RefCell<Surface>>, card: web_sys::HtmlElement) -> Self {
            let layer = card
                .query_selector(&format!("[{LAYER_ATTR}]"))
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
            let bound = Self { surface, card, layer };
            bound.render();
            bound
        }

        fn render(&self) {
            let Ok(surface) = self.surface.try_borrow() else {
                return;
            };
            let _ = self.card.style().set_property("transform", &surface.card_css());
            if let (Some(layer), Some(pose)) = (&self.layer, surface.layer_transform()) {
                let style = layer.style();
                let _ = style.set_property("transform", &pose.to_css());
                let _ = style.set_property("opacity", &format!("{:.3}", pose.opacity));
            }
        }
    }

    impl Animate for BoundSurface {
        fn tick(&mut self, dt: f64) -> bool {
            let active = self.surface.tick(dt);
            self.render();
            active
        }
    }
}

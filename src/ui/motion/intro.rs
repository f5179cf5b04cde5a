//! Hero entrance
//!
//! Targets are rendered with the first pose of their step inline, so the
//! server markup already matches frame zero and nothing flashes before
//! hydration.

use crate::core::motion::{HERO_INTRO, Transform};

#[cfg(not(feature = "ssr"))]
use super::driver::{self, FrameSubscription};

/// Inline style for a transform pose
pub fn pose_style(pose: &Transform) -> String {
    format!("transform: {}; opacity: {:.3};", pose.to_css(), pose.opacity)
}

/// Starting inline style of the hero element with DOM id `target`
pub fn intro_style(target: &str) -> String {
    HERO_INTRO
        .iter()
        .find(|step| step.target == target)
        .map(|step| pose_style(&step.from))
        .unwrap_or_default()
}

#[cfg(not(feature = "ssr"))]
mod bound {
    use leptos::wasm_bindgen::JsCast;
    use leptos::web_sys;

    use crate::core::motion::{Animate, IntroTimeline};

    /// Intro timeline writing its poses into the hero elements
    pub struct BoundIntro {
        timeline: IntroTimeline,
        targets: Vec<Option<web_sys::HtmlElement>>,
    }

    impl BoundIntro {
        pub fn hero() -> Self {
            let timeline = IntroTimeline::hero();
            let document = web_sys::window().and_then(|w| w.document());
            let targets = timeline
                .steps()
                .iter()
                .map(|step| {
                    document
                        .as_ref()
                        .and_then(|d| d.get_element_by_id(step.target))
                        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                })
                .collect();
            Self { timeline, targets }
        }

        fn render(&self) {
            for (index, target) in self.targets.iter().enumerate() {
                let (Some(element), Some(pose)) = (target, self.timeline.pose(index)) else {
                    continue;
                };
                let style = element.style();
                let _ = style.set_property("transform", &pose.to_css());
                let _ = style.set_property("opacity", &format!("{:.3}", pose.opacity));
            }
        }
    }

    impl Animate for BoundIntro {
        fn tick(&mut self, dt: f64) -> bool {
            let active = self.timeline.tick(dt);
            self.render();
            active
        }
    }
}

/// Start the hero entrance. Keep the subscription alive until the hero unmounts.
#[cfg(not(feature = "ssr"))]
pub fn play_hero_intro() -> FrameSubscription {
    use std::cell::RefCell;
    use std::rc::Rc;

    let subscription = driver::subscribe(Rc::new(RefCell::new(bound::BoundIntro::hero())));
    driver::wake();
    subscription
}

//! Feature grid

use leptos::prelude::*;

use crate::core::content::{FEATURES, Tile};
use crate::core::motion::SurfaceClass;
use crate::ui::icon::Icon;
use crate::ui::motion::TiltCard;
use crate::ui::theme::Theme;

#[component]
pub fn Features(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <section id="features" class="py-32 px-6 perspective-1000">
            <div class="max-w-7xl mx-auto">
                <div class="text-center max-w-3xl mx-auto mb-20 reveal">
                    <h2 class="text-4xl md:text-6xl font-extrabold mb-6 tracking-tight">
                        "Built for High-Scale Automation"
                    </h2>
                    <p class="text-xl opacity-70 leading-relaxed">
                        "Stop worrying about server maintenance and start building the workflows that drive your business growth."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .map(|tile| view! { <FeatureCard tile=*tile theme=theme /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(tile: Tile, theme: Signal<Theme>) -> impl IntoView {
    view! {
        <div class="reveal">
            <TiltCard
                surface=SurfaceClass::Feature
                class=move || {
                    format!(
                        "group h-full p-8 rounded-3xl border transition-colors duration-300 cursor-pointer shadow-sm {}",
                        theme.get().pick(
                            "bg-n8n-surface border-white/10 hover:border-n8n-pink/50",
                            "bg-white border-slate-200 hover:shadow-2xl hover:border-n8n-pink/20",
                        ),
                    )
                }
            >
                // Parallax layer
                <div
                    data-tilt-layer=""
                    class=move || {
                        format!(
                            "w-14 h-14 rounded-2xl flex items-center justify-center mb-6 pointer-events-none {}",
                            theme.get().pick("bg-white/5", "bg-n8n-pink/5"),
                        )
                    }
                >
                    <Icon name=tile.icon class="w-6 h-6 text-n8n-pink" />
                </div>
                <h3 class="text-2xl font-bold mb-4 tracking-tight pointer-events-none">{tile.title}</h3>
                <p class="opacity-60 leading-relaxed pointer-events-none">{tile.description}</p>
            </TiltCard>
        </div>
    }
}

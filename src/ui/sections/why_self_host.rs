//! "Why self-hosted" section: intro copy, highlight rows and benefit tiles

use leptos::prelude::*;

use crate::core::content::{BENEFITS, HIGHLIGHTS, Tile};
use crate::core::motion::SurfaceClass;
use crate::ui::icon::Icon;
use crate::ui::motion::TiltCard;
use crate::ui::theme::Theme;

#[component]
pub fn WhySelfHost(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <section class="py-24 px-6 relative overflow-hidden perspective-1000">
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-full max-w-4xl h-96 bg-n8n-pink/5 blur-[120px] pointer-events-none"></div>

            <div class="max-w-7xl mx-auto relative z-10">
                <div class="flex flex-col lg:flex-row gap-16 items-center">
                    <div class="lg:w-1/2 reveal">
                        <h2 class="text-4xl md:text-5xl font-extrabold mb-8 tracking-tight leading-tight">
                            "Why Choose "<br />
                            <span class="text-n8n-pink">"Self-Hosted"</span>" n8n?"
                        </h2>
                        <p class="text-xl opacity-70 mb-10 leading-relaxed">
                            "n8n is powerful, but its true potential is unlocked when you control the environment. \
                             DigiFlow gives you the power of self-hosting with the convenience of a managed cloud."
                        </p>

                        <div class="space-y-6">
                            {HIGHLIGHTS.iter().map(|tile| view! { <HighlightRow tile=*tile /> }).collect_view()}
                        </div>
                    </div>

                    <div class="lg:w-1/2 grid sm:grid-cols-2 gap-6">
                        {BENEFITS
                            .iter()
                            .map(|tile| view! { <BenefitCard tile=*tile theme=theme /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HighlightRow(tile: Tile) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4 p-4 rounded-2xl transition-colors hover:bg-n8n-pink/5 border border-transparent hover:border-n8n-pink/10">
            <div class="mt-1 bg-n8n-pink/10 p-2 rounded-lg">
                <Icon name=tile.icon class="w-5 h-5 text-n8n-pink" />
            </div>
            <div>
                <h4 class="font-bold text-lg mb-1">{tile.title}</h4>
                <p class="text-sm opacity-60">{tile.description}</p>
            </div>
        </div>
    }
}

#[component]
fn BenefitCard(tile: Tile, theme: Signal<Theme>) -> impl IntoView {
    view! {
        <div class="reveal">
            <TiltCard
                surface=SurfaceClass::Benefit
                class=move || {
                    format!(
                        "h-full p-8 rounded-[2rem] border transition-colors duration-300 cursor-default {}",
                        theme.get().pick(
                            "bg-n8n-surface/80 border-white/10 hover:border-n8n-pink/30",
                            "bg-white border-slate-200 shadow-sm hover:shadow-xl hover:border-n8n-pink/20",
                        ),
                    )
                }
            >
                <div class="mb-6 inline-block p-3 rounded-2xl bg-n8n-pink/5 pointer-events-none">
                    <Icon name=tile.icon class="w-8 h-8 text-n8n-pink" />
                </div>
                <h3 class="text-xl font-bold mb-3 tracking-tight pointer-events-none">{tile.title}</h3>
                <p class="text-sm opacity-60 leading-relaxed pointer-events-none">{tile.description}</p>
            </TiltCard>
        </div>
    }
}

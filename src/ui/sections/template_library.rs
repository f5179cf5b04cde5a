//! Premium template gallery

use leptos::prelude::*;

use crate::core::content::{TEMPLATES, Template};
use crate::core::motion::SurfaceClass;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::TiltCard;
use crate::ui::theme::Theme;

#[component]
pub fn TemplateLibrary(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <section class="py-32 px-6 relative overflow-hidden perspective-1000">
            <div class="absolute bottom-0 right-0 w-[500px] h-[500px] bg-n8n-pink/5 blur-[150px] -z-10"></div>

            <div class="max-w-7xl mx-auto relative z-10">
                <div class="flex flex-col md:flex-row md:items-end justify-between mb-16 gap-6 reveal">
                    <div class="max-w-2xl">
                        <div class="flex items-center gap-2 mb-4">
                            <Icon name=icons::STAR class="w-[18px] h-[18px] text-n8n-pink fill-current" />
                            <span class="text-n8n-pink font-bold tracking-widest uppercase text-xs">"Members Only Library"</span>
                        </div>
                        <h2 class="text-4xl md:text-6xl font-extrabold tracking-tight mb-4">
                            "Accelerate with "<br />
                            <span class="text-n8n-pink">"Premium Templates"</span>
                        </h2>
                        <p class="text-xl opacity-70">
                            "Don't start from scratch. Access our curated library of 500+ production-ready workflows designed by n8n experts."
                        </p>
                    </div>
                    <button class="px-8 py-4 bg-transparent border-2 border-n8n-pink text-n8n-pink font-bold rounded-full hover:bg-n8n-pink hover:text-white transition-all group shrink-0">
                        "Browse All Templates"
                        <Icon
                            name=icons::ARROW_UP_RIGHT
                            class="w-6 h-6 inline-block ml-2 group-hover:translate-x-1 group-hover:-translate-y-1 transition-transform"
                        />
                    </button>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {TEMPLATES
                        .iter()
                        .map(|template| view! { <TemplateCard template=*template theme=theme /> })
                        .collect_view()}
                </div>

                // Grid overlay
                <div
                    class=move || {
                        format!(
                            "absolute inset-0 -z-20 opacity-10 pointer-events-none {}",
                            theme.get().pick("invert", ""),
                        )
                    }
                    style="background-image: linear-gradient(#EA4B71 1px, transparent 1px), linear-gradient(90deg, #EA4B71 1px, transparent 1px); background-size: 100px 100px;"
                ></div>
            </div>
        </section>
    }
}

#[component]
fn TemplateCard(template: Template, theme: Signal<Theme>) -> impl IntoView {
    view! {
        <div class="reveal">
            <TiltCard
                surface=SurfaceClass::Template
                class=move || {
                    format!(
                        "group relative h-full p-8 rounded-[2.5rem] border transition-colors duration-500 overflow-hidden cursor-pointer {}",
                        theme.get().pick(
                            "bg-n8n-surface/50 border-white/10 hover:border-n8n-pink/40",
                            "bg-white border-slate-200 shadow-sm hover:shadow-2xl hover:border-n8n-pink/30",
                        ),
                    )
                }
            >
                // Pointer glow
                <div
                    data-tilt-layer=""
                    class="absolute top-0 left-0 w-52 h-52 bg-n8n-pink/20 blur-[60px] rounded-full pointer-events-none opacity-0"
                ></div>

                <div class="relative z-10">
                    <div class=move || {
                        format!(
                            "mb-6 w-14 h-14 rounded-2xl flex items-center justify-center pointer-events-none transition-transform group-hover:scale-110 {}",
                            theme.get().pick("bg-white/5", "bg-n8n-pink/5"),
                        )
                    }>
                        <Icon name=template.icon class="w-6 h-6 text-n8n-pink" />
                    </div>
                    <div class="flex items-center justify-between mb-3 pointer-events-none">
                        <span class="text-[10px] font-black uppercase tracking-widest opacity-40">{template.category}</span>
                        <span class=move || {
                            format!(
                                "text-[10px] font-bold px-2 py-0.5 rounded-full {}",
                                theme.get().pick("bg-n8n-pink/10 text-n8n-pink", "bg-n8n-pink text-white"),
                            )
                        }>{template.complexity.as_str()}</span>
                    </div>
                    <h3 class="text-xl font-bold mb-4 tracking-tight pointer-events-none group-hover:text-n8n-pink transition-colors">
                        {template.title}
                    </h3>
                    <p class="text-sm opacity-60 leading-relaxed mb-8 pointer-events-none">{template.description}</p>

                    <div class="flex items-center gap-4 pt-4 border-t border-white/5 pointer-events-none">
                        <div class="flex flex-col">
                            <span class="text-[10px] uppercase opacity-40 font-bold">"Node Count"</span>
                            <span class="text-sm font-bold">{format!("{} Nodes", template.nodes)}</span>
                        </div>
                        <div class="h-8 w-px bg-white/5"></div>
                        <div class="flex flex-col">
                            <span class="text-[10px] uppercase opacity-40 font-bold">"Updated"</span>
                            <span class="text-sm font-bold">"2d ago"</span>
                        </div>
                    </div>
                </div>
            </TiltCard>
        </div>
    }
}

//! Hero: headline, calls to action and the live cluster dashboard

use leptos::prelude::*;

use crate::core::motion::{HERO_CTA, HERO_SUBTITLE, HERO_TITLE, HERO_VISUAL, bar_timing};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{FrameSubscription, intro_style};
use crate::ui::theme::Theme;

/// Peaks of the front chart line, where the glowing nodes sit
const NODE_XS: [u32; 7] = [0, 150, 300, 450, 600, 750, 900];
const LOAD_BARS: usize = 6;

const BACK_LINE: &str = "M0 130 C50 140, 100 120, 150 130 C200 140, 250 120, 300 130 C350 140, 400 120, 450 130 C500 140, 550 120, 600 130 C650 140, 700 120, 750 130 C800 140, 850 120, 900 130";
const MID_LINE: &str = "M0 100 C50 85, 100 115, 150 100 C200 85, 250 115, 300 100 C350 85, 400 115, 450 100 C500 85, 550 115, 600 100 C650 85, 700 115, 750 100 C800 85, 850 115, 900 100";
const FRONT_LINE: &str = "M0 60 C50 40, 100 80, 150 60 C200 40, 250 80, 300 60 C350 40, 400 80, 450 60 C500 40, 550 80, 600 60 C650 40, 700 80, 750 60 C800 40, 850 80, 900 60";

const CHART_DEFS: &str = concat!(
    r##"<filter id="nodeGlowFilter" x="-50%" y="-50%" width="200%" height="200%">"##,
    r##"<feGaussianBlur stdDeviation="3" result="blur"/><feComposite in="SourceGraphic" in2="blur" operator="over"/></filter>"##,
    r##"<linearGradient id="gradient-pink" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="#EA4B71" stop-opacity="0.45"/><stop offset="100%" stop-color="#EA4B71" stop-opacity="0"/></linearGradient>"##,
    r##"<linearGradient id="gradient-blue" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="#3B82F6" stop-opacity="0.3"/><stop offset="100%" stop-color="#3B82F6" stop-opacity="0"/></linearGradient>"##,
    r##"<linearGradient id="gradient-purple" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="#8B5CF6" stop-opacity="0.15"/><stop offset="100%" stop-color="#8B5CF6" stop-opacity="0"/></linearGradient>"##,
);

/// Closes a chart line into an area down to the bottom of the chart
fn area(line: &str) -> String {
    format!("{line} L900 150 L0 150 Z")
}

/// Inline style of load bar `index`: its jitter range and stagger
pub fn bar_style(index: usize) -> String {
    let timing = bar_timing(index);
    format!(
        "--bar-low: {:.3}; --bar-high: {:.3}; animation-delay: {:.1}s; animation-duration: {:.1}s;",
        timing.low, timing.high, timing.delay, timing.period
    )
}

#[component]
pub fn Hero(theme: Signal<Theme>) -> impl IntoView {
    let intro = StoredValue::new_local(None::<FrameSubscription>);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        if intro.with_value(Option::is_none) {
            intro.set_value(Some(crate::ui::motion::play_hero_intro()));
        }
    });

    on_cleanup(move || {
        intro.try_update_value(Option::take);
    });

    let stat_tile = move || {
        format!(
            "p-4 rounded-2xl border transition-colors {}",
            theme.get().pick("bg-white/5 border-white/5", "bg-slate-50 border-slate-100")
        )
    };

    view! {
        <section class="relative pt-40 pb-20 px-6 overflow-hidden min-h-[90vh] flex flex-col justify-center">
            // Background ambience
            <div class="absolute top-0 right-0 w-[600px] h-[600px] rounded-full blur-[120px] -z-10 transition-colors duration-500 bg-n8n-pink/10"></div>
            <div class=move || {
                format!(
                    "absolute bottom-0 left-0 w-[400px] h-[400px] rounded-full blur-[100px] -z-10 transition-colors duration-500 {}",
                    theme.get().pick("bg-blue-600/10", "bg-blue-200/20"),
                )
            }></div>

            <div class="max-w-7xl mx-auto grid lg:grid-cols-2 gap-16 items-center">
                <div>
                    <div class="inline-flex items-center gap-2 px-4 py-1.5 rounded-full bg-n8n-pink/10 border border-n8n-pink/20 text-n8n-pink text-sm font-semibold mb-8">
                        <span class="relative flex h-2 w-2">
                            <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-n8n-pink opacity-75"></span>
                            <span class="relative inline-flex rounded-full h-2 w-2 bg-n8n-pink"></span>
                        </span>
                        "Premium n8n Hosting v2.0"
                    </div>

                    <h1
                        id=HERO_TITLE
                        style=intro_style(HERO_TITLE)
                        class="text-5xl md:text-7xl font-extrabold leading-[1.1] mb-6 tracking-tight"
                    >
                        "Automate "<span class="text-n8n-pink">"Faster"</span>"."<br />
                        "Scale Smarter."
                    </h1>

                    <p
                        id=HERO_SUBTITLE
                        style=intro_style(HERO_SUBTITLE)
                        class="text-xl md:text-2xl opacity-70 mb-10 max-w-lg leading-relaxed"
                    >
                        "Enterprise-grade managed hosting for n8n. Dedicated resources, daily backups, and instant worldwide deployment."
                    </p>

                    <div id=HERO_CTA style=intro_style(HERO_CTA) class="flex flex-wrap gap-4">
                        <button class="bg-n8n-pink hover:brightness-110 text-white px-8 py-4 rounded-full font-bold text-lg flex items-center gap-2 group transition-all shadow-xl shadow-n8n-pink/20">
                            "Start Your Free Trial"
                            <Icon name=icons::ARROW_RIGHT class="w-6 h-6 group-hover:translate-x-1 transition-transform" />
                        </button>
                        <button class=move || {
                            format!(
                                "px-8 py-4 rounded-full font-bold text-lg flex items-center gap-2 border transition-all {}",
                                theme.get().pick("border-white/10 hover:bg-white/5", "border-slate-300 hover:bg-slate-100"),
                            )
                        }>
                            <Icon name=icons::PLAY class="w-5 h-5 fill-current text-n8n-pink" />
                            "Watch Demo"
                        </button>
                    </div>

                    <div class="mt-12 flex items-center gap-8 opacity-60">
                        <HeroBadge icon=icons::SERVER label="99.9% Uptime" />
                        <HeroBadge icon=icons::SHIELD label="DDoS Protection" />
                        <HeroBadge icon=icons::CPU label="NVMe Storage" />
                    </div>
                </div>

                <div id=HERO_VISUAL style=intro_style(HERO_VISUAL) class="relative hidden lg:block">
                    // Monitoring card
                    <div class=move || {
                        format!(
                            "p-8 rounded-[3rem] border backdrop-blur-xl shadow-2xl transition-colors duration-500 relative overflow-hidden {}",
                            theme.get().pick("bg-n8n-surface border-white/10", "bg-white border-slate-200 shadow-slate-200/40"),
                        )
                    }>
                        <div class="space-y-8">
                            <div class="flex items-center justify-between">
                                <div class="flex gap-4 items-center">
                                    <div class="w-12 h-12 rounded-2xl bg-n8n-pink/10 flex items-center justify-center text-n8n-pink">
                                        <Icon name=icons::ACTIVITY class="w-6 h-6" />
                                    </div>
                                    <div>
                                        <h4 class="font-bold text-sm">"Cluster Health"</h4>
                                        <p class="text-[10px] opacity-40 uppercase tracking-widest font-black">"Live Pulse Analysis"</p>
                                    </div>
                                </div>
                                <div class=move || {
                                    format!(
                                        "px-3 py-1 rounded-full text-[10px] font-bold flex items-center gap-1.5 {}",
                                        theme.get().pick("bg-white/5 text-green-400", "bg-green-50 text-green-600"),
                                    )
                                }>
                                    <div class="w-1.5 h-1.5 rounded-full bg-green-500 animate-pulse"></div>
                                    "System Optimal"
                                </div>
                            </div>

                            <div class="relative h-56 w-full overflow-hidden rounded-[2rem]">
                                <ClusterChart />
                            </div>

                            <div class="grid grid-cols-3 gap-4">
                                <div class=stat_tile>
                                    <p class="text-[10px] opacity-40 uppercase font-black mb-1">"Executions"</p>
                                    <p class="text-lg font-bold">"12.4k"<span class="text-[10px] text-green-500 ml-1">"↑"</span></p>
                                </div>
                                <div class=stat_tile>
                                    <p class="text-[10px] opacity-40 uppercase font-black mb-1">"Response"</p>
                                    <p class="text-lg font-bold">"24ms"</p>
                                </div>
                                <div class=stat_tile>
                                    <p class="text-[10px] opacity-40 uppercase font-black mb-1">"Cluster Load"</p>
                                    <div class="flex items-end gap-1 h-6 pt-1">
                                        {(0..LOAD_BARS)
                                            .map(|i| {
                                                view! {
                                                    <div
                                                        class="flex-1 h-[60%] bg-n8n-pink/30 rounded-t-sm stat-bar origin-bottom"
                                                        style=bar_style(i)
                                                    ></div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class="absolute top-6 right-8">
                            <div class="flex items-center gap-2">
                                <Icon name=icons::TRENDING_UP class="w-[18px] h-[18px] text-green-500" />
                                <span class="text-[10px] font-bold text-green-500">"Peak Performance"</span>
                            </div>
                        </div>
                    </div>

                    // Floating accents
                    <div class="absolute -top-10 -right-10 w-48 h-48 bg-n8n-pink/20 rounded-full blur-[80px] -z-10"></div>

                    <div class="absolute -bottom-10 -left-10 p-5 rounded-3xl bg-n8n-pink shadow-2xl shadow-n8n-pink/50 z-20 group hover:scale-110 transition-transform">
                        <Icon name=icons::ZAP class="w-7 h-7 text-white fill-current" />
                    </div>

                    <div class=move || {
                        format!(
                            "absolute top-1/2 -right-16 p-6 rounded-[2.5rem] border backdrop-blur-xl z-20 transition-all {}",
                            theme.get().pick("bg-n8n-surface/90 border-white/20", "bg-white/95 border-slate-200 shadow-2xl shadow-slate-200/50"),
                        )
                    }>
                        <div class="flex items-center gap-4">
                            <div class="w-12 h-12 rounded-2xl bg-green-500/10 flex items-center justify-center">
                                <div class="w-4 h-4 rounded-full bg-green-500 animate-ping"></div>
                            </div>
                            <div>
                                <span class="text-[10px] opacity-50 block font-bold tracking-[0.2em]">"NODE-01"</span>
                                <span class="text-sm font-black text-green-500">"Connected"</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HeroBadge(icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <Icon name=icon class="w-[18px] h-[18px] text-n8n-pink" />
            <span class="text-sm">{label}</span>
        </div>
    }
}

/// Stacked area chart; the layers and node glows loop in CSS
#[component]
fn ClusterChart() -> impl IntoView {
    view! {
        <svg viewBox="0 0 400 150" class="w-full h-full overflow-visible">
            <defs inner_html=CHART_DEFS></defs>

            <g class="opacity-[0.05]">
                {(0..4u32)
                    .map(|i| {
                        let y = i * 40 + 20;
                        view! { <line x1="0" y1=y x2="1000" y2=y stroke="currentColor" stroke-width="1" /> }
                    })
                    .collect_view()}
            </g>

            <g class="layer-back">
                <path d=area(BACK_LINE) fill="url(#gradient-purple)" />
                <path d=BACK_LINE fill="none" stroke="#8B5CF6" stroke-width="1.5" stroke-opacity="0.3" />
            </g>

            <g class="layer-mid">
                <path d=area(MID_LINE) fill="url(#gradient-blue)" />
                <path d=MID_LINE fill="none" stroke="#3B82F6" stroke-width="2" stroke-opacity="0.5" filter="url(#nodeGlowFilter)" />
            </g>

            <g class="layer-front">
                <path d=area(FRONT_LINE) fill="url(#gradient-pink)" />
                <path d=FRONT_LINE fill="none" stroke="#EA4B71" stroke-width="4" filter="url(#nodeGlowFilter)" />
                {NODE_XS
                    .iter()
                    .enumerate()
                    .map(|(i, &x)| {
                        view! {
                            <g>
                                <circle
                                    cx=x
                                    cy="60"
                                    r="10"
                                    fill="#EA4B71"
                                    fill-opacity="0.15"
                                    class="node-outer-glow"
                                    style=format!("animation-delay: {:.1}s;", 0.8 * i as f64)
                                />
                                <circle cx=x cy="60" r="4.5" fill="#EA4B71" filter="url(#nodeGlowFilter)" />
                                <circle cx=x cy="60" r="2" fill="white" />
                            </g>
                        }
                    })
                    .collect_view()}
            </g>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_closes_to_bottom() {
        assert!(area(FRONT_LINE).starts_with("M0 60 C50 40"));
        assert!(area(FRONT_LINE).ends_with("900 60 L900 150 L0 150 Z"));
    }

    #[test]
    fn test_bar_style_is_staggered() {
        assert!(bar_style(0).contains("animation-delay: 0.0s"));
        assert!(bar_style(3).contains("animation-delay: 0.3s"));
        assert!(bar_style(5).contains("animation-duration: 0.6s"));
    }

    #[test]
    fn test_bar_range_is_ordered() {
        for i in 0..LOAD_BARS {
            let timing = bar_timing(i);
            assert!(timing.low <= timing.high);
            assert!(timing.low >= 0.4 && timing.high <= 1.0);
        }
    }
}

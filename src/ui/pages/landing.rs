//! Landing page
//!
//! Owns the page theme and stacks the sections. Pointer-driven motion runs
//! through `ui::motion`; the looping decoration (chart layers, node glows,
//! load bars, circuit lines, menu pop) and the scroll reveal are plain CSS,
//! generated here from the timing constants in `core::motion`.

use std::fmt::Write;

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::motion::{
    CHART_LAYER_LOOPS, CHART_LOOP_WIDTH, HERO_CTA, HERO_SUBTITLE, HERO_TITLE, HERO_VISUAL,
    REVEAL_DURATION, REVEAL_OFFSET, REVEAL_ROOT_MARGIN,
};
use crate::ui::motion::CustomCursor;
use crate::ui::sections::{
    AssistantSection, BackgroundLines, ContextMenu, Features, Footer, Hero, Navbar, Pricing,
    TemplateLibrary, WhySelfHost,
};
use crate::ui::theme::{Theme, sync_document_theme};

const PAGE_TITLE: &str = "DigiFlow | Premium n8n Hosting";
const PAGE_DESCRIPTION: &str = "Managed and self-hosted n8n infrastructure. Dedicated resources, unlimited executions and an AI workflow architect.";

/// Reveal ease, matching `power2.out`
const REVEAL_EASE: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";
/// Menu pop, matching `back.out(1.7)`
const MENU_EASE: &str = "cubic-bezier(0.175, 0.885, 0.32, 1.275)";

#[component]
pub fn LandingPage() -> impl IntoView {
    let theme = RwSignal::new(Theme::default());
    let on_toggle_theme = Callback::new(move |_| theme.update(|t| *t = t.toggled()));
    let theme: Signal<Theme> = theme.into();
    sync_document_theme(theme);

    view! {
        <SeoMeta />

        <div class=move || {
            format!(
                "min-h-screen relative overflow-x-hidden transition-colors duration-500 {}",
                theme.get().pick("bg-n8n-dark text-white", "bg-slate-50 text-slate-900"),
            )
        }>
            <CustomCursor />
            <ContextMenu theme=theme />
            <BackgroundLines />

            <Navbar theme=theme on_toggle_theme=on_toggle_theme />

            <main class="dot-grid relative z-10">
                <Hero theme=theme />
                <WhySelfHost theme=theme />
                <Features theme=theme />
                <AssistantSection theme=theme />
                <Pricing theme=theme />
                <TemplateLibrary theme=theme />
            </main>

            <Footer theme=theme />
        </div>

        <LandingStyles />
        <RevealScript />
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=PAGE_TITLE />
        <Meta name="description" content=PAGE_DESCRIPTION />
        <Meta name="keywords" content="n8n hosting, n8n cloud, self-hosted n8n, workflow automation, managed n8n" />

        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />

        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content=PAGE_TITLE />
        <Meta property="twitter:description" content=PAGE_DESCRIPTION />

        <Link rel="icon" href="/logo-dark.svg" />
    }
}

/// Keyframes and classes for the CSS-driven motion on the page
pub fn landing_css() -> String {
    let mut css = String::with_capacity(4096);

    css.push_str(
        ".perspective-1000 { perspective: 1000px; }\n\
         .preserve-3d { transform-style: preserve-3d; }\n\
         .dot-grid { background-image: radial-gradient(rgba(234, 75, 113, 0.08) 1px, transparent 1px); background-size: 32px 32px; }\n",
    );

    // Scroll reveal
    let _ = writeln!(
        css,
        ".reveal {{ opacity: 0; transform: translateY({REVEAL_OFFSET}px); \
         transition: opacity {REVEAL_DURATION}s {REVEAL_EASE}, transform {REVEAL_DURATION}s {REVEAL_EASE}; }}\n\
         .reveal.visible {{ opacity: 1; transform: none; }}"
    );

    // Hero chart
    for (layer, period) in ["layer-back", "layer-mid", "layer-front"]
        .iter()
        .zip(CHART_LAYER_LOOPS)
    {
        let _ = writeln!(css, ".{layer} {{ animation: chart-loop {period}s linear infinite; }}");
    }
    let _ = writeln!(
        css,
        "@keyframes chart-loop {{ from {{ transform: translateX(0); }} to {{ transform: translateX(-{CHART_LOOP_WIDTH}px); }} }}"
    );
    css.push_str(
        ".node-outer-glow { transform-box: fill-box; transform-origin: center; animation: node-pulse 2.5s ease-out infinite both; }\n\
         @keyframes node-pulse { from { transform: scale(1); opacity: 0.6; } to { transform: scale(2.2); opacity: 0; } }\n\
         .stat-bar { animation-name: bar-jitter; animation-timing-function: ease-in-out; animation-iteration-count: infinite; animation-direction: alternate; }\n\
         @keyframes bar-jitter { from { transform: scaleY(var(--bar-low)); } to { transform: scaleY(var(--bar-high)); } }\n",
    );

    // Circuit lines
    css.push_str(
        ".cyber-line { stroke-dasharray: 1000; stroke-dashoffset: 1000; opacity: 0; animation-name: line-draw; animation-timing-function: cubic-bezier(0.45, 0, 0.55, 1); animation-fill-mode: forwards; }\n\
         @keyframes line-draw { to { stroke-dashoffset: 0; opacity: var(--line-opacity); } }\n\
         .data-packet { filter: drop-shadow(0 0 4px #EA4B71); }\n",
    );

    // Context menu and assistant result
    let _ = writeln!(
        css,
        ".menu-pop {{ transform-origin: top left; animation: menu-pop 0.2s {MENU_EASE} both; }}\n\
         @keyframes menu-pop {{ from {{ opacity: 0; transform: scale(0.9); }} to {{ opacity: 1; transform: scale(1); }} }}\n\
         .menu-item {{ animation: menu-item-in 0.3s ease-out both; }}\n\
         @keyframes menu-item-in {{ from {{ opacity: 0; transform: translateX(-10px); }} to {{ opacity: 1; transform: none; }} }}\n\
         .suggestion-enter {{ animation: suggestion-in 0.5s ease-out both; }}\n\
         @keyframes suggestion-in {{ from {{ opacity: 0; transform: translateY(10px); }} to {{ opacity: 1; transform: none; }} }}"
    );

    css
}

/// Without scripts nothing would ever reveal; show everything instead
fn noscript_css() -> String {
    format!(
        "#{HERO_TITLE}, #{HERO_SUBTITLE}, #{HERO_CTA}, #{HERO_VISUAL}, .reveal {{ opacity: 1 !important; transform: none !important; }}"
    )
}

#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style inner_html=landing_css()></style>
        <noscript>
            <style inner_html=noscript_css()></style>
        </noscript>
    }
}

/// Adds `visible` to each `.reveal` element once, the first time it scrolls in
pub fn reveal_script() -> String {
    format!(
        r#"(function() {{
    function initReveal() {{
        const observer = new IntersectionObserver((entries) => {{
            entries.forEach(entry => {{
                if (entry.isIntersecting) {{
                    entry.target.classList.add('visible');
                    observer.unobserve(entry.target);
                }}
            }});
        }}, {{ threshold: 0, rootMargin: '{REVEAL_ROOT_MARGIN}' }});

        document.querySelectorAll('.reveal').forEach(el => observer.observe(el));
    }}

    if (document.readyState === 'loading') {{
        document.addEventListener('DOMContentLoaded', initReveal);
    }} else {{
        initReveal();
    }}
}})();"#
    )
}

#[component]
fn RevealScript() -> impl IntoView {
    view! { <script inner_html=reveal_script()></script> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_layers_loop_at_their_own_speed() {
        let css = landing_css();
        assert!(css.contains(".layer-back { animation: chart-loop 25s linear infinite; }"));
        assert!(css.contains(".layer-mid { animation: chart-loop 18s linear infinite; }"));
        assert!(css.contains(".layer-front { animation: chart-loop 12s linear infinite; }"));
        assert!(css.contains("translateX(-450px)"));
    }

    #[test]
    fn test_reveal_starts_low_and_transparent() {
        let css = landing_css();
        assert!(css.contains(".reveal { opacity: 0; transform: translateY(50px);"));
        assert!(css.contains("opacity 1s cubic-bezier(0.25, 0.46, 0.45, 0.94)"));
    }

    #[test]
    fn test_reveal_fires_at_eighty_five_percent_and_once() {
        let script = reveal_script();
        assert!(script.contains("rootMargin: '0px 0px -15% 0px'"));
        assert!(script.contains("observer.unobserve(entry.target)"));
    }

    #[test]
    fn test_noscript_shows_intro_targets() {
        let css = noscript_css();
        for id in [HERO_TITLE, HERO_SUBTITLE, HERO_CTA, HERO_VISUAL] {
            assert!(css.contains(&format!("#{id}")));
        }
    }
}

//! Fixed top navigation bar

use leptos::prelude::*;

use super::logo::Logo;
use crate::core::content::NAV_LINKS;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::Theme;

#[component]
pub fn Navbar(theme: Signal<Theme>, on_toggle_theme: Callback<()>) -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 backdrop-blur-md border-b transition-all duration-300 {}",
                theme.get().pick("bg-n8n-dark/80 border-white/10", "bg-white/80 border-slate-200"),
            )
        }>
            <div class="max-w-7xl mx-auto px-6 h-20 flex items-center justify-between">
                <a href="#" aria-label="DigiFlow home">
                    <Logo theme=theme class="cursor-pointer group hover:scale-105 transition-transform" />
                </a>

                <div class="hidden md:flex items-center gap-8 text-sm font-medium">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="opacity-70 hover:opacity-100 hover:text-n8n-pink transition-all">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex items-center gap-4">
                    <button
                        class=move || {
                            format!(
                                "p-2 rounded-full transition-colors {}",
                                theme.get().pick("hover:bg-white/10 text-white", "hover:bg-slate-200 text-slate-900"),
                            )
                        }
                        on:click=move |_| on_toggle_theme.run(())
                        aria-label="Toggle theme"
                    >
                        {move || {
                            if theme.get().is_dark() {
                                view! { <Icon name=icons::SUN /> }
                            } else {
                                view! { <Icon name=icons::MOON /> }
                            }
                        }}
                    </button>
                    <button class="hidden sm:block bg-n8n-pink hover:brightness-110 text-white px-5 py-2.5 rounded-full font-semibold transition-all shadow-md shadow-n8n-pink/20">
                        "Get Started"
                    </button>
                    <button
                        class="md:hidden"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }
                            }
                        }}
                    </button>
                </div>
            </div>

            // Mobile menu
            <div
                class="md:hidden overflow-hidden transition-all duration-300"
                class:max-h-0=move || !mobile_menu_open.get()
                class:max-h-96=move || mobile_menu_open.get()
            >
                <div class="px-6 py-4 flex flex-col gap-2 text-sm font-medium">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="block py-2 opacity-70 hover:opacity-100 hover:text-n8n-pink transition-all"
                                    on:click=move |_| set_mobile_menu_open.set(false)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

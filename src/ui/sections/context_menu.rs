//! Custom right-click menu
//!
//! Replaces the browser menu page-wide. Opens at the pointer (clamped to
//! the viewport), closes on any click or scroll.

use leptos::prelude::*;

use crate::core::menu::{MENU_ENTRIES, MenuEntry, MenuItem, MenuState, item_delay};
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::Theme;

#[component]
pub fn ContextMenu(theme: Signal<Theme>) -> impl IntoView {
    let menu = RwSignal::new(MenuState::Closed);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{click, contextmenu, scroll};

        let handles = [
            window_event_listener(contextmenu, move |ev| {
                ev.prevent_default();
                let Some(window) = leptos::web_sys::window() else {
                    return;
                };
                let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                menu.set(MenuState::open_at(
                    f64::from(ev.client_x()),
                    f64::from(ev.client_y()),
                    width,
                    height,
                ));
            }),
            window_event_listener(click, move |_| close(menu)),
            window_event_listener(scroll, move |_| close(menu)),
        ];

        on_cleanup(move || {
            for handle in handles {
                handle.remove();
            }
        });
    }

    move || match menu.get() {
        MenuState::Closed => None,
        MenuState::Open { left, top } => Some(view! {
            <div
                role="menu"
                style=format!("left: {left}px; top: {top}px;")
                class=move || {
                    format!(
                        "fixed z-[99999] w-[220px] py-2 rounded-2xl border backdrop-blur-xl shadow-2xl overflow-hidden menu-pop {}",
                        theme.get().pick(
                            "bg-n8n-surface/90 border-white/10 text-white",
                            "bg-white/90 border-slate-200 text-slate-900",
                        ),
                    )
                }
            >
                <div class="px-4 py-2 mb-1 border-b border-white/5">
                    <span class="text-[10px] font-black uppercase tracking-[0.2em] text-n8n-pink">"DigiFlow Menu"</span>
                </div>
                {menu_items(theme)}
            </div>
        }),
    }
}

#[cfg(not(feature = "ssr"))]
fn close(menu: RwSignal<MenuState>) {
    if menu.with_untracked(MenuState::is_open) {
        menu.set(MenuState::Closed);
    }
}

fn menu_items(theme: Signal<Theme>) -> impl IntoView {
    let mut clickable = 0;
    MENU_ENTRIES
        .iter()
        .map(|entry| match entry {
            MenuEntry::Divider => view! { <div class="h-px my-2 mx-4 bg-white/10"></div> }.into_any(),
            MenuEntry::Item(item) => {
                let delay = item_delay(clickable);
                clickable += 1;
                view! { <MenuLink item=*item delay=delay theme=theme /> }.into_any()
            }
        })
        .collect_view()
}

#[component]
fn MenuLink(item: MenuItem, delay: f64, theme: Signal<Theme>) -> impl IntoView {
    let tone = move || {
        if item.primary {
            "text-n8n-pink font-bold"
        } else {
            theme.get().pick("text-white/80", "text-slate-700")
        }
    };

    view! {
        <a
            href=item.href
            role="menuitem"
            style=format!("animation-delay: {delay:.2}s;")
            class=move || {
                format!(
                    "menu-item group flex items-center justify-between px-4 py-2.5 text-sm transition-colors hover:bg-n8n-pink/10 {}",
                    tone(),
                )
            }
        >
            <span class="flex items-center gap-3">
                <Icon name=item.icon class="w-4 h-4" />
                {item.label}
            </span>
            <Icon
                name=icons::CHEVRON_RIGHT
                class="w-3.5 h-3.5 opacity-0 -translate-x-1 group-hover:opacity-100 group-hover:translate-x-0 transition-all"
            />
        </a>
    }
}

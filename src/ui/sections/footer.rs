//! Page footer: brand, socials, link columns and the legal row

use leptos::prelude::*;

use super::logo::Logo;
use crate::core::content::{FOOTER_COLUMNS, LEGAL_LINKS, SOCIALS};
use crate::ui::icon::Icon;
use crate::ui::theme::Theme;

#[component]
pub fn Footer(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <footer class=move || {
            format!(
                "py-20 px-6 border-t {}",
                theme.get().pick("border-white/10 bg-n8n-dark", "border-slate-200 bg-white"),
            )
        }>
            <div class="max-w-7xl mx-auto">
                <div class="grid md:grid-cols-4 gap-12 mb-16">
                    <div class="col-span-1 md:col-span-2">
                        <Logo theme=theme class="mb-6" />
                        <p class="text-lg opacity-60 max-w-md leading-relaxed">
                            "The ultimate managed hosting for n8n. Scale your automations without the headache of infrastructure management."
                        </p>
                        <div class="flex gap-4 mt-8">
                            {SOCIALS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href
                                            aria-label=social.label
                                            class="p-3 rounded-full border border-white/10 hover:bg-n8n-pink hover:text-white hover:border-n8n-pink transition-all"
                                        >
                                            <Icon name=social.label class="w-[18px] h-[18px]" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div>
                                    <h4 class="font-bold mb-6 tracking-tight">{column.title}</h4>
                                    <ul class="space-y-4 opacity-60 text-sm">
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a href=link.href class="hover:text-n8n-pink transition-colors">{link.label}</a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="pt-8 border-t border-white/10 flex flex-col md:flex-row justify-between items-center gap-4 text-xs opacity-50 font-medium">
                    <p>"© 2024 DigiFlow Inc. Optimized for n8n automations."</p>
                    <div class="flex gap-8">
                        {LEGAL_LINKS
                            .iter()
                            .map(|link| {
                                view! { <a href=link.href class="hover:text-n8n-pink transition-colors">{link.label}</a> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

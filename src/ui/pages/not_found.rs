//! 404 page

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page Not Found | DigiFlow" />

        <div class="min-h-screen bg-n8n-dark text-white flex flex-col items-center justify-center p-6 dot-grid">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-8 rounded-3xl bg-n8n-pink/10 flex items-center justify-center text-n8n-pink">
                    <Icon name=icons::ZAP class="w-12 h-12" />
                </div>

                <h1 class="text-7xl font-extrabold tracking-tight mb-4 text-n8n-pink">"404"</h1>
                <h2 class="text-2xl font-bold mb-2">"This workflow has no route"</h2>
                <p class="opacity-60 mb-10 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="inline-flex items-center gap-2 px-8 py-4 bg-n8n-pink hover:brightness-110 text-white font-bold rounded-full transition-all shadow-lg shadow-n8n-pink/30"
                >
                    "Back to DigiFlow"
                    <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                </A>
            </div>

            <p class="absolute bottom-8 text-sm opacity-40">"© 2024 DigiFlow Inc."</p>
        </div>
    }
}

//! Workflow assistant panel
//!
//! Sends the prompt to `POST /api/workflow/suggest` and renders the
//! suggestion as a complexity pill, a quoted description and node chips.

use leptos::prelude::*;

use crate::core::workflow::{AssistantState, WorkflowSuggestion};
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::Theme;

const PLACEHOLDER: &str =
    "Example: Every morning, check a spreadsheet and send high-priority leads to Discord.";

/// Ask the server for a suggestion
#[cfg(not(feature = "ssr"))]
pub async fn fetch_suggestion(
    prompt: &str,
) -> Result<WorkflowSuggestion, crate::core::workflow::SuggestError> {
    use crate::core::workflow::{ApiErrorBody, SUGGEST_PATH, SuggestError, SuggestRequest};
    use gloo_net::http::Request;

    let request = SuggestRequest {
        prompt: prompt.to_string(),
    };

    let response = Request::post(SUGGEST_PATH)
        .header("Content-Type", "application/json")
        .json(&request)
        .map_err(|e| SuggestError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SuggestError::Transport(e.to_string()))?;

    if response.ok() {
        return response
            .json::<WorkflowSuggestion>()
            .await
            .map_err(|e| SuggestError::Unparsable(e.to_string()));
    }

    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => Err(SuggestError::from_api(status, &body.error)),
        Err(_) => Err(SuggestError::Upstream {
            status,
            message: response.status_text(),
        }),
    }
}

/// Heading plus the assistant panel
#[component]
pub fn AssistantSection(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <section class="py-24 px-6 max-w-7xl mx-auto">
            <div class="text-center mb-16 reveal">
                <h2 class="text-4xl md:text-5xl font-bold mb-4 tracking-tight">"Stuck on a workflow?"</h2>
                <p class="text-xl opacity-70">"Ask our AI Assistant to help you design your next n8n automation."</p>
            </div>
            <WorkflowAssistant theme=theme />
        </section>
    }
}

#[component]
pub fn WorkflowAssistant(theme: Signal<Theme>) -> impl IntoView {
    let prompt = RwSignal::new(String::new());
    let state = RwSignal::new(AssistantState::new());

    let submit = move || {
        let Some(request) = state.try_update(|s| s.begin(&prompt.get_untracked())).flatten() else {
            return;
        };

        #[cfg(not(feature = "ssr"))]
        leptos::task::spawn_local(async move {
            let outcome = fetch_suggestion(&request).await;
            if let Err(e) = &outcome {
                leptos::logging::error!("AI Error: {}", e);
            }
            state.try_update(|s| s.finish(outcome));
        });

        #[cfg(feature = "ssr")]
        let _ = request;
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <div class=move || {
            format!(
                "p-8 rounded-[2rem] border max-w-4xl mx-auto shadow-2xl transition-all {}",
                theme.get().pick("bg-n8n-surface border-white/10", "bg-white border-slate-200"),
            )
        }>
            <div class="flex items-center gap-3 mb-8">
                <div class="w-10 h-10 rounded-full bg-n8n-pink flex items-center justify-center text-white shadow-lg shadow-n8n-pink/30">
                    <Icon name=icons::SPARKLES />
                </div>
                <div>
                    <h3 class="text-xl font-bold tracking-tight text-n8n-pink">"Workflow Architect"</h3>
                    <p class="text-sm opacity-60">"AI assistant for your n8n workflows"</p>
                </div>
            </div>

            <div class="relative mb-6">
                <textarea
                    prop:value=move || prompt.get()
                    on:input=move |ev| prompt.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    placeholder=PLACEHOLDER
                    aria-label="Describe your workflow"
                    class=move || {
                        format!(
                            "w-full h-32 p-6 rounded-2xl resize-none outline-none border transition-all focus:border-n8n-pink focus:ring-1 focus:ring-n8n-pink/50 {}",
                            theme.get().pick("bg-n8n-dark border-white/10", "bg-slate-50 border-slate-200"),
                        )
                    }
                ></textarea>
                <button
                    on:click=move |_| submit()
                    disabled=move || !state.with(|s| s.can_submit(&prompt.get()))
                    aria-label="Suggest a workflow"
                    class="absolute bottom-4 right-4 bg-n8n-pink hover:brightness-110 disabled:opacity-50 disabled:cursor-not-allowed text-white p-3 rounded-xl transition-all shadow-lg"
                >
                    {move || {
                        if state.with(AssistantState::is_loading) {
                            view! { <Icon name=icons::LOADER class="w-6 h-6 animate-spin" /> }
                        } else {
                            view! { <Icon name=icons::SEND /> }
                        }
                    }}
                </button>
            </div>

            {move || {
                state
                    .with(|s| s.notice())
                    .map(|notice| {
                        view! {
                            <p role="status" class="flex items-center gap-2 text-sm text-n8n-pink/90">
                                <Icon name=icons::ALERT_CIRCLE class="w-4 h-4" />
                                {notice}
                            </p>
                        }
                    })
            }}

            {move || {
                state
                    .with(|s| s.result().cloned())
                    .map(|suggestion| view! { <SuggestionPanel suggestion=suggestion theme=theme /> })
            }}
        </div>
    }
}

#[component]
fn SuggestionPanel(suggestion: WorkflowSuggestion, theme: Signal<Theme>) -> impl IntoView {
    let WorkflowSuggestion {
        nodes,
        description,
        complexity,
    } = suggestion;

    view! {
        <div class=move || {
            format!(
                "mt-8 p-6 rounded-2xl border suggestion-enter {}",
                theme.get().pick("bg-n8n-dark border-white/10", "bg-n8n-pink/5 border-n8n-pink/20"),
            )
        }>
            <div class="flex items-center justify-between mb-4">
                <span class="text-[10px] font-bold uppercase tracking-widest text-n8n-pink px-3 py-1 bg-n8n-pink/10 rounded-full">
                    {complexity.as_str()}
                </span>
            </div>
            <p class="text-lg font-medium mb-6 leading-relaxed italic opacity-90">
                {format!("\"{description}\"")}
            </p>

            <div class="flex flex-wrap gap-3">
                {nodes
                    .into_iter()
                    .enumerate()
                    .map(|(index, node)| {
                        view! {
                            <div data-node-index=index class=move || {
                                format!(
                                    "px-4 py-2 rounded-lg text-sm font-semibold flex items-center gap-2 border transition-colors hover:border-n8n-pink/50 {}",
                                    theme.get().pick("bg-n8n-surface border-white/10", "bg-white border-slate-200"),
                                )
                            }>
                                <Icon name=icons::PLAY_CIRCLE class="w-3.5 h-3.5 text-n8n-pink" />
                                {node}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::workflow::Complexity;

    #[test]
    fn test_suggestion_renders_chips_in_order() {
        let owner = Owner::new();
        owner.set();

        let suggestion = WorkflowSuggestion {
            nodes: vec!["Webhook".into(), "Filter".into(), "Discord".into()],
            description: "Posts hot leads to Discord.".into(),
            complexity: Complexity::Intermediate,
        };
        let theme = Signal::stored(Theme::Dark);
        let html = view! { <SuggestionPanel suggestion=suggestion theme=theme /> }.to_html();

        assert_eq!(html.matches("data-node-index").count(), 3);
        assert!(html.contains("Intermediate"));
        let webhook = html.find("Webhook").unwrap();
        let filter = html.find("Filter").unwrap();
        let discord = html.rfind("Discord").unwrap();
        assert!(webhook < filter && filter < discord);
    }
}

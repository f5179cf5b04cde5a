//! Pricing cards with the monthly/yearly toggle

use leptos::prelude::*;

use crate::core::content::{BillingCycle, PLANS, Plan, YEARLY_DISCOUNT_PERCENT};
use crate::core::motion::SurfaceClass;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::TiltCard;
use crate::ui::theme::Theme;

fn card_class(plan: &Plan, theme: Theme) -> String {
    let tone = match (plan.recommended, theme) {
        (true, Theme::Dark) => {
            "border-n8n-pink ring-4 ring-n8n-pink/10 z-10 bg-n8n-surface shadow-[0_20px_50px_rgba(234,75,113,0.15)] text-white"
        }
        (true, Theme::Light) => {
            "border-n8n-pink ring-4 ring-n8n-pink/5 z-10 bg-white shadow-[0_20px_50px_rgba(234,75,113,0.1)] text-slate-900"
        }
        (false, Theme::Dark) => "bg-n8n-surface/50 border-white/10 text-white",
        (false, Theme::Light) => "bg-white border-slate-200 text-slate-900",
    };
    format!(
        "relative h-full p-8 rounded-[2.5rem] border transition-colors duration-300 flex flex-col cursor-default {tone}"
    )
}

fn cta_class(plan: &Plan, theme: Theme) -> &'static str {
    if plan.recommended {
        "bg-n8n-pink hover:brightness-110 text-white shadow-n8n-pink/30"
    } else {
        theme.pick("bg-white/10 hover:bg-white/20", "bg-slate-900 hover:bg-slate-800 text-white")
    }
}

#[component]
pub fn Pricing(theme: Signal<Theme>) -> impl IntoView {
    let cycle = RwSignal::new(BillingCycle::Monthly);
    let label_class = move |active: BillingCycle| {
        if cycle.get() == active {
            "text-sm font-semibold text-n8n-pink"
        } else {
            "text-sm font-semibold opacity-50"
        }
    };

    view! {
        <section id="pricing" class="py-32 px-6 perspective-1000">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-20 reveal">
                    <h2 class="text-4xl md:text-6xl font-extrabold mb-6 tracking-tight">"Simple, Transparent Pricing"</h2>

                    <div class="flex items-center justify-center gap-4 mt-8">
                        <span class=move || label_class(BillingCycle::Monthly)>"Monthly"</span>
                        <button
                            on:click=move |_| cycle.update(|c| *c = c.toggled())
                            role="switch"
                            aria-checked=move || (cycle.get() == BillingCycle::Yearly).to_string()
                            aria-label="Toggle yearly billing"
                            class=move || {
                                format!(
                                    "w-14 h-7 rounded-full p-1 transition-colors {}",
                                    theme.get().pick("bg-white/10", "bg-slate-200"),
                                )
                            }
                        >
                            <div
                                class="w-5 h-5 rounded-full bg-n8n-pink transition-transform"
                                class:translate-x-7=move || cycle.get() == BillingCycle::Yearly
                            ></div>
                        </button>
                        <span class=move || label_class(BillingCycle::Yearly)>
                            {format!("Yearly (Save {YEARLY_DISCOUNT_PERCENT}%)")}
                        </span>
                    </div>
                </div>

                <div class="grid lg:grid-cols-3 gap-8 items-stretch">
                    {PLANS
                        .iter()
                        .map(|plan| view! { <PlanCard plan=*plan cycle=cycle.into() theme=theme /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: Plan, cycle: Signal<BillingCycle>, theme: Signal<Theme>) -> impl IntoView {
    // Scale sits on a wrapper; the card's own transform belongs to the tilt
    let wrapper = if plan.recommended { "reveal h-full scale-105 z-10" } else { "reveal h-full" };

    view! {
        <div class=wrapper>
            <TiltCard surface=SurfaceClass::Pricing class=move || card_class(&plan, theme.get())>
                {plan
                    .recommended
                    .then(|| {
                        view! {
                            <div class="absolute top-0 left-1/2 -translate-x-1/2 z-20 pointer-events-none">
                                <div
                                    data-tilt-layer=""
                                    class="bg-n8n-pink text-white text-[10px] font-black px-5 py-2 rounded-full uppercase tracking-[0.2em] shadow-lg shadow-n8n-pink/30 whitespace-nowrap"
                                >
                                    "Most Popular"
                                </div>
                            </div>
                        }
                    })}

                <div class="mb-8 pointer-events-none">
                    <h3 class="text-2xl font-bold mb-2 tracking-tight" class:text-n8n-pink=plan.recommended>
                        {plan.name}
                    </h3>
                    <div class="flex items-baseline gap-1">
                        <span class="text-4xl font-extrabold">{move || plan.price.label(cycle.get())}</span>
                        {(!plan.price.is_custom())
                            .then(|| view! { <span class="opacity-50 text-lg font-medium">"/mo"</span> })}
                    </div>
                </div>

                <div class="flex-1 space-y-4 mb-10 pointer-events-none">
                    {plan
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="flex items-center gap-3">
                                    <div class=move || {
                                        format!(
                                            "w-5 h-5 rounded-full flex items-center justify-center transition-colors text-n8n-pink {}",
                                            theme.get().pick("bg-n8n-pink/20", "bg-n8n-pink/10"),
                                        )
                                    }>
                                        <Icon name=icons::CHECK class="w-3 h-3" />
                                    </div>
                                    <span class=move || {
                                        format!("text-sm font-medium {}", theme.get().pick("opacity-80", "opacity-70"))
                                    }>{*feature}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <button class=move || {
                    format!(
                        "w-full py-4 rounded-2xl font-bold transition-all shadow-md active:scale-[0.98] {}",
                        cta_class(&plan, theme.get()),
                    )
                }>{plan.cta()}</button>
            </TiltCard>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_card_is_highlighted() {
        let pro = PLANS.iter().find(|p| p.recommended).unwrap();
        assert!(card_class(pro, Theme::Dark).contains("border-n8n-pink"));
        assert!(cta_class(pro, Theme::Light).starts_with("bg-n8n-pink"));

        let starter = &PLANS[0];
        assert!(!card_class(starter, Theme::Dark).contains("ring-4"));
        assert_eq!(cta_class(starter, Theme::Light), "bg-slate-900 hover:bg-slate-800 text-white");
    }
}

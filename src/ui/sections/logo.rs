//! Brand mark

use leptos::prelude::*;

use crate::ui::theme::Theme;

/// Logo image for the current theme
pub fn logo_src(theme: Theme) -> &'static str {
    theme.pick("/logo-dark.svg", "/logo-light.svg")
}

#[component]
pub fn Logo(theme: Signal<Theme>, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("flex items-center {class}")>
            <img src=move || logo_src(theme.get()) alt="DigiFlow" class="h-10 w-auto" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_follows_theme() {
        assert_eq!(logo_src(Theme::Dark), "/logo-dark.svg");
        assert_eq!(logo_src(Theme::Light), "/logo-light.svg");
    }
}

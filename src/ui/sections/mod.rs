//! Landing page sections, top to bottom, plus the page-wide overlays

mod background_lines;
mod context_menu;
mod features;
mod footer;
mod hero;
mod logo;
mod navbar;
mod pricing;
mod template_library;
mod why_self_host;
mod workflow_assistant;

pub use background_lines::BackgroundLines;
pub use context_menu::ContextMenu;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use logo::Logo;
pub use navbar::Navbar;
pub use pricing::Pricing;
pub use template_library::TemplateLibrary;
pub use why_self_host::WhySelfHost;
pub use workflow_assistant::{AssistantSection, WorkflowAssistant};

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::prelude::*;

    use super::*;
    use crate::core::motion::INTERACTIVE_CLASS;
    use crate::ui::theme::Theme;

    /// Opening tags of every registered tilt surface in `html`
    fn surface_tags(html: &str) -> Vec<&str> {
        html.split('<')
            .filter(|tag| tag.contains("data-surface=\""))
            .map(|tag| tag.split('>').next().unwrap_or(tag))
            .collect()
    }

    fn assert_surfaces_are_interactive(html: &str, surface: &str) {
        let tags = surface_tags(html);
        assert!(!tags.is_empty());
        for tag in &tags {
            assert!(tag.contains(&format!("data-surface=\"{surface}\"")), "{tag}");
            assert!(tag.contains(INTERACTIVE_CLASS), "{tag}");
        }
        assert_eq!(html.matches(INTERACTIVE_CLASS).count(), tags.len());
    }

    #[test]
    fn test_every_tilt_surface_matches_hover_selector() {
        let owner = Owner::new();
        owner.set();
        let theme = Signal::stored(Theme::Dark);

        let benefits = view! { <WhySelfHost theme=theme /> }.to_html();
        assert_eq!(surface_tags(&benefits).len(), 4);
        assert_surfaces_are_interactive(&benefits, "benefit");

        let features = view! { <Features theme=theme /> }.to_html();
        assert_surfaces_are_interactive(&features, "feature");

        let pricing = view! { <Pricing theme=theme /> }.to_html();
        assert_surfaces_are_interactive(&pricing, "pricing");

        let templates = view! { <TemplateLibrary theme=theme /> }.to_html();
        assert_surfaces_are_interactive(&templates, "template");
    }
}

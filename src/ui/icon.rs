use leptos::prelude::*;

/// Stroke icon drawn inline so it inherits `currentColor`
#[component]
pub fn Icon(
    /// Icon name, see [`icons`]
    name: &'static str,
    /// CSS classes for size and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=icon_body(name).unwrap_or(FALLBACK)
        ></svg>
    }
}

/// Drawn for names without a body: an empty rounded square
const FALLBACK: &str = r#"<rect width="18" height="18" x="3" y="3" rx="2"/>"#;

/// Inner SVG markup for a 24x24 stroke icon
pub fn icon_body(name: &str) -> Option<&'static str> {
    use icons::*;

    let body = match name {
        ACTIVITY => r#"<path d="M22 12h-2.48a2 2 0 0 0-1.93 1.46l-2.35 8.36a.25.25 0 0 1-.48 0L9.24 2.18a.25.25 0 0 0-.48 0l-2.35 8.36A2 2 0 0 1 4.49 12H2"/>"#,
        ALERT_CIRCLE => r#"<circle cx="12" cy="12" r="10"/><line x1="12" x2="12" y1="8" y2="12"/><line x1="12" x2="12.01" y1="16" y2="16"/>"#,
        ARROW_RIGHT => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
        ARROW_UP_RIGHT => r#"<path d="M7 7h10v10"/><path d="M7 17 17 7"/>"#,
        BAR_CHART => r#"<path d="M3 3v18h18"/><path d="M18 17V9"/><path d="M13 17V5"/><path d="M8 17v-3"/>"#,
        BOT => r#"<path d="M12 8V4H8"/><rect width="16" height="12" x="4" y="8" rx="2"/><path d="M2 14h2"/><path d="M20 14h2"/><path d="M15 13v2"/><path d="M9 13v2"/>"#,
        BOX => r#"<path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z"/><path d="m3.3 7 8.7 5 8.7-5"/><path d="M12 22V12"/>"#,
        CHECK => r#"<path d="M20 6 9 17l-5-5"/>"#,
        CHEVRON_RIGHT => r#"<path d="m9 18 6-6-6-6"/>"#,
        CLOUD => r#"<path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"/>"#,
        CPU => r#"<rect width="16" height="16" x="4" y="4" rx="2"/><rect width="6" height="6" x="9" y="9" rx="1"/><path d="M15 2v2"/><path d="M15 20v2"/><path d="M2 15h2"/><path d="M2 9h2"/><path d="M20 15h2"/><path d="M20 9h2"/><path d="M9 2v2"/><path d="M9 20v2"/>"#,
        CREDIT_CARD => r#"<rect width="20" height="14" x="2" y="5" rx="2"/><line x1="2" x2="22" y1="10" y2="10"/>"#,
        DATABASE => r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5V19A9 3 0 0 0 21 19V5"/><path d="M3 12A9 3 0 0 0 21 12"/>"#,
        FILE_JSON => r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M10 12a1 1 0 0 0-1 1v1a1 1 0 0 1-1 1 1 1 0 0 1 1 1v1a1 1 0 0 0 1 1"/><path d="M14 18a1 1 0 0 0 1-1v-1a1 1 0 0 1 1-1 1 1 0 0 1-1-1v-1a1 1 0 0 0-1-1"/>"#,
        GITHUB => r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#,
        GLOBE => r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#,
        HELP_CIRCLE => r#"<circle cx="12" cy="12" r="10"/><path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/><path d="M12 17h.01"/>"#,
        INFINITY => r#"<path d="M12 12c-2-2.67-4-4-6-4a4 4 0 1 0 0 8c2 0 4-1.33 6-4Zm0 0c2 2.67 4 4 6 4a4 4 0 0 0 0-8c-2 0-4 1.33-6 4Z"/>"#,
        KEY => r#"<circle cx="7.5" cy="15.5" r="5.5"/><path d="m21 2-9.6 9.6"/><path d="m15.5 7.5 3 3L22 7l-3-3"/>"#,
        LAYOUT_TEMPLATE => r#"<rect width="18" height="7" x="3" y="3" rx="1"/><rect width="9" height="7" x="3" y="14" rx="1"/><rect width="5" height="7" x="16" y="14" rx="1"/>"#,
        LINKEDIN => r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
        LOADER => r#"<path d="M21 12a9 9 0 1 1-6.219-8.56"/>"#,
        LOCK => r#"<rect width="18" height="11" x="3" y="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#,
        MENU => r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#,
        MOON => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
        PIGGY_BANK => r#"<path d="M19 5c-1.5 0-2.8 1.4-3 2-3.5-1.5-11-.3-11 5 0 1.8 0 3 2 4.5V20h4v-2h3v2h4v-4c1-.5 1.7-1 2-2h2v-4h-2c0-1-.5-1.5-1-2V5z"/><path d="M2 9v1c0 1.1.9 2 2 2h1"/><path d="M16 11h.01"/>"#,
        PLAY => r#"<polygon points="6 3 20 12 6 21 6 3"/>"#,
        PLAY_CIRCLE => r#"<circle cx="12" cy="12" r="10"/><polygon points="10 8 16 12 10 16 10 8"/>"#,
        REFRESH_CCW => r#"<path d="M21 12a9 9 0 0 0-9-9 9.75 9.75 0 0 0-6.74 2.74L3 8"/><path d="M3 3v5h5"/><path d="M3 12a9 9 0 0 0 9 9 9.75 9.75 0 0 0 6.74-2.74L21 16"/><path d="M16 16h5v5"/>"#,
        SEND => r#"<path d="m22 2-7 20-4-9-9-4Z"/><path d="M22 2 11 13"/>"#,
        SERVER => r#"<rect width="20" height="8" x="2" y="2" rx="2" ry="2"/><rect width="20" height="8" x="2" y="14" rx="2" ry="2"/><line x1="6" x2="6.01" y1="6" y2="6"/><line x1="6" x2="6.01" y1="18" y2="18"/>"#,
        SHIELD => r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#,
        SHIELD_CHECK => r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/><path d="m9 12 2 2 4-4"/>"#,
        SPARKLES => r#"<path d="M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z"/><path d="M20 3v4"/><path d="M22 5h-4"/><path d="M4 17v2"/><path d="M5 18H3"/>"#,
        STAR => r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#,
        SUN => r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#,
        TERMINAL => r#"<polyline points="4 17 10 11 4 5"/><line x1="12" x2="20" y1="19" y2="19"/>"#,
        TRENDING_UP => r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/><polyline points="16 7 22 7 22 13"/>"#,
        TWITTER => r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#,
        USER_PLUS => r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><line x1="19" x2="19" y1="8" y2="14"/><line x1="22" x2="16" y1="11" y2="11"/>"#,
        X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        ZAP => r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#,
        _ => return None,
    };
    Some(body)
}

/// Icon names used across the page
pub mod icons {
    pub const ACTIVITY: &str = "activity";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ARROW_UP_RIGHT: &str = "arrow-up-right";
    pub const BAR_CHART: &str = "bar-chart";
    pub const BOT: &str = "bot";
    pub const BOX: &str = "box";
    pub const CHECK: &str = "check";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CLOUD: &str = "cloud";
    pub const CPU: &str = "cpu";
    pub const CREDIT_CARD: &str = "credit-card";
    pub const DATABASE: &str = "database";
    pub const FILE_JSON: &str = "file-json";
    pub const GITHUB: &str = "github";
    pub const GLOBE: &str = "globe";
    pub const HELP_CIRCLE: &str = "help-circle";
    pub const INFINITY: &str = "infinity";
    pub const KEY: &str = "key";
    pub const LAYOUT_TEMPLATE: &str = "layout-template";
    pub const LINKEDIN: &str = "linkedin";
    pub const LOADER: &str = "loader";
    pub const LOCK: &str = "lock";
    pub const MENU: &str = "menu";
    pub const MOON: &str = "moon";
    pub const PIGGY_BANK: &str = "piggy-bank";
    pub const PLAY: &str = "play";
    pub const PLAY_CIRCLE: &str = "play-circle";
    pub const REFRESH_CCW: &str = "refresh-ccw";
    pub const SEND: &str = "send";
    pub const SERVER: &str = "server";
    pub const SHIELD: &str = "shield";
    pub const SHIELD_CHECK: &str = "shield-check";
    pub const SPARKLES: &str = "sparkles";
    pub const STAR: &str = "star";
    pub const SUN: &str = "sun";
    pub const TERMINAL: &str = "terminal";
    pub const TRENDING_UP: &str = "trending-up";
    pub const TWITTER: &str = "twitter";
    pub const USER_PLUS: &str = "user-plus";
    pub const X: &str = "x";
    pub const ZAP: &str = "zap";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{BENEFITS, FEATURES, HIGHLIGHTS, SOCIALS, TEMPLATES};
    use crate::core::menu::{MENU_ENTRIES, MenuEntry};

    #[test]
    fn test_every_content_icon_has_a_body() {
        let names = FEATURES
            .iter()
            .chain(BENEFITS.iter())
            .chain(HIGHLIGHTS.iter())
            .map(|t| t.icon)
            .chain(TEMPLATES.iter().map(|t| t.icon))
            .chain(SOCIALS.iter().map(|s| s.label))
            .chain(MENU_ENTRIES.iter().filter_map(|e| match e {
                MenuEntry::Item(item) => Some(item.icon),
                MenuEntry::Divider => None,
            }));

        for name in names {
            assert!(icon_body(name).is_some(), "missing icon body for {name}");
        }
    }

    #[test]
    fn test_unknown_icon() {
        assert_eq!(icon_body("does-not-exist"), None);
        assert!(FALLBACK.starts_with("<rect"));
    }
}

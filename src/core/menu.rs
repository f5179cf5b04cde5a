//! Custom right-click menu model

pub const MENU_WIDTH: f64 = 220.0;
pub const MENU_HEIGHT: f64 = 280.0;

/// Seconds between consecutive item slide-ins
pub const ITEM_STAGGER: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Item(MenuItem),
    Divider,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
    /// Highlighted call to action
    pub primary: bool,
}

const fn item(label: &'static str, icon: &'static str, href: &'static str, primary: bool) -> MenuEntry {
    MenuEntry::Item(MenuItem {
        label,
        icon,
        href,
        primary,
    })
}

pub const MENU_ENTRIES: [MenuEntry; 6] = [
    item("Features", "box", "#features", false),
    item("Pricing", "credit-card", "#pricing", false),
    item("Support", "help-circle", "#support", false),
    MenuEntry::Divider,
    item("Request Demo", "play-circle", "#", true),
    item("Sign Up", "user-plus", "#", true),
];

/// Top-left corner for a menu opened at `(x, y)` in a viewport of the given
/// size. The menu flips to the left of / above the pointer when it would
/// overflow, and never leaves the viewport's top-left edge.
pub fn clamp_menu_position(x: f64, y: f64, viewport_width: f64, viewport_height: f64) -> (f64, f64) {
    let mut left = x;
    let mut top = y;
    if left + MENU_WIDTH > viewport_width {
        left -= MENU_WIDTH;
    }
    if top + MENU_HEIGHT > viewport_height {
        top -= MENU_HEIGHT;
    }
    (left.max(0.0), top.max(0.0))
}

/// Animation delay of the `n`-th clickable item (dividers are skipped)
pub fn item_delay(n: usize) -> f64 {
    ITEM_STAGGER * n as f64
}

/// Open/closed state of the menu
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MenuState {
    #[default]
    Closed,
    Open { left: f64, top: f64 },
}

impl MenuState {
    pub fn open_at(x: f64, y: f64, viewport_width: f64, viewport_height: f64) -> Self {
        let (left, top) = clamp_menu_position(x, y, viewport_width, viewport_height);
        MenuState::Open { left, top }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_fits_without_shift() {
        assert_eq!(clamp_menu_position(100.0, 100.0, 1280.0, 800.0), (100.0, 100.0));
    }

    #[test]
    fn test_menu_flips_near_edges() {
        assert_eq!(clamp_menu_position(1200.0, 100.0, 1280.0, 800.0), (980.0, 100.0));
        assert_eq!(clamp_menu_position(100.0, 700.0, 1280.0, 800.0), (100.0, 420.0));
        assert_eq!(clamp_menu_position(1200.0, 700.0, 1280.0, 800.0), (980.0, 420.0));
    }

    #[test]
    fn test_menu_stays_on_screen_in_tiny_viewport() {
        assert_eq!(clamp_menu_position(100.0, 50.0, 200.0, 200.0), (0.0, 0.0));
    }

    #[test]
    fn test_entries() {
        let labels: Vec<&str> = MENU_ENTRIES
            .iter()
            .filter_map(|e| match e {
                MenuEntry::Item(i) => Some(i.label),
                MenuEntry::Divider => None,
            })
            .collect();
        assert_eq!(
            labels,
            ["Features", "Pricing", "Support", "Request Demo", "Sign Up"]
        );
        assert_eq!(MENU_ENTRIES[3], MenuEntry::Divider);
        assert!(matches!(MENU_ENTRIES[5], MenuEntry::Item(MenuItem { primary: true, .. })));
    }

    #[test]
    fn test_state() {
        assert!(!MenuState::default().is_open());
        let s = MenuState::open_at(1200.0, 10.0, 1280.0, 800.0);
        assert_eq!(s, MenuState::Open { left: 980.0, top: 10.0 });
    }
}

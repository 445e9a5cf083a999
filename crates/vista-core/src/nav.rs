//! Header navigation: dropdowns, the mobile menu and their link tables.

use serde::Serialize;
use tracing::debug;

use crate::section::SectionKey;

/// Center header item that owns a dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropdownKey {
    Services,
    Industries,
    Insights,
    About,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section: SectionKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub key: DropdownKey,
    pub label: &'static str,
    pub section: SectionKey,
    pub children: &'static [NavLink],
}

const fn link(label: &'static str, section: SectionKey) -> NavLink {
    NavLink { label, section }
}

pub static CENTER_NAV: [NavItem; 4] = [
    NavItem {
        key: DropdownKey::Services,
        label: "Services",
        section: SectionKey::Services,
        children: &[
            link("Web App Development", SectionKey::Services),
            link("Mobile App Development", SectionKey::Services),
            link("UI/UX & Product Design", SectionKey::Services),
            link("Cloud & Backend Engineering", SectionKey::Services),
        ],
    },
    NavItem {
        key: DropdownKey::Industries,
        label: "Industries",
        section: SectionKey::Work,
        children: &[
            link("Fintech & Banking", SectionKey::Work),
            link("Healthcare & Telehealth", SectionKey::Work),
            link("Retail & E-Commerce", SectionKey::Work),
            link("Startups & SaaS", SectionKey::Work),
        ],
    },
    NavItem {
        key: DropdownKey::Insights,
        label: "Insights",
        section: SectionKey::Process,
        children: &[
            link("Delivery Playbook", SectionKey::Process),
            link("Design Systems", SectionKey::Services),
            link("Scalable Architectures", SectionKey::Process),
        ],
    },
    NavItem {
        key: DropdownKey::About,
        label: "About",
        section: SectionKey::Testimonials,
        children: &[
            link("Our Team", SectionKey::Testimonials),
            link("How We Work", SectionKey::Process),
            link("Engagement Models", SectionKey::Contact),
        ],
    },
];

pub static MOBILE_NAV: [NavLink; 5] = [
    link("Services", SectionKey::Services),
    link("Process", SectionKey::Process),
    link("Work", SectionKey::Work),
    link("Clients", SectionKey::Testimonials),
    link("Contact", SectionKey::Contact),
];

/// Look up a center nav item by its dropdown key
pub fn nav_item(key: DropdownKey) -> &'static NavItem {
    CENTER_NAV
        .iter()
        .find(|item| item.key == key)
        .unwrap_or(&CENTER_NAV[0])
}

/// Transient header menu state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavMenuState {
    pub mobile_open: bool,
    pub open_dropdown: Option<DropdownKey>,
}

impl NavMenuState {
    /// Open `key`, implicitly closing whatever was open
    pub fn set_dropdown(&mut self, key: DropdownKey) {
        self.open_dropdown = Some(key);
    }

    /// Close `key` only if it is still the open one
    ///
    /// A late close for an item the pointer already left must not clobber a
    /// dropdown opened since. Returns true when something closed.
    pub fn clear_dropdown(&mut self, key: DropdownKey) -> bool {
        if self.open_dropdown == Some(key) {
            self.open_dropdown = None;
            true
        } else {
            debug!(?key, open = ?self.open_dropdown, "stale dropdown close ignored");
            false
        }
    }

    pub fn close_dropdowns(&mut self) {
        self.open_dropdown = None;
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_open = !self.mobile_open;
        self.mobile_open
    }

    /// A destination was picked: every menu closes
    pub fn destination_selected(&mut self) {
        self.mobile_open = false;
        self.open_dropdown = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_dropdown_replaces_first() {
        let mut nav = NavMenuState::default();
        nav.set_dropdown(DropdownKey::Services);
        nav.set_dropdown(DropdownKey::About);
        assert_eq!(nav.open_dropdown, Some(DropdownKey::About));
    }

    #[test]
    fn test_stale_close_is_ignored() {
        let mut nav = NavMenuState::default();
        nav.set_dropdown(DropdownKey::Services);
        nav.set_dropdown(DropdownKey::Industries);
        assert!(!nav.clear_dropdown(DropdownKey::Services));
        assert_eq!(nav.open_dropdown, Some(DropdownKey::Industries));

        assert!(nav.clear_dropdown(DropdownKey::Industries));
        assert_eq!(nav.open_dropdown, None);
    }

    #[test]
    fn test_mobile_menu_toggle_and_destination() {
        let mut nav = NavMenuState::default();
        assert!(nav.toggle_mobile_menu());
        nav.set_dropdown(DropdownKey::Insights);
        nav.destination_selected();
        assert_eq!(nav, NavMenuState::default());
        assert!(nav.toggle_mobile_menu());
        assert!(!nav.toggle_mobile_menu());
    }

    #[test]
    fn test_nav_tables() {
        assert_eq!(nav_item(DropdownKey::Industries).section, SectionKey::Work);
        assert_eq!(nav_item(DropdownKey::About).children.len(), 3);
        assert_eq!(MOBILE_NAV.last().map(|l| l.section), Some(SectionKey::Contact));
    }
}

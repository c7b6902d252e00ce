//! Navigation state: active page section and the mobile menu.
//!
//! DESIGN
//! ======
//! The page is a single scroll with anchored sections. The nav bar highlights
//! whichever section contains a probe line just under the fixed header, and
//! the mobile menu collapses on link clicks or when the viewport widens past
//! the desktop breakpoint.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Viewport width at which the desktop nav replaces the mobile menu.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Distance below the top of the viewport used to pick the active section.
pub const SCROLL_PROBE_OFFSET_PX: f64 = 100.0;

/// Anchored sections of the page, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Inicio,
    SobreMi,
    Habilidades,
    Proyectos,
    Contacto,
}

impl Section {
    pub const ALL: [Section; 5] =
        [Section::Inicio, Section::SobreMi, Section::Habilidades, Section::Proyectos, Section::Contacto];

    /// DOM id, also used as the `#fragment` of nav links.
    pub fn id(self) -> &'static str {
        match self {
            Self::Inicio => "inicio",
            Self::SobreMi => "sobre-mi",
            Self::Habilidades => "habilidades",
            Self::Proyectos => "proyectos",
            Self::Contacto => "contacto",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Inicio => "Inicio",
            Self::SobreMi => "Sobre Mí",
            Self::Habilidades => "Habilidades",
            Self::Proyectos => "Proyectos",
            Self::Contacto => "Contacto",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Vertical extent of a rendered section, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionLayout {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Section,
    pub menu_open: bool,
}

impl NavState {
    /// A nav link was followed.
    pub fn select(&mut self, section: Section) {
        self.active = section;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the mobile menu once the viewport reaches desktop width.
    pub fn on_resize(&mut self, width_px: f64) {
        if width_px >= MOBILE_BREAKPOINT_PX {
            self.menu_open = false;
        }
    }

    /// Update the active section from the scroll position. Returns `true` on change.
    pub fn on_scroll(&mut self, scroll_y: f64, layouts: &[SectionLayout]) -> bool {
        match section_at(scroll_y, layouts) {
            Some(section) if section != self.active => {
                self.active = section;
                true
            }
            _ => false,
        }
    }

    /// Class list for a nav link; `mobile` selects the stacked menu styling.
    pub fn link_class(&self, section: Section, mobile: bool) -> &'static str {
        match (mobile, section == self.active) {
            (false, false) => "nav-link",
            (false, true) => "nav-link nav-link--active",
            (true, false) => "nav-link nav-link--mobile",
            (true, true) => "nav-link nav-link--mobile nav-link--active",
        }
    }
}

/// The section whose extent contains `scroll_y + SCROLL_PROBE_OFFSET_PX`.
///
/// Later layouts win when extents overlap.
pub fn section_at(scroll_y: f64, layouts: &[SectionLayout]) -> Option<Section> {
    let probe = scroll_y + SCROLL_PROBE_OFFSET_PX;
    layouts
        .iter()
        .rev()
        .find(|l| probe >= l.top && probe < l.top + l.height)
        .map(|l| l.section)
}

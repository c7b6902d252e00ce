//! Browser viewport geometry for scroll-driven navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The nav bar reads section offsets on scroll events to highlight the section
//! in view. These helpers isolate the web-sys glue; outside the browser they
//! report an empty page.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::state::nav::SectionLayout;

/// Vertical scroll offset of the window in CSS pixels.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Window inner width in CSS pixels, if known.
pub fn inner_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.inner_width().ok()).and_then(|v| v.as_f64())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Offsets of every rendered page section, in document order.
pub fn section_layouts() -> Vec<SectionLayout> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        use crate::state::nav::Section;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        Section::ALL
            .into_iter()
            .filter_map(|section| {
                let el = document.get_element_by_id(section.id())?.dyn_into::<web_sys::HtmlElement>().ok()?;
                Some(SectionLayout {
                    section,
                    top: f64::from(el.offset_top()),
                    height: f64::from(el.offset_height()),
                })
            })
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

//! Page Sections
//!
//! Anchors the header and hero scroll to.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Inicio,
    Productos,
    Nosotros,
}

impl Section {
    /// Navigation order
    pub const ALL: [Section; 3] = [Section::Inicio, Section::Productos, Section::Nosotros];

    /// Element id on the page
    pub fn id(&self) -> &'static str {
        match self {
            Section::Inicio => "inicio",
            Section::Productos => "productos",
            Section::Nosotros => "Nosotros",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Inicio => "Inicio",
            Section::Productos => "Productos",
            Section::Nosotros => "Nosotros",
        }
    }
}

/// Smooth-scroll to `section`. Returns false when its element is missing,
/// in which case nothing moved.
pub fn scroll_to_section(section: Section) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    if section == Section::Inicio {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
        return true;
    }

    let element = window
        .document()
        .and_then(|doc| doc.get_element_by_id(section.id()));
    match element {
        Some(element) => {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&opts);
            log::debug!("[NAV] Scrolled to #{}", section.id());
            true
        }
        None => {
            log::debug!("[NAV] No element #{}", section.id());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_are_unique() {
        let mut ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn test_labels_capitalize_ids() {
        for section in Section::ALL {
            let id = section.id();
            let expected = format!("{}{}", id[..1].to_uppercase(), &id[1..]);
            assert_eq!(section.label(), expected);
        }
    }
}

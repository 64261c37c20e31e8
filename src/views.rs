//! The registry of page sections and the fragment/history plumbing behind
//! in-app navigation. Sections stay mounted the whole time; which one is
//! visible is a matter of CSS state classes driven by the app shell.

use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::{classes, Classes};

/// Every navigable section of the site. `Landing` is the default view and is
/// addressed by the empty URL fragment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Landing,
    Services,
    Portfolio,
    Contact,
    ProjectTrattoria,
    ProjectAtelier,
    ProjectOfficina,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Landing,
        View::Services,
        View::Portfolio,
        View::Contact,
        View::ProjectTrattoria,
        View::ProjectAtelier,
        View::ProjectOfficina,
    ];

    /// The section element id, also used as the URL fragment.
    pub fn id(self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Services => "services",
            View::Portfolio => "portfolio",
            View::Contact => "contact",
            View::ProjectTrattoria => "project-trattoria",
            View::ProjectAtelier => "project-atelier",
            View::ProjectOfficina => "project-officina",
        }
    }

    /// Resolves a URL fragment (leading `#` already stripped). The empty
    /// fragment is the landing view; an id that names no section is `None`
    /// so callers can ignore it.
    pub fn from_fragment(fragment: &str) -> Option<View> {
        if fragment.is_empty() {
            return Some(View::Landing);
        }
        View::ALL.iter().copied().find(|view| view.id() == fragment)
    }
}

/// The current location fragment without the leading `#`.
pub fn current_fragment() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| hash.trim_start_matches('#').to_string())
        .unwrap_or_default()
}

/// Pushes the fragment for `view` onto the browser history so back/forward
/// replay navigation. The landing view pushes the bare pathname, clearing
/// any fragment.
pub fn push_fragment(view: View) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let url = if view == View::Landing {
        window.location().pathname().unwrap_or_else(|_| "/".to_string())
    } else {
        format!("#{}", view.id())
    };
    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&url));
}

/// Smooth-scrolls the window back to the top, as every view change does.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// The state classes shared by every page section. `page-exit` only ever
/// accompanies the active section while it animates out.
pub fn section_class(active: bool, exiting: bool) -> Classes {
    classes!(
        "page-section",
        if active { "active" } else { "" },
        if exiting { "page-exit" } else { "" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragment_is_landing() {
        assert_eq!(View::from_fragment(""), Some(View::Landing));
    }

    #[test]
    fn every_view_resolves_from_its_own_id() {
        for view in View::ALL {
            assert_eq!(View::from_fragment(view.id()), Some(view));
        }
    }

    #[test]
    fn unknown_fragment_resolves_to_none() {
        assert_eq!(View::from_fragment("pricing"), None);
        assert_eq!(View::from_fragment("project-unknown"), None);
    }

    #[test]
    fn section_ids_are_unique() {
        for (i, a) in View::ALL.iter().enumerate() {
            for b in View::ALL.iter().skip(i + 1) {
                assert_ne!(a.id(), b.id());
            }
        }
    }
}

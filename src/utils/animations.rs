//! Scroll-triggered reveal animations. Elements tagged `animate-on-scroll`
//! pick up an `animated` class the first time they intersect the viewport
//! and are dropped from observation right away, so the transition runs once
//! per arming. Navigation re-arms the elements of the freshly shown section.

use std::cell::RefCell;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Element, IdleRequestOptions, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

const TARGET_SELECTOR: &str = ".animate-on-scroll";
const ANIMATED_CLASS: &str = "animated";
/// Fire when 10% of the element is visible, pulled 50px in from the bottom
/// edge so things start animating just before they would scroll into view.
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Initial arming is deferred off the critical render path.
const IDLE_DEADLINE_MS: u32 = 2000;
const TIMER_FALLBACK_MS: u32 = 100;

thread_local! {
    static OBSERVER: RefCell<Option<RevealObserver>> = RefCell::new(None);
}

struct RevealObserver {
    observer: IntersectionObserver,
    // Keeps the JS-side callback alive for as long as the observer is.
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn new() -> Option<Self> {
        let callback = Closure::wrap(Box::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1(ANIMATED_CLASS);
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

fn with_observer(f: impl FnOnce(&IntersectionObserver)) {
    OBSERVER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = RevealObserver::new();
        }
        if let Some(reveal) = slot.as_ref() {
            f(&reveal.observer);
        }
    });
}

/// Schedules the initial document-wide arming: on an idle slot when the
/// browser offers `requestIdleCallback` (with a 2s ceiling), otherwise on a
/// short timer.
pub fn init_deferred() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let supports_idle = js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("requestIdleCallback"))
        .unwrap_or(false);
    if supports_idle {
        let callback = Closure::once_into_js(arm_document);
        let options = IdleRequestOptions::new();
        options.set_timeout(IDLE_DEADLINE_MS);
        let _ = window.request_idle_callback_with_options(callback.unchecked_ref(), &options);
    } else {
        gloo_timers::callback::Timeout::new(TIMER_FALLBACK_MS, arm_document).forget();
    }
}

/// Observes every reveal target currently in the document. Targets inside
/// hidden sections never intersect, so they simply stay pending until their
/// section is shown.
fn arm_document() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(targets) = document.query_selector_all(TARGET_SELECTOR) else {
        return;
    };
    log::debug!("arming {} reveal targets", targets.length());
    with_observer(|observer| {
        for i in 0..targets.length() {
            if let Some(el) = targets.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                observer.observe(&el);
            }
        }
    });
}

/// Clears the `animated` marks inside the section with `section_id` and
/// observes its targets again, so entry animations replay when the section
/// is shown a second time. Unknown section ids are a no-op.
pub fn rearm_section(section_id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(section) = document.get_element_by_id(section_id) else {
        return;
    };
    let Ok(targets) = section.query_selector_all(TARGET_SELECTOR) else {
        return;
    };
    with_observer(|observer| {
        for i in 0..targets.length() {
            if let Some(el) = targets.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                let _ = el.class_list().remove_1(ANIMATED_CLASS);
                observer.observe(&el);
            }
        }
    });
}

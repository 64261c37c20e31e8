//! Landing view: full-height hero with a parallax scroll effect, the
//! "what we do" cards, and the newsletter strip. The scroll listener is
//! passive and throttled, with the actual style writes deferred to an
//! animation frame.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{
    AddEventListenerOptions, HtmlElement, KeyboardEvent, MouseEvent, ScrollBehavior,
    ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::components::newsletter::Newsletter;
use crate::utils::throttle::Throttle;
use crate::views::View;

const PARALLAX_THROTTLE_MS: f64 = 16.0;
const PARALLAX_RATE: f64 = 0.5;
const OPACITY_FADE_RATE: f64 = 0.002;
const INDICATOR_HIDE_AT_PX: f64 = 100.0;

fn hero_offset_px(scrolled: f64) -> f64 {
    scrolled * PARALLAX_RATE
}

fn hero_opacity(scrolled: f64) -> f64 {
    1.0 - scrolled * OPACITY_FADE_RATE
}

fn indicator_hidden(scrolled: f64) -> bool {
    scrolled > INDICATOR_HIDE_AT_PX
}

/// One animation-frame's worth of parallax. Reads the scroll position and
/// writes hero transform/opacity plus the indicator visibility. The hero is
/// left alone once the viewport has scrolled past it.
fn apply_parallax() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let scrolled = window.page_y_offset().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);

    if let Some(hero) = document
        .query_selector(".hero-content")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        if scrolled < viewport {
            let style = hero.style();
            let _ = style.set_property(
                "transform",
                &format!("translateY({}px)", hero_offset_px(scrolled)),
            );
            let _ = style.set_property("opacity", &hero_opacity(scrolled).to_string());
        }
    }

    if let Some(indicator) = document
        .query_selector(".scroll-indicator")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let style = indicator.style();
        if indicator_hidden(scrolled) {
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("pointer-events", "none");
        } else {
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("pointer-events", "auto");
        }
    }
}

fn scroll_to_about() {
    if let Some(about) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector(".about-section").ok().flatten())
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        about.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_navigate: Callback<View>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Parallax scroll listener, alive for as long as this view is mounted.
    {
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let mut throttle = Throttle::new(PARALLAX_THROTTLE_MS);
                let on_scroll = Closure::wrap(Box::new(move || {
                    if !throttle.ready(js_sys::Date::now()) {
                        return;
                    }
                    if let Some(window) = web_sys::window() {
                        let frame = Closure::once_into_js(apply_parallax);
                        let _ = window.request_animation_frame(frame.unchecked_ref());
                    }
                }) as Box<dyn FnMut()>);
                if let Some(window) = &window {
                    let options = AddEventListenerOptions::new();
                    options.set_passive(true);
                    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                        &options,
                    );
                }
                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let to_portfolio = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(View::Portfolio))
    };
    let to_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(View::Contact))
    };

    let indicator_click = Callback::from(|_: MouseEvent| scroll_to_about());
    let indicator_keydown = Callback::from(|event: KeyboardEvent| {
        let key = event.key();
        if key == "Enter" || key == " " {
            event.prevent_default();
            scroll_to_about();
        }
    });

    html! {
        <div class="landing-page">
            <section class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"WEBBIECRAFT"}</h1>
                    <p class="hero-subtitle">
                        {"Websites and automation, crafted for small businesses."}
                    </p>
                    <div class="hero-actions">
                        <button class="cta-button" onclick={to_portfolio}>
                            {"View Our Work"}
                        </button>
                        <button class="cta-button secondary" onclick={to_contact}>
                            {"Start Your Project"}
                        </button>
                    </div>
                </div>
                <div
                    class="scroll-indicator"
                    id="scroll-indicator"
                    role="button"
                    tabindex="0"
                    aria-label="Scroll to learn more"
                    onclick={indicator_click}
                    onkeydown={indicator_keydown}
                >
                    <span class="scroll-arrow">{"↓"}</span>
                </div>
            </section>

            <section class="about-section">
                <h2 class="section-title animate-on-scroll">{"What We Do"}</h2>
                <div class="about-grid">
                    <div class="about-card animate-on-scroll">
                        <h3>{"Web Design"}</h3>
                        <p>
                            {"Hand-built sites that load fast, read well on any screen, \
                              and stay easy to update after launch."}
                        </p>
                    </div>
                    <div class="about-card animate-on-scroll">
                        <h3>{"AI Automation"}</h3>
                        <p>
                            {"Chat assistants and workflow automations that answer your \
                              customers and handle the repetitive work around the clock."}
                        </p>
                    </div>
                    <div class="about-card animate-on-scroll">
                        <h3>{"Consultation"}</h3>
                        <p>
                            {"Not sure what you need? We look at how your business runs \
                              and tell you what is worth building first."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="newsletter-section animate-on-scroll">
                <h2>{"Stay in the loop"}</h2>
                <p>{"Occasional notes on web design and automation. No spam."}</p>
                <Newsletter />
            </section>

            <style>
                {r#"
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #1a1a1a;
    color: white;
    overflow: hidden;
}
.hero-content {
    text-align: center;
    padding: 0 1.5rem;
    will-change: transform, opacity;
}
.hero-title {
    font-size: clamp(2.5rem, 8vw, 5rem);
    letter-spacing: 0.2em;
    margin: 0 0 1rem;
}
.hero-subtitle {
    font-size: 1.1rem;
    color: #bbb;
    margin: 0 0 2rem;
}
.hero-actions {
    display: flex;
    gap: 1rem;
    justify-content: center;
    flex-wrap: wrap;
}
.cta-button {
    padding: 0.9rem 2rem;
    border: none;
    background: white;
    color: #1a1a1a;
    font-weight: 600;
    letter-spacing: 0.1em;
    cursor: pointer;
}
.cta-button.secondary {
    background: transparent;
    color: white;
    border: 1px solid white;
}
.scroll-indicator {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    transform: translateX(-50%);
    cursor: pointer;
    transition: opacity 0.3s ease;
    font-size: 1.5rem;
    color: white;
}
.scroll-arrow {
    display: inline-block;
    animation: bounce 2s infinite;
}
@keyframes bounce {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(8px); }
}
.about-section {
    max-width: 1100px;
    margin: 0 auto;
    padding: 5rem 1.5rem;
}
.section-title {
    text-align: center;
    letter-spacing: 0.15em;
    margin-bottom: 3rem;
}
.about-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 2rem;
}
.about-card {
    padding: 2rem;
    border: 1px solid #eee;
}
.newsletter-section {
    text-align: center;
    padding: 4rem 1.5rem;
    background: #f7f7f7;
}
.newsletter-form {
    display: flex;
    gap: 0.6rem;
    justify-content: center;
    flex-wrap: wrap;
    margin-top: 1.5rem;
}
.newsletter-input {
    padding: 0.8rem 1rem;
    border: 1px solid #ddd;
    min-width: 260px;
}
.newsletter-button {
    padding: 0.8rem 1.8rem;
    border: none;
    background: #1a1a1a;
    color: white;
    letter-spacing: 0.1em;
    cursor: pointer;
}
.newsletter-button:disabled {
    cursor: default;
}
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_drifts_at_half_scroll_speed() {
        assert_eq!(hero_offset_px(0.0), 0.0);
        assert_eq!(hero_offset_px(200.0), 100.0);
        assert_eq!(hero_offset_px(330.0), 165.0);
    }

    #[test]
    fn hero_fades_out_by_five_hundred_pixels() {
        assert_eq!(hero_opacity(0.0), 1.0);
        assert_eq!(hero_opacity(250.0), 0.5);
        assert_eq!(hero_opacity(500.0), 0.0);
        assert!(hero_opacity(600.0) < 0.0);
    }

    #[test]
    fn indicator_hides_past_one_hundred_pixels() {
        assert!(!indicator_hidden(0.0));
        assert!(!indicator_hidden(100.0));
        assert!(indicator_hidden(100.5));
        assert!(indicator_hidden(400.0));
    }
}

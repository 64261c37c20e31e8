//! Single-page marketing site for WebbieCraft. All views are mounted at
//! once as sections; navigation toggles which one is active, mirrors the
//! view id into the URL fragment, and plays a short exit animation before
//! the switch. Browser back/forward re-activates views without animating.

mod components;
mod config;
mod pages;
mod utils;
mod views;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use components::chatbot::Chatbot;
use components::navbar::Navbar;
use pages::contact::Contact;
use pages::landing::Landing;
use pages::portfolio::{Portfolio, ProjectDetail};
use pages::services::Services;
use utils::animations;
use views::View;

/// Exit animation length; the view switch lands when it ends.
const PAGE_EXIT_MS: u32 = 300;

/// Tail of every view switch, in-app or via browser history: back to the
/// top, and a fresh reveal pass for the incoming section's tagged elements.
fn settle_view(view: View) {
    views::scroll_to_top();
    animations::rearm_section(view.id());
}

#[function_component(App)]
fn app() -> Html {
    // The first render already honors a deep link like `#portfolio`.
    // Unknown fragments fall back to the landing view.
    let active =
        use_state(|| View::from_fragment(&views::current_fragment()).unwrap_or(View::Landing));
    let exiting = use_state(|| false);

    // Reveal-on-scroll arms once the sections exist in the document.
    use_effect_with_deps(
        |_| {
            animations::init_deferred();
            || ()
        },
        (),
    );

    // Browser back/forward activates the fragment's view directly: no exit
    // animation, no new history entry. Fragments outside the registry are
    // left alone.
    {
        let active = active.clone();
        let exiting = exiting.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let on_popstate = Closure::wrap(Box::new(move || {
                    if let Some(view) = View::from_fragment(&views::current_fragment()) {
                        active.set(view);
                        exiting.set(false);
                        settle_view(view);
                    }
                }) as Box<dyn FnMut()>);
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "popstate",
                        on_popstate.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "popstate",
                            on_popstate.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let navigate = {
        let active = active.clone();
        let exiting = exiting.clone();
        Callback::from(move |to: View| {
            views::push_fragment(to);
            exiting.set(true);
            let active = active.clone();
            let exiting = exiting.clone();
            Timeout::new(PAGE_EXIT_MS, move || {
                active.set(to);
                exiting.set(false);
                settle_view(to);
            })
            .forget();
        })
    };

    html! {
        <>
            <Navbar on_navigate={navigate.clone()} />

            <main>
                { for View::ALL.iter().map(|view| {
                    let view = *view;
                    let content = match view {
                        View::Landing => html! { <Landing on_navigate={navigate.clone()} /> },
                        View::Services => html! { <Services on_navigate={navigate.clone()} /> },
                        View::Portfolio => html! { <Portfolio on_navigate={navigate.clone()} /> },
                        View::Contact => html! { <Contact /> },
                        View::ProjectTrattoria
                        | View::ProjectAtelier
                        | View::ProjectOfficina => html! {
                            <ProjectDetail {view} on_navigate={navigate.clone()} />
                        },
                    };
                    let is_active = *active == view;
                    html! {
                        <section
                            key={view.id()}
                            id={view.id()}
                            class={views::section_class(is_active, is_active && *exiting)}
                        >
                            { content }
                        </section>
                    }
                }) }
            </main>

            <footer class="site-footer">
                <p>{"© 2025 WEBBIECRAFT"}</p>
                <p>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                        { config::CONTACT_EMAIL }
                    </a>
                </p>
            </footer>

            <Chatbot />

            <style>
                {r#"
* {
    box-sizing: border-box;
}
body {
    margin: 0;
    font-family: 'Helvetica Neue', Arial, sans-serif;
    color: #1a1a1a;
    line-height: 1.6;
}
main {
    padding-top: 52px;
    min-height: 70vh;
}
.page-section {
    display: none;
}
.page-section.active {
    display: block;
    animation: page-enter 0.5s ease;
}
.page-section.page-exit {
    opacity: 0;
    transform: translateY(12px);
    transition: opacity 0.3s ease, transform 0.3s ease;
}
@keyframes page-enter {
    from { opacity: 0; }
    to { opacity: 1; }
}
.animate-on-scroll {
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}
.animate-on-scroll.animated {
    opacity: 1;
    transform: none;
}
.site-footer {
    text-align: center;
    padding: 2.5rem 1.5rem;
    background: #1a1a1a;
    color: #bbb;
    font-size: 0.85rem;
}
.site-footer a {
    color: #bbb;
}
                "#}
            </style>
        </>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("webbiecraft frontend starting");
    yew::Renderer::<App>::new().render();
}

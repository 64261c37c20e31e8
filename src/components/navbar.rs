//! Fixed top navigation bar with a burger menu on narrow viewports. The
//! document-level click listener closes the menu when a tap lands outside
//! the nav, mirroring how the burger state is kept out of every page's way.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, Node};
use yew::prelude::*;

use crate::views::View;

const NAV_LINKS: [(View, &str); 4] = [
    (View::Landing, "Home"),
    (View::Services, "Services"),
    (View::Portfolio, "Portfolio"),
    (View::Contact, "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_navigate: Callback<View>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let is_menu_open = use_state_eq(|| false);

    // Clicks outside the nav close the burger menu. Registered once for the
    // life of the bar, removed if it ever unmounts.
    {
        let is_menu_open = is_menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|window| window.document());
                let on_document_click = Closure::wrap(Box::new(move |event: Event| {
                    let target = event
                        .target()
                        .and_then(|target| target.dyn_into::<Node>().ok());
                    let inside = web_sys::window()
                        .and_then(|window| window.document())
                        .and_then(|document| {
                            document.query_selector("nav.main-nav").ok().flatten()
                        })
                        .map(|nav| nav.contains(target.as_ref()))
                        .unwrap_or(true);
                    if !inside {
                        is_menu_open.set(false);
                    }
                }) as Box<dyn FnMut(Event)>);
                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "click",
                        on_document_click.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(document) = &document {
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            on_document_click.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |event: MouseEvent| {
            // Keep the toggle click from reaching the outside-click handler.
            event.stop_propagation();
            is_menu_open.set(!*is_menu_open);
        })
    };

    let nav_to = {
        let on_navigate = props.on_navigate.clone();
        let is_menu_open = is_menu_open.clone();
        move |view: View| {
            let on_navigate = on_navigate.clone();
            let is_menu_open = is_menu_open.clone();
            Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                is_menu_open.set(false);
                on_navigate.emit(view);
            })
        }
    };

    let menu_state = if *is_menu_open { "active" } else { "" };

    html! {
        <nav class="main-nav" id="main-nav">
            <div class="nav-container">
                <a href="#" class="logo" onclick={nav_to(View::Landing)}>
                    {"WEBBIECRAFT"}
                </a>

                <button
                    class={classes!("burger-menu", menu_state)}
                    id="burger-menu"
                    aria-label="Toggle navigation menu"
                    aria-expanded={if *is_menu_open { "true" } else { "false" }}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <ul class={classes!("nav-menu", menu_state)} id="nav-menu">
                    { for NAV_LINKS.iter().map(|(view, label)| html! {
                        <li>
                            <a
                                href={format!("#{}", view.id())}
                                class="nav-link"
                                onclick={nav_to(*view)}
                            >
                                { *label }
                            </a>
                        </li>
                    }) }
                </ul>
            </div>

            <style>
                {r#"
.main-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 900;
    background: rgba(255, 255, 255, 0.95);
    border-bottom: 1px solid #eee;
}
.nav-container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 0.8rem 1.2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.logo {
    font-weight: 700;
    letter-spacing: 0.15em;
    color: #1a1a1a;
    text-decoration: none;
}
.nav-menu {
    display: flex;
    gap: 1.5rem;
    list-style: none;
    margin: 0;
    padding: 0;
}
.nav-link {
    color: #1a1a1a;
    text-decoration: none;
    font-size: 0.9rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}
.burger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 6px;
}
.burger-menu span {
    width: 22px;
    height: 2px;
    background: #1a1a1a;
    transition: transform 0.2s ease, opacity 0.2s ease;
}
.burger-menu.active span:nth-child(1) {
    transform: translateY(6px) rotate(45deg);
}
.burger-menu.active span:nth-child(2) {
    opacity: 0;
}
.burger-menu.active span:nth-child(3) {
    transform: translateY(-6px) rotate(-45deg);
}
@media (max-width: 768px) {
    .burger-menu {
        display: flex;
    }
    .nav-menu {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        gap: 0;
        background: white;
        border-bottom: 1px solid #eee;
    }
    .nav-menu.active {
        display: flex;
    }
    .nav-menu li {
        padding: 0.8rem 1.2rem;
    }
}
                "#}
            </style>
        </nav>
    }
}

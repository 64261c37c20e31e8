//! Newsletter signup strip. There is no mailing-list backend yet, so the
//! submit path is a timed acknowledgement: the button confirms the signup
//! after a short delay and resets itself a few seconds later.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::prelude::*;

const CONFIRM_DELAY_MS: u32 = 800;
const RESET_DELAY_MS: u32 = 3_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SubscribePhase {
    Idle,
    Pending,
    Confirmed,
}

impl SubscribePhase {
    fn label(self) -> &'static str {
        match self {
            SubscribePhase::Idle => "SUBSCRIBE",
            SubscribePhase::Pending => "SUBSCRIBING...",
            SubscribePhase::Confirmed => "SUBSCRIBED",
        }
    }

    /// The button stays locked through the whole confirm-and-reset cycle.
    fn is_busy(self) -> bool {
        self != SubscribePhase::Idle
    }

    fn button_style(self) -> &'static str {
        match self {
            SubscribePhase::Confirmed => "background-color: #333;",
            _ => "",
        }
    }
}

#[function_component(Newsletter)]
pub fn newsletter() -> Html {
    let email = use_state(String::new);
    let phase = use_state(|| SubscribePhase::Idle);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let phase = phase.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if phase.is_busy() || email.trim().is_empty() {
                return;
            }
            phase.set(SubscribePhase::Pending);

            let email = email.clone();
            let phase = phase.clone();
            spawn_local(async move {
                TimeoutFuture::new(CONFIRM_DELAY_MS).await;
                email.set(String::new());
                phase.set(SubscribePhase::Confirmed);
                TimeoutFuture::new(RESET_DELAY_MS).await;
                phase.set(SubscribePhase::Idle);
            });
        })
    };

    html! {
        <form class="newsletter-form" {onsubmit}>
            <input
                type="email"
                class="newsletter-input"
                placeholder="Your email address"
                aria-label="Email address for newsletter"
                value={(*email).clone()}
                {oninput}
                required=true
            />
            <button
                type="submit"
                class="newsletter-button"
                disabled={phase.is_busy()}
                style={phase.button_style()}
            >
                { phase.label() }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_the_subscribe_cycle() {
        assert_eq!(SubscribePhase::Idle.label(), "SUBSCRIBE");
        assert_eq!(SubscribePhase::Pending.label(), "SUBSCRIBING...");
        assert_eq!(SubscribePhase::Confirmed.label(), "SUBSCRIBED");
    }

    #[test]
    fn button_is_locked_until_the_cycle_completes() {
        assert!(!SubscribePhase::Idle.is_busy());
        assert!(SubscribePhase::Pending.is_busy());
        assert!(SubscribePhase::Confirmed.is_busy());
    }

    #[test]
    fn only_the_confirmed_phase_restyles_the_button() {
        assert_eq!(SubscribePhase::Idle.button_style(), "");
        assert_eq!(SubscribePhase::Pending.button_style(), "");
        assert!(SubscribePhase::Confirmed
            .button_style()
            .contains("background-color"));
    }
}

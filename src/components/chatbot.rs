//! Floating chat widget. Renders a toggle button and a panel, keeps a short
//! rolling conversation log, and relays each message to the n8n webhook that
//! hosts the assistant. Everything here is self-contained: no other part of
//! the site reads chat state.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys;
use web_sys::{HtmlElement, HtmlInputElement, InputEvent, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew::AttrValue;

use crate::config;

const INPUT_ID: &str = "chatbot-input";
const MESSAGES_ID: &str = "chatbot-messages";

/// Most recent log entries kept between exchanges (5 question/answer pairs),
/// which bounds the webhook payload no matter how long the session runs.
const HISTORY_CAP: usize = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum Role {
    User,
    Assistant,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
struct ChatEntry {
    role: Role,
    content: String,
}

/// Request context sent alongside every message. Append-only during an
/// exchange; clipped to [`HISTORY_CAP`] once the assistant reply lands.
/// Lives and dies with the page, nothing is persisted.
#[derive(Default)]
struct ConversationLog {
    entries: Vec<ChatEntry>,
}

impl ConversationLog {
    fn push(&mut self, role: Role, content: impl Into<String>) {
        self.entries.push(ChatEntry {
            role,
            content: content.into(),
        });
    }

    /// Drops the oldest entries beyond the cap, keeping the tail in order.
    fn truncate_to_cap(&mut self) {
        if self.entries.len() > HISTORY_CAP {
            self.entries.drain(..self.entries.len() - HISTORY_CAP);
        }
    }

    fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    history: &'a [ChatEntry],
}

#[derive(Deserialize)]
struct ChatResponse {
    response: Option<String>,
}

/// One line of the visible transcript. Unlike the conversation log, the
/// transcript is never truncated.
#[derive(Clone, PartialEq)]
struct TranscriptItem {
    role: Role,
    text: String,
    time: String,
}

/// Trims the raw input; whitespace-only submissions are rejected outright,
/// producing no transcript entry and no request.
fn accepted_message(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Escapes the five HTML metacharacters. This is the only barrier between
/// user text / webhook replies and live markup, since bubbles are inserted
/// as raw fragments.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Bubble body markup: escaped text, with newlines kept as line breaks so
/// multi-paragraph replies stay readable.
fn message_markup(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

/// A reply is only usable if the webhook body carried a non-empty
/// `response` field; anything else takes the fallback path.
fn usable_reply(body: ChatResponse) -> Option<String> {
    body.response.filter(|reply| !reply.is_empty())
}

fn fallback_message() -> String {
    format!(
        "Sorry, I'm having trouble connecting right now. Please contact us \
         directly at {} or call {}.",
        config::CONTACT_EMAIL,
        config::CONTACT_PHONE
    )
}

/// Wall-clock HH:MM label for a transcript line.
fn time_label() -> String {
    let opts = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &opts,
        &JsValue::from_str("hour"),
        &JsValue::from_str("2-digit"),
    );
    let _ = js_sys::Reflect::set(
        &opts,
        &JsValue::from_str("minute"),
        &JsValue::from_str("2-digit"),
    );
    js_sys::Date::new_0().to_locale_string("en-US", &opts).into()
}

/// One attempt against the webhook; every failure mode collapses to `None`
/// after leaving a trace on the console.
async fn request_reply(message: &str, history: &[ChatEntry]) -> Option<String> {
    let payload = ChatRequest { message, history };
    let request = match Request::post(config::chat_webhook_url()).json(&payload) {
        Ok(request) => request,
        Err(err) => {
            gloo_console::error!("chatbot: failed to build request:", err.to_string());
            return None;
        }
    };
    match request.send().await {
        Ok(response) if response.ok() => match response.json::<ChatResponse>().await {
            Ok(body) => {
                let reply = usable_reply(body);
                if reply.is_none() {
                    gloo_console::error!("chatbot: webhook body carried no response field");
                }
                reply
            }
            Err(err) => {
                gloo_console::error!("chatbot: unparsable webhook body:", err.to_string());
                None
            }
        },
        Ok(response) => {
            gloo_console::error!("chatbot: webhook returned status", response.status());
            None
        }
        Err(err) => {
            gloo_console::error!("chatbot: request failed:", err.to_string());
            None
        }
    }
}

/// The input can take focus only while the panel shows it and no request
/// has it disabled.
fn input_focusable(open: bool, sending: bool) -> bool {
    open && !sending
}

fn focus_input() {
    if let Some(input) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(INPUT_ID))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = input.focus();
    }
}

fn scroll_messages_to_bottom() {
    if let Some(messages) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(MESSAGES_ID))
    {
        messages.set_scroll_top(messages.scroll_height());
    }
}

fn render_item(item: &TranscriptItem) -> Html {
    let side = match item.role {
        Role::User => "user",
        Role::Assistant => "bot",
    };
    let bubble = Html::from_html_unchecked(AttrValue::from(format!(
        "<div class=\"message-bubble\">{}</div>",
        message_markup(&item.text)
    )));
    html! {
        <div class={classes!("chatbot-message", side)}>
            { bubble }
            <div class="message-time">{ item.time.clone() }</div>
        </div>
    }
}

#[function_component(Chatbot)]
pub fn chatbot() -> Html {
    let is_open = use_state(|| false);
    let draft = use_state(String::new);
    let transcript = use_state(Vec::<TranscriptItem>::new);
    let is_typing = use_state(|| false);
    let is_sending = use_state(|| false);
    let history = use_mut_ref(ConversationLog::default);

    // Focus lands in the text field when the panel opens and again after
    // each exchange. Runs as an effect so the render that drops `disabled`
    // has already committed; a disabled input ignores focus().
    {
        use_effect_with_deps(
            move |(open, sending): &(bool, bool)| {
                if input_focusable(*open, *sending) {
                    focus_input();
                }
                || ()
            },
            (*is_open, *is_sending),
        );
    }

    // Keep the newest line visible as the transcript grows.
    {
        use_effect_with_deps(
            move |_| {
                scroll_messages_to_bottom();
                || ()
            },
            (transcript.len(), *is_typing),
        );
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };
    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let send = {
        let draft = draft.clone();
        let transcript = transcript.clone();
        let is_typing = is_typing.clone();
        let is_sending = is_sending.clone();
        let history = history.clone();
        Callback::from(move |_: ()| {
            let Some(message) = accepted_message(&draft).map(str::to_string) else {
                return;
            };
            if *is_sending {
                return;
            }
            is_sending.set(true);

            // The user line goes to both the visible transcript and the
            // request log before the request leaves.
            let mut pending = (*transcript).clone();
            pending.push(TranscriptItem {
                role: Role::User,
                text: message.clone(),
                time: time_label(),
            });
            transcript.set(pending.clone());
            history.borrow_mut().push(Role::User, message.clone());
            draft.set(String::new());
            is_typing.set(true);

            let snapshot = history.borrow().entries().to_vec();
            let transcript = transcript.clone();
            let is_typing = is_typing.clone();
            let is_sending = is_sending.clone();
            let history = history.clone();
            spawn_local(async move {
                let reply = request_reply(&message, &snapshot).await;
                is_typing.set(false);
                let mut pending = pending;
                match reply {
                    Some(reply) => {
                        pending.push(TranscriptItem {
                            role: Role::Assistant,
                            text: reply.clone(),
                            time: time_label(),
                        });
                        let mut log = history.borrow_mut();
                        log.push(Role::Assistant, reply);
                        log.truncate_to_cap();
                    }
                    None => {
                        pending.push(TranscriptItem {
                            role: Role::Assistant,
                            text: fallback_message(),
                            time: time_label(),
                        });
                    }
                }
                transcript.set(pending);
                // Success or not, the user gets their input back. The focus
                // effect picks this flip up after the re-render.
                is_sending.set(false);
            });
        })
    };

    let on_send_click = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send.emit(()))
    };
    let onkeypress = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                send.emit(());
            }
        })
    };

    html! {
        <div class="chatbot-container">
            <button
                class="chatbot-button"
                id="chatbot-toggle"
                aria-label="Open chat"
                onclick={toggle}
            >
                {"💬"}
            </button>

            <div
                class={classes!("chatbot-window", if *is_open { "active" } else { "" })}
                id="chatbot-window"
            >
                <div class="chatbot-header">
                    <h3>{ config::BOT_NAME }</h3>
                    <button class="chatbot-close" id="chatbot-close" aria-label="Close chat" onclick={close}>
                        {"×"}
                    </button>
                </div>

                <div class="chatbot-messages" id={MESSAGES_ID}>
                    <div class="welcome-message">
                        <h4>{"👋 Welcome!"}</h4>
                        <p>{ config::CHAT_WELCOME_MESSAGE }</p>
                    </div>
                    { for transcript.iter().map(render_item) }
                    { if *is_typing {
                        html! {
                            <div class="chatbot-message bot">
                                <div class="chatbot-typing active" id="typing-indicator">
                                    <div class="typing-dots">
                                        <span></span>
                                        <span></span>
                                        <span></span>
                                    </div>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    } }
                </div>

                <div class="chatbot-input-area">
                    <input
                        type="text"
                        class="chatbot-input"
                        id={INPUT_ID}
                        placeholder="Type your message..."
                        aria-label="Chat message input"
                        value={(*draft).clone()}
                        {oninput}
                        {onkeypress}
                        disabled={*is_sending}
                    />
                    <button
                        class="chatbot-send"
                        id="chatbot-send"
                        aria-label="Send message"
                        onclick={on_send_click}
                        disabled={*is_sending}
                    >
                        {"→"}
                    </button>
                </div>
            </div>

            <style>
                {r#"
.chatbot-container {
    position: fixed;
    bottom: 1.5rem;
    right: 1.5rem;
    z-index: 1000;
}
.chatbot-button {
    width: 56px;
    height: 56px;
    border-radius: 50%;
    border: none;
    background: #1a1a1a;
    color: white;
    font-size: 1.4rem;
    cursor: pointer;
}
.chatbot-window {
    display: none;
    position: absolute;
    bottom: 72px;
    right: 0;
    width: 320px;
    height: 420px;
    flex-direction: column;
    background: white;
    border: 1px solid #ddd;
    border-radius: 12px;
    overflow: hidden;
}
.chatbot-window.active {
    display: flex;
}
.chatbot-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 0.6rem 1rem;
    background: #1a1a1a;
    color: white;
}
.chatbot-close {
    background: none;
    border: none;
    color: white;
    font-size: 1.2rem;
    cursor: pointer;
}
.chatbot-messages {
    flex: 1;
    overflow-y: auto;
    padding: 0.8rem;
}
.chatbot-message {
    margin-bottom: 0.6rem;
}
.chatbot-message.user .message-bubble {
    background: #1a1a1a;
    color: white;
    margin-left: auto;
}
.message-bubble {
    max-width: 85%;
    width: fit-content;
    padding: 0.5rem 0.8rem;
    border-radius: 10px;
    background: #f0f0f0;
}
.message-time {
    font-size: 0.65rem;
    color: #999;
    margin-top: 0.15rem;
}
.chatbot-message.user .message-time {
    text-align: right;
}
.typing-dots span {
    display: inline-block;
    width: 6px;
    height: 6px;
    margin-right: 3px;
    border-radius: 50%;
    background: #999;
    animation: chatbot-blink 1s infinite;
}
@keyframes chatbot-blink {
    50% { opacity: 0.2; }
}
.chatbot-input-area {
    display: flex;
    gap: 0.4rem;
    padding: 0.6rem;
    border-top: 1px solid #eee;
}
.chatbot-input {
    flex: 1;
    padding: 0.5rem;
    border: 1px solid #ddd;
    border-radius: 8px;
}
.chatbot-send {
    border: none;
    border-radius: 8px;
    padding: 0 0.9rem;
    background: #1a1a1a;
    color: white;
    cursor: pointer;
}
.chatbot-send:disabled,
.chatbot-input:disabled {
    opacity: 0.6;
}
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_exchanges(log: &mut ConversationLog, n: usize) {
        for i in 1..=n {
            log.push(Role::User, format!("question {i}"));
            log.push(Role::Assistant, format!("answer {i}"));
            log.truncate_to_cap();
        }
    }

    #[test]
    fn log_length_is_min_of_two_n_and_cap() {
        let mut log = ConversationLog::default();
        run_exchanges(&mut log, 3);
        assert_eq!(log.entries().len(), 6);

        let mut log = ConversationLog::default();
        run_exchanges(&mut log, 5);
        assert_eq!(log.entries().len(), 10);

        let mut log = ConversationLog::default();
        run_exchanges(&mut log, 9);
        assert_eq!(log.entries().len(), 10);
    }

    #[test]
    fn log_keeps_the_most_recent_entries_in_order() {
        let mut log = ConversationLog::default();
        run_exchanges(&mut log, 7);

        let entries = log.entries();
        assert_eq!(entries.len(), 10);
        // Exchanges 1 and 2 fell off the front.
        assert_eq!(entries[0].content, "question 3");
        assert_eq!(entries[0].role, Role::User);
        assert_eq!(entries[9].content, "answer 7");
        assert_eq!(entries[9].role, Role::Assistant);
    }

    #[test]
    fn whitespace_only_input_is_rejected() {
        assert_eq!(accepted_message(""), None);
        assert_eq!(accepted_message("   "), None);
        assert_eq!(accepted_message("\n\t  \n"), None);
    }

    #[test]
    fn accepted_input_is_trimmed() {
        assert_eq!(accepted_message("  hello  "), Some("hello"));
        assert_eq!(accepted_message("hi"), Some("hi"));
    }

    #[test]
    fn escape_covers_the_five_metacharacters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#039;"
        );
    }

    #[test]
    fn injected_script_tags_stay_inert() {
        let markup = message_markup("<script>alert('x')</script>");
        assert!(!markup.contains('<') || !markup.contains("<script"));
        assert_eq!(
            markup,
            "&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"
        );
    }

    #[test]
    fn newlines_become_line_breaks_after_escaping() {
        assert_eq!(message_markup("a\nb"), "a<br>b");
        // A literal "<br>" in the input must not survive as markup.
        assert_eq!(message_markup("<br>"), "&lt;br&gt;");
    }

    #[test]
    fn request_payload_uses_lowercase_roles() {
        let history = vec![
            ChatEntry {
                role: Role::User,
                content: "hi".to_string(),
            },
            ChatEntry {
                role: Role::Assistant,
                content: "hello".to_string(),
            },
        ];
        let payload = ChatRequest {
            message: "hi",
            history: &history,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["message"], "hi");
        assert_eq!(value["history"][0]["role"], "user");
        assert_eq!(value["history"][1]["role"], "assistant");
        assert_eq!(value["history"][1]["content"], "hello");
    }

    #[test]
    fn missing_or_empty_response_is_unusable() {
        let missing: ChatResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(usable_reply(missing), None);

        let empty: ChatResponse = serde_json::from_str(r#"{"response": ""}"#).unwrap();
        assert_eq!(usable_reply(empty), None);

        let present: ChatResponse =
            serde_json::from_str(r#"{"response": "ciao"}"#).unwrap();
        assert_eq!(usable_reply(present), Some("ciao".to_string()));
    }

    #[test]
    fn fallback_names_both_direct_contact_channels() {
        let fallback = fallback_message();
        assert!(fallback.contains(config::CONTACT_EMAIL));
        assert!(fallback.contains(config::CONTACT_PHONE));
    }

    #[test]
    fn focus_returns_only_while_open_and_idle() {
        // Covers both transitions the focus effect reacts to: the panel
        // opening, and a send completing while the panel is open.
        assert!(input_focusable(true, false));
        assert!(!input_focusable(true, true));
        assert!(!input_focusable(false, false));
        assert!(!input_focusable(false, true));
    }
}

//! Site-wide configuration: external endpoints and user-facing copy that is
//! deployment data rather than behavior.

/// n8n webhook that answers chat messages. The workflow behind it owns all
/// assistant behavior; the widget only ships `{ message, history }` at it.
pub fn chat_webhook_url() -> &'static str {
    "https://giovannilondi.app.n8n.cloud/webhook/webbiecraft-chat"
}

/// Formspree form that receives contact submissions. The browser posts the
/// form natively; no code in this crate talks to it.
pub fn contact_form_endpoint() -> &'static str {
    "https://formspree.io/f/xzzbqkve"
}

pub const BOT_NAME: &str = "WEBBIECRAFT";

pub const CONTACT_EMAIL: &str = "glondi03@gmail.com";
pub const CONTACT_PHONE: &str = "+39 389 496 6973";

pub const CHAT_WELCOME_MESSAGE: &str = "Hi! I'm here to help you learn about \
    WebbieCraft's services. Ask me about web design, automation, pricing, or \
    anything else!";

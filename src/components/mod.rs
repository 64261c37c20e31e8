pub mod chatbot;
pub mod navbar;
pub mod newsletter;

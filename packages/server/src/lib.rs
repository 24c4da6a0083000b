// Secret Santa draw service - API Core
//
// Accepts an event, its participants and exclusion rules, draws a single-cycle
// gift assignment and notifies every giver over email or WhatsApp.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;

//! Notifications domain - tells every giver who they are buying for
//!
//! Responsibilities:
//! - Rendering the assignment message (subject, HTML and plain bodies)
//! - Sequential delivery through the configured transport, one log entry per edge
//! - Turning the delivery log into the user-facing summary

pub mod dispatcher;
pub mod models;
pub mod summary;
pub mod templates;

pub use dispatcher::dispatch_notifications;
pub use models::{DeliveryStatus, NotificationLogEntry};
pub use summary::{assemble_response, summarize};
pub use templates::{render_assignment, RenderedMessage};

//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod mailer;
pub mod test_dependencies;
pub mod traits;

pub use deps::{ServerDeps, WhatsAppAdapter};
pub use mailer::SmtpMailer;
pub use test_dependencies::{
    MockEmailTransport, MockMessagingTransport, SentAssignment, SentEmail, TestDependencies,
};
pub use traits::*;

// Business domains
pub mod draw;
pub mod notifications;

// HTTP routes
pub mod draws;
pub mod health;

pub use draws::*;
pub use health::*;

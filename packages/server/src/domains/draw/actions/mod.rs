pub mod run_draw;

pub use run_draw::run_draw;

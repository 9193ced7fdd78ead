// src/core/mod.rs
pub mod config;
pub mod field;
pub mod state;

pub use field::DisplayField;
pub use state::FormState;

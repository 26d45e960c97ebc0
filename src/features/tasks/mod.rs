pub mod components;
pub mod services;
pub mod hooks;

pub use components::*;

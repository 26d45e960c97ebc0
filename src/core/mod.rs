pub mod logging;
pub mod models;
pub mod services;

pub mod settings;
pub mod status_guard;

pub use settings::*;
pub use status_guard::*;

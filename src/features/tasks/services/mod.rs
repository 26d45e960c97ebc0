pub mod seed;
pub mod task_operations;
pub mod variants;

pub use seed::*;
pub use task_operations::*;
pub use variants::*;

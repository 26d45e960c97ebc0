pub mod settings;
pub mod task;
pub mod urgency;

pub use settings::BoardSettings;
pub use task::{StatusPatch, Task, TaskStatus, TaskType};
pub use urgency::due_urgency;

pub mod edit_task_modal;
pub mod task_board;
pub mod task_card;

pub use edit_task_modal::EditTaskModal;
pub use task_board::TaskBoard;
pub use task_card::TaskCard;

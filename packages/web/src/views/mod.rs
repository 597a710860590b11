mod tasks;
pub use tasks::Tasks;

mod new_task;
pub use new_task::NewTask;

mod edit_task;
pub use edit_task::EditTask;

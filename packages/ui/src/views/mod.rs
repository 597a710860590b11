mod task_fields;

mod task_list;
pub use task_list::TaskListView;

mod new_task;
pub use new_task::NewTaskView;

mod edit_task;
pub use edit_task::EditTaskView;

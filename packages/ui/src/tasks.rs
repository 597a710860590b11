use dioxus::prelude::*;
use taskflow::TaskList;

/// Get the shared task list.
pub fn use_tasks() -> Signal<TaskList> {
    use_context::<Signal<TaskList>>()
}

/// Provides the task list to everything below it, starting from `initial`.
#[component]
pub fn TaskProvider(initial: TaskList, children: Element) -> Element {
    let tasks = use_signal(move || initial);
    use_context_provider(|| tasks);

    rsx! {
        {children}
    }
}

use dioxus::prelude::*;
use taskflow::TaskId;
use ui::views::TaskListView;

use crate::Route;

#[component]
pub fn Tasks() -> Element {
    let nav = use_navigator();

    rsx! {
        TaskListView {
            on_new_task: move |_| {
                nav.push(Route::NewTask {});
            },
            on_edit_task: move |id: TaskId| {
                nav.push(Route::EditTask { id: id.0 });
            },
        }
    }
}

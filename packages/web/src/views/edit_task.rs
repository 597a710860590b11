use dioxus::prelude::*;
use taskflow::TaskId;
use ui::views::EditTaskView;

use crate::Route;

#[component]
pub fn EditTask(id: u64) -> Element {
    let nav = use_navigator();

    rsx! {
        EditTaskView {
            id: TaskId(id),
            on_saved: move |_| {
                nav.push(Route::Tasks {});
            },
            on_cancel: move |_| {
                nav.push(Route::Tasks {});
            },
        }
    }
}

use dioxus::prelude::*;
use ui::views::NewTaskView;

use crate::Route;

#[component]
pub fn NewTask() -> Element {
    let nav = use_navigator();

    rsx! {
        NewTaskView {
            on_created: move |_| {
                nav.push(Route::Tasks {});
            },
            on_cancel: move |_| {
                nav.push(Route::Tasks {});
            },
        }
    }
}

use dioxus::prelude::*;

use taskflow::{Severity, TaskFlowConfig, TaskList};
use ui::{NotificationProvider, TaskProvider, ToastStack};
use views::{EditTask, NewTask, Tasks};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Tasks {},
        #[route("/tarefas/nova")]
        NewTask {},
        #[route("/tarefas/:id/editar")]
        EditTask { id: u64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Embedded at build time; the browser has no file system to read it from.
const CONFIG_TOML: &str = include_str!("../taskflow.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn load_config() -> TaskFlowConfig {
    match TaskFlowConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}: {e}, using defaults", TaskFlowConfig::filename());
            TaskFlowConfig::default()
        }
    }
}

/// Tasks shown on first load.
fn seed_tasks(today: &str) -> TaskList {
    let mut tasks = TaskList::new();
    let seeds = [
        ("Administrar medicação", "Leito 12, dipirona 500mg", "enf.ana", "20102026"),
        ("Trocar curativo", "Paciente pós-operatório, ala B", "enf.carlos", "21102026"),
        ("Revisar prontuário", "Alta prevista para amanhã", "dr.silva", "22102026"),
    ];
    for (title, description, assignee, deadline) in seeds {
        if let Err(e) = tasks.create(title, description, assignee, deadline, today) {
            tracing::warn!("seed task {title:?}: {e}");
        }
    }
    tasks
}

#[component]
fn App() -> Element {
    use_context_provider(load_config);
    let initial = use_hook(|| seed_tasks(&ui::today()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: BOOTSTRAP_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        NotificationProvider {
            pinned: vec![(Severity::Info, "Plantão noturno: confira as tarefas pendentes antes da passagem de turno.".to_string())],
            flash: vec![(Severity::Success, "Bem-vindo(a) ao TaskFlow Hospital!".to_string())],
            TaskProvider {
                initial,
                Router::<Route> {}
            }
        }
    }
}

/// Navbar, page outlet and the toast container.
#[component]
fn Shell() -> Element {
    rsx! {
        nav {
            class: "navbar navbar-dark bg-primary mb-3",
            div {
                class: "container",
                Link { class: "navbar-brand", to: Route::Tasks {}, "TaskFlow Hospital" }
            }
        }

        Outlet::<Route> {}

        ToastStack {}
    }
}

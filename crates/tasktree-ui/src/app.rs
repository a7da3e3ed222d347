use chrono::{Local, NaiveDate};
use gloo::events::EventListener;
use serde::Deserialize;
use tasktree_model::{find_task_by_id, FormMode, FormState, Task, TaskId};
use wasm_bindgen::JsCast;
use yew::{function_component, html, use_effect_with, use_state, Callback, Html, UseStateHandle};

use crate::api;
use crate::components::{TaskIntent, TaskModal, TaskTree};

const APP_CONFIG_TOML: &str = include_str!("../assets/app.toml");
const TITLE_REQUIRED: &str = "Enter a title for the task.";

#[derive(Clone, PartialEq, Default, Deserialize)]
struct AppConfig {
    #[serde(default)]
    api: ApiConfig,
}

#[derive(Clone, PartialEq, Deserialize)]
struct ApiConfig {
    #[serde(default = "default_base_path")]
    base_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
        }
    }
}

fn default_base_path() -> String {
    "/api".to_string()
}

fn load_app_config() -> AppConfig {
    match toml::from_str::<AppConfig>(APP_CONFIG_TOML) {
        Ok(config) => {
            tracing::info!(base_path = %config.api.base_path, "loaded app config");
            config
        }
        Err(error) => {
            tracing::error!(%error, "failed to parse app config; using defaults");
            AppConfig::default()
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Replace the store wholesale with the server's latest forest. On
/// failure the forest empties and the global error carries the message;
/// nothing is ever merged. An open form gets its parent title
/// re-resolved against the fresh forest.
async fn refresh_task_list(
    base: String,
    tasks: UseStateHandle<Vec<Task>>,
    global_error: UseStateHandle<Option<String>>,
    form: UseStateHandle<Option<FormState>>,
) {
    match api::list_tasks(&base).await {
        Ok(list) => {
            global_error.set(None);
            if let Some(mut state) = (*form).clone() {
                state.refresh_parent_title(&list);
                form.set(Some(state));
            }
            tasks.set(list);
        }
        Err(message) => {
            tasks.set(Vec::new());
            global_error.set(Some(message));
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(load_app_config);
    let tasks = use_state(Vec::<Task>::new);
    let loading = use_state(|| true);
    let global_error = use_state(|| None::<String>);
    let form = use_state(|| None::<FormState>);
    let submitting = use_state(|| false);

    let base_path = config.api.base_path.clone();
    let dialog_open = form.is_some();

    // Initial load; the loading flag wraps only this first fetch.
    {
        let base = base_path.clone();
        let tasks = tasks.clone();
        let loading = loading.clone();
        let global_error = global_error.clone();
        let form = form.clone();
        use_effect_with((), move |_| {
            tracing::info!("loading initial task forest");
            wasm_bindgen_futures::spawn_local(async move {
                refresh_task_list(base, tasks, global_error, form).await;
                loading.set(false);
            });
            || ()
        });
    }

    // Escape dismisses the dialog just like the backdrop click.
    {
        let form = form.clone();
        use_effect_with(dialog_open, move |open| {
            let listener = open.then(|| {
                EventListener::new(&gloo::utils::document(), "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<web_sys::KeyboardEvent>()
                        .is_some_and(|key_event| key_event.key() == "Escape");
                    if is_escape {
                        tracing::debug!("dialog dismissed via escape");
                        form.set(None);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_add_click = {
        let form = form.clone();
        let submitting = submitting.clone();
        Callback::from(move |_| {
            tracing::debug!("opening create dialog");
            submitting.set(false);
            form.set(Some(FormState::create(today())));
        })
    };

    let on_close = {
        let form = form.clone();
        let submitting = submitting.clone();
        Callback::from(move |_: ()| {
            submitting.set(false);
            form.set(None);
        })
    };

    let on_clear_parent = {
        let form = form.clone();
        Callback::from(move |_: ()| {
            if let Some(mut state) = (*form).clone() {
                state.clear_parent(today());
                form.set(Some(state));
            }
        })
    };

    // Single dispatcher for every intent bubbling out of the tree; the
    // target task is resolved here, once, whatever its nesting depth.
    let on_intent = {
        let tasks = tasks.clone();
        let form = form.clone();
        let submitting = submitting.clone();
        let global_error = global_error.clone();
        let base = base_path.clone();
        Callback::from(move |(id, intent): (TaskId, TaskIntent)| {
            let Some(task) = find_task_by_id(&tasks, &id) else {
                tracing::warn!(%id, "intent for a task missing from the forest");
                return;
            };

            match intent {
                TaskIntent::Edit => {
                    submitting.set(false);
                    form.set(Some(FormState::edit(task, &tasks, today())));
                }
                TaskIntent::AddChild => {
                    submitting.set(false);
                    form.set(Some(FormState::create_under(task, today())));
                }
                TaskIntent::Delete => {
                    let confirmed = web_sys::window()
                        .and_then(|window| {
                            window
                                .confirm_with_message(&format!("Delete \"{}\"?", task.title))
                                .ok()
                        })
                        .unwrap_or(false);
                    if !confirmed {
                        tracing::info!(%id, "delete canceled");
                        return;
                    }

                    let base = base.clone();
                    let tasks = tasks.clone();
                    let global_error = global_error.clone();
                    let form = form.clone();
                    let id = id.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match api::delete_task(&base, &id).await {
                            Ok(()) => {
                                tracing::info!(%id, "task deleted");
                                refresh_task_list(base, tasks, global_error, form).await;
                            }
                            Err(message) => {
                                global_error.set(Some(message));
                            }
                        }
                    });
                }
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let tasks = tasks.clone();
        let global_error = global_error.clone();
        let base = base_path.clone();
        Callback::from(move |_: ()| {
            let Some(state) = (*form).clone() else {
                return;
            };
            if *submitting {
                return;
            }

            let Some(payload) = state.payload() else {
                tracing::debug!("submit rejected: empty title");
                let mut invalid = state;
                invalid.error = Some(TITLE_REQUIRED.to_string());
                form.set(Some(invalid));
                return;
            };

            submitting.set(true);

            let base = base.clone();
            let form = form.clone();
            let submitting = submitting.clone();
            let tasks = tasks.clone();
            let global_error = global_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match &state.mode {
                    FormMode::Create => api::create_task(&base, &payload).await,
                    FormMode::Edit(id) => api::update_task(&base, id, &payload).await,
                };

                match result {
                    Ok(()) => {
                        tracing::info!(editing = state.is_editing(), "task saved");
                        refresh_task_list(base, tasks, global_error, form.clone()).await;
                        form.set(None);
                    }
                    Err(message) => {
                        let mut failed = state;
                        failed.error = Some(message);
                        form.set(Some(failed));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="app-shell">
            <header class="app-header">
                <h1>{ "Tasktree" }</h1>
                <button type="button" class="btn primary" onclick={on_add_click}>
                    { "Add task" }
                </button>
            </header>

            {
                if let Some(message) = (*global_error).clone() {
                    html! { <div class="global-error">{ message }</div> }
                } else {
                    html! {}
                }
            }

            {
                if *loading {
                    html! { <div class="loading">{ "Loading tasks..." }</div> }
                } else if tasks.is_empty() {
                    html! { <div class="empty-state">{ "No tasks yet. Add the first one." }</div> }
                } else {
                    html! { <TaskTree tasks={(*tasks).clone()} on_intent={on_intent} /> }
                }
            }

            <TaskModal
                form={form.clone()}
                submitting={*submitting}
                on_submit={on_submit}
                on_close={on_close}
                on_clear_parent={on_clear_parent}
            />
        </div>
    }
}

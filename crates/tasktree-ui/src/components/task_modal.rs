use chrono::NaiveDate;
use tasktree_model::{Effort, FormMode, FormState, Priority, Status};
use yew::{function_component, html, Callback, Html, Properties, TargetCast, UseStateHandle};

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
    pub form: UseStateHandle<Option<FormState>>,
    pub submitting: bool,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
    pub on_clear_parent: Callback<()>,
}

fn input_callback(
    form: &UseStateHandle<Option<FormState>>,
    apply: impl Fn(&mut FormState, String) + 'static,
) -> Callback<web_sys::InputEvent> {
    let form = form.clone();
    Callback::from(move |event: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement = event.target_unchecked_into();
        if let Some(mut current) = (*form).clone() {
            apply(&mut current, input.value());
            current.error = None;
            form.set(Some(current));
        }
    })
}

fn textarea_callback(
    form: &UseStateHandle<Option<FormState>>,
    apply: impl Fn(&mut FormState, String) + 'static,
) -> Callback<web_sys::InputEvent> {
    let form = form.clone();
    Callback::from(move |event: web_sys::InputEvent| {
        let area: web_sys::HtmlTextAreaElement = event.target_unchecked_into();
        if let Some(mut current) = (*form).clone() {
            apply(&mut current, area.value());
            current.error = None;
            form.set(Some(current));
        }
    })
}

fn date_callback(
    form: &UseStateHandle<Option<FormState>>,
    apply: impl Fn(&mut FormState, NaiveDate) + 'static,
) -> Callback<web_sys::Event> {
    let form = form.clone();
    Callback::from(move |event: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event.target_unchecked_into();
        // A cleared or partial date input keeps the last valid date.
        let Ok(date) = NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d") else {
            return;
        };
        if let Some(mut current) = (*form).clone() {
            apply(&mut current, date);
            current.error = None;
            form.set(Some(current));
        }
    })
}

fn select_callback(
    form: &UseStateHandle<Option<FormState>>,
    apply: impl Fn(&mut FormState, &str) + 'static,
) -> Callback<web_sys::Event> {
    let form = form.clone();
    Callback::from(move |event: web_sys::Event| {
        let select: web_sys::HtmlSelectElement = event.target_unchecked_into();
        if let Some(mut current) = (*form).clone() {
            apply(&mut current, &select.value());
            current.error = None;
            form.set(Some(current));
        }
    })
}

#[function_component(TaskModal)]
pub fn task_modal(props: &TaskModalProps) -> Html {
    let form = props.form.clone();
    let Some(state) = (*form).clone() else {
        return html! {};
    };

    let heading = match state.mode {
        FormMode::Create => "Add Task",
        FormMode::Edit(_) => "Edit Task",
    };
    let submit_label = if props.submitting {
        "Saving..."
    } else if state.is_editing() {
        "Update task"
    } else {
        "Add task"
    };

    let on_title_input = input_callback(&form, |state, value| state.form.title = value);
    let on_assignee_input = input_callback(&form, |state, value| state.form.assignee = value);
    let on_owner_input = input_callback(&form, |state, value| state.form.owner = value);
    let on_detail_input = textarea_callback(&form, |state, value| state.form.detail = value);
    let on_start_date_change = date_callback(&form, |state, date| state.form.start_date = date);
    let on_due_date_change = date_callback(&form, |state, date| state.form.due_date = date);
    let on_status_change = select_callback(&form, |state, value| {
        if let Some(status) = Status::from_key(value) {
            state.form.status = status;
        }
    });
    let on_priority_change = select_callback(&form, |state, value| {
        if let Some(priority) = Priority::from_key(value) {
            state.form.priority = priority;
        }
    });
    let on_effort_change = select_callback(&form, |state, value| {
        if let Some(effort) = Effort::from_key(value) {
            state.form.effort = effort;
        }
    });

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: web_sys::MouseEvent| {
            tracing::debug!("dialog dismissed via backdrop");
            on_close.emit(());
        })
    };
    let on_dialog_click = Callback::from(|event: web_sys::MouseEvent| {
        event.stop_propagation();
    });
    let on_cancel_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: web_sys::MouseEvent| on_close.emit(()))
    };
    let on_save_click = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: web_sys::MouseEvent| on_submit.emit(()))
    };
    let on_clear_parent_click = {
        let on_clear_parent = props.on_clear_parent.clone();
        Callback::from(move |_: web_sys::MouseEvent| on_clear_parent.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_dialog_click}>
                <div class="header">{ heading }</div>
                <div class="content">
                    {
                        if let Some(error) = state.error.clone() {
                            html! { <div class="form-error">{ error }</div> }
                        } else {
                            html! {}
                        }
                    }
                    <div class="field">
                        <label>{ "Title" }</label>
                        <input
                            value={state.form.title.clone()}
                            placeholder="Required task title"
                            oninput={on_title_input}
                        />
                    </div>
                    <div class="field">
                        <label>{ "Detail (optional)" }</label>
                        <textarea
                            value={state.form.detail.clone()}
                            placeholder="Optional description"
                            oninput={on_detail_input}
                        />
                    </div>
                    <div class="field-row">
                        <div class="field">
                            <label>{ "Assignee" }</label>
                            <input value={state.form.assignee.clone()} oninput={on_assignee_input} />
                        </div>
                        <div class="field">
                            <label>{ "Owner" }</label>
                            <input value={state.form.owner.clone()} oninput={on_owner_input} />
                        </div>
                    </div>
                    {
                        if let Some(label) = state.parent_label() {
                            html! {
                                <div class="field">
                                    <label>{ "Parent task" }</label>
                                    <div class="field-inline">
                                        <span class="parent-label">{ label }</span>
                                        <button type="button" class="btn" onclick={on_clear_parent_click}>
                                            { "Clear" }
                                        </button>
                                    </div>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <div class="field-row">
                        <div class="field">
                            <label>{ "Start date" }</label>
                            <input
                                type="date"
                                value={state.form.start_date.to_string()}
                                onchange={on_start_date_change}
                            />
                        </div>
                        <div class="field">
                            <label>{ "Due date" }</label>
                            <input
                                type="date"
                                value={state.form.due_date.to_string()}
                                onchange={on_due_date_change}
                            />
                        </div>
                    </div>
                    <div class="field-row">
                        <div class="field">
                            <label>{ "Status" }</label>
                            <select value={state.form.status.as_key()} onchange={on_status_change}>
                                {
                                    for Status::all().iter().map(|status| html! {
                                        <option value={status.as_key()}>{ status.label() }</option>
                                    })
                                }
                            </select>
                        </div>
                        <div class="field">
                            <label>{ "Priority" }</label>
                            <select value={state.form.priority.as_key()} onchange={on_priority_change}>
                                {
                                    for Priority::all().iter().map(|priority| html! {
                                        <option value={priority.as_key()}>{ priority.label() }</option>
                                    })
                                }
                            </select>
                        </div>
                        <div class="field">
                            <label>{ "Effort" }</label>
                            <select value={state.form.effort.as_key()} onchange={on_effort_change}>
                                {
                                    for Effort::all().iter().map(|effort| html! {
                                        <option value={effort.as_key()}>{ effort.label() }</option>
                                    })
                                }
                            </select>
                        </div>
                    </div>
                    <div class="footer">
                        <button type="button" class="btn" onclick={on_cancel_click}>
                            { "Cancel" }
                        </button>
                        <button
                            type="button"
                            class="btn primary"
                            onclick={on_save_click}
                            disabled={props.submitting}
                        >
                            { submit_label }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

use leptos::prelude::*;

use crate::core::services::task_ops;
use crate::models::{BoardState, Task};

/// One row of the task list. `index` is the row's position within the
/// filtered view as rendered, and it is what every row action dispatches.
#[component]
pub fn TaskCard(
    board: RwSignal<BoardState>,
    entry: RwSignal<String>,
    index: usize,
    task: Task,
    editing: Memo<Option<usize>>,
) -> impl IntoView {
    let is_editing = move || editing.get() == Some(index);
    let completed = task.completed;
    let text = task.text.clone();

    view! {
        <div class=move || {
            if completed { "task-card completed" } else { "task-card" }
        }>
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| task_ops::toggle_task(board, index)
            />
            {move || {
                if is_editing() {
                    view! {
                        <input
                            type="text"
                            class="edit-input"
                            autofocus=true
                            prop:value=move || {
                                board.with(|b| b.editing_draft().unwrap_or_default())
                            }
                            on:input=move |ev| {
                                task_ops::update_draft(board, event_target_value(&ev))
                            }
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    task_ops::commit_entry(board, entry);
                                }
                            }
                        />
                    }
                        .into_any()
                } else {
                    let text = text.clone();
                    view! {
                        <span
                            class="task-text"
                            style:text-decoration=if completed { "line-through" } else { "none" }
                            on:click=move |_| task_ops::toggle_task(board, index)
                        >
                            {text}
                        </span>
                    }
                        .into_any()
                }
            }}
            <div class="task-actions">
                {move || {
                    if is_editing() {
                        vec![
                            view! {
                                <button
                                    class="save-btn"
                                    on:click=move |_| task_ops::save_editing(board)
                                >
                                    "Save"
                                </button>
                            }
                                .into_any(),
                            view! {
                                <button
                                    class="cancel-btn"
                                    on:click=move |_| task_ops::cancel_editing(board)
                                >
                                    "Cancel"
                                </button>
                            }
                                .into_any(),
                        ]
                    } else {
                        vec![
                            view! {
                                <button
                                    class="edit-btn"
                                    on:click=move |_| task_ops::start_editing(board, index)
                                >
                                    "Edit"
                                </button>
                            }
                                .into_any(),
                        ]
                    }
                }}
                <button class="remove-btn" on:click=move |_| task_ops::remove_task(board, index)>
                    "Remove"
                </button>
            </div>
        </div>
    }
}

use std::rc::Rc;

use leptos::prelude::*;

use crate::core::services::{task_ops, Preferences};
use crate::models::{BoardState, Filter, Theme};

use super::{FilterBar, TaskCard};

/// The task-list widget. Owns all board state; every interaction runs a
/// synchronous transition and the view re-renders from the result.
#[component]
pub fn TaskBoard() -> impl IntoView {
    let prefs = use_context::<Preferences>().expect("preferences context");

    let board = RwSignal::new(BoardState::default());
    let entry = RwSignal::new(String::new());
    let (filter, set_filter) = signal(prefs.load_filter());
    let (theme, set_theme) = signal(prefs.load_theme());

    // Mirror the restored theme onto the document before the first paint.
    prefs.apply_theme(theme.get_untracked());

    // Memoized so keystrokes in the edit input (which only touch the draft)
    // don't rebuild the row list and steal focus from it.
    let visible = Memo::new(move |_| board.with(|b| b.visible_tasks(filter.get())));
    let editing = Memo::new(move |_| board.with(|b| b.editing_index()));
    // The placeholder keys on the full sequence, not the filtered view: a
    // non-matching filter over existing tasks shows an empty list instead.
    let no_tasks = Memo::new(move |_| board.with(|b| b.tasks.is_empty()));

    let select_filter = {
        let prefs = prefs.clone();
        Rc::new(move |f: Filter| {
            set_filter.set(f);
            // Persisted synchronously after the transition, not via an effect.
            prefs.save_filter(f);
        }) as Rc<dyn Fn(Filter)>
    };

    let toggle_theme = {
        let prefs = prefs.clone();
        move |_| {
            let next = theme.get_untracked().toggled();
            set_theme.set(next);
            prefs.save_theme(next);
            prefs.apply_theme(next);
        }
    };

    view! {
        <div class=move || format!("app-container {}", theme.get().class_name())>
            <h2>"Task Manager"</h2>
            <div class="command-bar">
                <input
                    type="text"
                    placeholder="Add a new task..."
                    prop:value=move || entry.get()
                    on:input=move |ev| entry.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            task_ops::commit_entry(board, entry);
                        }
                    }
                />
                <button on:click=move |_| task_ops::add_entry(board, entry)>"Add Task"</button>
                <button on:click=toggle_theme>
                    {move || if theme.get() == Theme::Dark { "🌙" } else { "🔆" }}
                </button>
            </div>
            <FilterBar current=filter on_select=select_filter />
            <div class="task-list-container">
                <div class="task-list">
                    {move || {
                        if no_tasks.get() {
                            view! {
                                <p class="no-tasks">
                                    "No tasks found. Add a new task to get started!"
                                </p>
                            }
                                .into_any()
                        } else {
                            visible
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, task)| {
                                    view! {
                                        <TaskCard
                                            board=board
                                            entry=entry
                                            index=index
                                            task=task
                                            editing=editing
                                        />
                                    }
                                        .into_any()
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </div>
            <footer>"Task Manager App © 2023"</footer>
        </div>
    }
}

use leptos::prelude::*;

use crate::models::BoardState;

// Thin handlers the components wire their events to. Each one runs a board
// transition inside the signal update so the view re-renders right after.

/// Add the entry field's text as a new task; the field is cleared only when
/// a task was actually added (whitespace-only input leaves it alone).
pub fn add_entry(board: RwSignal<BoardState>, entry: RwSignal<String>) {
    let text = entry.get_untracked();
    let mut added = false;
    board.update(|b| added = b.add_task(&text));
    if added {
        entry.set(String::new());
    }
}

/// Enter accelerator shared by the entry field and the edit input: commit
/// the active editing session if there is one, otherwise add a task.
pub fn commit_entry(board: RwSignal<BoardState>, entry: RwSignal<String>) {
    if board.with_untracked(|b| b.is_editing()) {
        board.update(|b| b.save_editing());
    } else {
        add_entry(board, entry);
    }
}

pub fn toggle_task(board: RwSignal<BoardState>, index: usize) {
    board.update(|b| b.toggle_task(index));
}

pub fn start_editing(board: RwSignal<BoardState>, index: usize) {
    board.update(|b| b.start_editing(index));
}

pub fn update_draft(board: RwSignal<BoardState>, text: String) {
    board.update(|b| b.update_draft(text));
}

pub fn save_editing(board: RwSignal<BoardState>) {
    board.update(|b| b.save_editing());
}

pub fn cancel_editing(board: RwSignal<BoardState>) {
    board.update(|b| b.cancel_editing());
}

pub fn remove_task(board: RwSignal<BoardState>, index: usize) {
    board.update(|b| b.remove_task(index));
}

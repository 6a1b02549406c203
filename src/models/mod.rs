pub mod board;
pub mod task;

pub use board::{BoardState, EditState};
pub use task::{Filter, Task, Theme};

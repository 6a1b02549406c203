pub mod filter_bar;
pub mod task_board;
pub mod task_card;

pub use filter_bar::FilterBar;
pub use task_board::TaskBoard;
pub use task_card::TaskCard;

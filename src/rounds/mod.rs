pub mod api;
pub mod storage;
pub mod types;

pub use api::{ApiClient, RoundKey, LOAD_LIMIT};
pub use storage::{get_round_book_path, load_round_book, save_round_book, RoundBook};
pub use types::SavedRound;

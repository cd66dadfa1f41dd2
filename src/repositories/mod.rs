mod json_file_repository;
mod traits;

pub use json_file_repository::{JsonFileRepository, DEFAULT_BOOK_FILE};
pub use traits::BookRepository;

pub mod book;
pub mod store;
pub mod todo;

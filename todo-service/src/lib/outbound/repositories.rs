pub mod book;

pub use book::PostgresBookRepository;

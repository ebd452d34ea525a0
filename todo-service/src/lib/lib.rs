pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::book;
pub use domain::store;
pub use domain::todo;
pub use outbound::repositories;

//! Domain Layer

pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::Transaction;
pub use repository::TransactionRepository;

//! Application Layer - Use Cases

pub mod create_transaction;

pub use create_transaction::{CreateTransactionInput, CreateTransactionUseCase};

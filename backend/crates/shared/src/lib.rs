//! Shared Kernel - Domain-crossing minimal core
//!
//! The smallest vocabulary every bounded context agrees on:
//! - Common error types and result aliases
//! - Typed ID wrappers
//! - Cross-cutting validation rules (monetary amounts)
//!
//! Only things that are hard to change and mean the same thing in
//! every domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod amount;
pub mod id;

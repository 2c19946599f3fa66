//! Entity Module

pub mod auth_context;
pub mod user;

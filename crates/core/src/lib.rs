//! Shared domain types and errors for the trackdrop backend.

pub mod error;
pub mod types;

//! Premium user store
//!
//! A flat-file membership store: one in-memory set of premium user ids,
//! mirrored to a human-editable pipe-delimited text file. This module exports
//! the core types and functions for testing and reuse by an embedding
//! application (typically a bot command dispatcher).

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod store;

pub use config::Config;
pub use error::{Result, StoreError};
pub use models::PremiumRecord;
pub use store::PremiumStore;

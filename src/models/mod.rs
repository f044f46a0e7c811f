//! Data models for the premium store

pub mod premium;

pub use premium::PremiumRecord;

use thiserror::Error;

/// Store error type
///
/// A missing backing file is not represented here: `PremiumStore` treats it as
/// the first-run path and creates the file. Everything else (permissions, disk
/// full, malformed path) propagates unchanged.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on premium file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

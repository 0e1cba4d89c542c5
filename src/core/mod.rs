// Public modules
pub mod cases;
pub mod defs;
pub mod error;
pub mod fixture;
pub mod reporter;
pub mod sequence;

// Public modules for CLI access
pub mod defaults;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};

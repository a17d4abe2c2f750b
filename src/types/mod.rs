//! Error record and allocation helpers.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::Error;
//!
//! let err = Error::with_message("ERR_001", "Invalid operation");
//! assert_eq!(err.code(), "ERR_001");
//! assert_eq!(err.to_string(), "ERR_001: Invalid operation");
//! ```
pub mod alloc_type;
pub mod error;

pub use error::*;

//! Row-level string transformations for SQL user-defined functions.
//!
//! This crate provides the string utility surface invoked once per value by
//! the host query engine:
//!
//! - **operation**: The [`Operation`] tag selecting a transform
//! - **dispatch**: [`evaluate`] and [`evaluate_with`], the two UDF entry points
//! - **normalization**: The individual transforms (casing, extraction,
//!   masking, validation, slugging, counting)
//! - **patterns**: Email and phone grammars, compiled once per process
//!
//! # Example
//!
//! ```
//! use textudf_transform::{evaluate, evaluate_with};
//!
//! assert_eq!(evaluate(Some("  john   SMITH ")).as_deref(), Some("John Smith"));
//! assert_eq!(
//!     evaluate_with(Some("Order123Items456"), Some("extract_numbers")).as_deref(),
//!     Some("123456")
//! );
//! ```

pub mod dispatch;
pub mod error;
pub mod normalization;
pub mod operation;
pub mod patterns;

pub use dispatch::{evaluate, evaluate_with};
pub use error::OperationError;
pub use operation::Operation;

//! Library components for the textudf command-line harness.

pub mod apply;
pub mod csv_column;
pub mod logging;
pub mod summary;

//! Pagination arithmetic
//!
//! Provides the `Paginator` state holder and a serializable `PageSummary`
//! snapshot of its derived values. Out-of-range inputs are normalized,
//! never rejected.

pub mod paginator;
pub mod summary;

pub use paginator::{pagination, Paginator};
pub use summary::PageSummary;

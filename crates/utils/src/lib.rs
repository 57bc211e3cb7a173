//! General-purpose helpers shared across the workspace.
//! - Value checks and numeric helpers (`blank`, `clamp`).
//! - Collection and JSON helpers (`cross_join`, `path`).
//! - Small async delay/poll primitives (`time`).

pub mod blank;
pub mod clamp;
pub mod cross_join;
pub mod css;
pub mod errors;
pub mod path;
pub mod tap;
pub mod time;

pub use blank::{blank, Blank};
pub use clamp::clamp;
pub use cross_join::{cross_join, cross_join_objects};
pub use css::{to_css_classes, CssClass};
pub use errors::InvalidRangeError;
pub use tap::tap;

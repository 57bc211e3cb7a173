//! Cross-cutting helpers shared by the workspace binaries.

pub mod utils;

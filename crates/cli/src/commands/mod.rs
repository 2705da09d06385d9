//! CLI command implementations.

pub mod convert;
pub mod info;

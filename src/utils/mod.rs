//! Small shared utilities.

pub mod sanitize;

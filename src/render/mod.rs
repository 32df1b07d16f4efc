//! Display rendering for lookup results.
//!
//! This module provides:
//! - The fixed key → {label, icon} descriptor table
//! - Ordered field-block rendering
//! - HTML escaping for values inserted into markup

mod fields;

// Re-export public API
pub use fields::{descriptor, render_fields, FieldBlock, FieldDescriptor};

/// Escapes a string for insertion into an HTML rendering target.
///
/// Handles the five characters with meaning in markup and attribute contexts.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

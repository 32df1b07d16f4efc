//! Utilities for sanitizing error messages before display.
//!
//! Removes control characters and truncates overly long messages so transport
//! errors (which can embed arbitrary bytes from the connection layer) render
//! cleanly in the error block.

/// Sanitizes an error message by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) can
/// break terminal output and log lines. Non-ASCII UTF-8 passes through.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // printable ASCII starts at space
                || code == 0x09
                || code == 0x0A
                || code == 0x0D
                || code > 0x7F
        })
        .collect()
}

/// Sanitizes and truncates an error message to
/// [`crate::config::MAX_ERROR_MESSAGE_LENGTH`].
pub fn sanitize_and_truncate_error_message(message: &str) -> String {
    let sanitized = sanitize_error_message(message);

    if sanitized.len() > crate::config::MAX_ERROR_MESSAGE_LENGTH {
        let truncate_len = crate::config::MAX_ERROR_MESSAGE_LENGTH.saturating_sub(50);
        let truncate_len = truncate_len.min(sanitized.len());
        // Back off to a char boundary so the slice below cannot panic
        let mut boundary = truncate_len;
        while boundary > 0 && !sanitized.is_char_boundary(boundary) {
            boundary -= 1;
        }
        format!(
            "{}... (truncated, original length: {} chars)",
            &sanitized[..boundary],
            sanitized.chars().count()
        )
    } else {
        sanitized
    }
}

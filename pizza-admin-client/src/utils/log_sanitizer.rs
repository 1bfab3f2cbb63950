//! Log sanitization utilities
//!
//! Keeps bearer tokens and long response bodies (user emails, whole franchise
//! lists) out of debug/error logs.

/// Maximum number of bytes of a body to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading token characters kept visible.
const TOKEN_VISIBLE_PREFIX: usize = 4;

/// Truncate a string for safe logging, never splitting a UTF-8 character.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|i| *i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Mask an auth token, leaving only a short prefix for correlation.
pub fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(TOKEN_VISIBLE_PREFIX).collect();
    if visible.chars().count() == token.chars().count() {
        return "****".to_string();
    }
    format!("{visible}****")
}

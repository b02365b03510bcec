//! Text and timestamp formatting helpers

use chrono::NaiveDateTime;
use chrono::{Datelike, Timelike};

/// Format a timestamp by substituting `YYYY`, `MM`, `DD`, `HH`, `mm`, `ss`
/// tokens in `pattern`. All numeric fields are zero-padded; any other text
/// passes through unchanged. Tokens are case-sensitive (`MM` is month, `mm`
/// is minute).
pub fn format_timestamp(timestamp: &NaiveDateTime, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("YYYY") {
            out.push_str(&format!("{:04}", timestamp.year()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("MM") {
            out.push_str(&format!("{:02}", timestamp.month()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("DD") {
            out.push_str(&format!("{:02}", timestamp.day()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("HH") {
            out.push_str(&format!("{:02}", timestamp.hour()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("mm") {
            out.push_str(&format!("{:02}", timestamp.minute()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("ss") {
            out.push_str(&format!("{:02}", timestamp.second()));
            rest = tail;
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }
    }

    out
}

/// Uppercase the first character of `text`, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Short random identifier of up to 32 hex characters, derived from a v4
/// UUID.
pub fn random_id(length: usize) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    let length = length.min(id.len());
    id[..length].to_string()
}

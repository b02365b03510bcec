//! Value-level helpers
//!
//! Small stateless utilities that accompany the trackers and limiters:
//! JSON deep merge, query-string encoding, timestamp formatting, and short
//! random identifiers.

pub mod format;
pub mod json;
pub mod query;

pub use format::{capitalize, format_timestamp, random_id};
pub use json::{is_empty_value, merge_json};
pub use query::{parse_query_string, to_query_string, QueryError};

//! Object key conventions for the diagnosis store.
//!
//! Keys embed a zero-padded nanosecond timestamp so that a plain
//! lexicographic listing of one user's prefix comes back in chronological
//! order. Pure string functions, no AWS dependency.

use jiff::Timestamp;
use uuid::Uuid;

/// Width of the zero-padded nanosecond component. Wide enough for any
/// representable `jiff::Timestamp`.
const NANOS_WIDTH: usize = 20;

/// Prefix listing every record belonging to one user.
pub fn user_history_prefix(user_id: &str) -> String {
    format!("diagnoses/{user_id}/")
}

/// Full object key for one diagnosis record.
pub fn diagnosis_record(user_id: &str, created_at: Timestamp, id: Uuid) -> String {
    format!(
        "diagnoses/{user_id}/{:0width$}-{id}.json",
        created_at.as_nanosecond(),
        width = NANOS_WIDTH
    )
}

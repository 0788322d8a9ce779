//! Naive-UTC timestamp formatting for response payloads.

use time::OffsetDateTime;
use time::error::Format;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// ISO-8601 layout without a timezone offset suffix.
///
/// Responses carry wall-clock UTC with microsecond precision and no
/// `Z`/offset, e.g. `2025-03-14T09:26:53.589793`. Clients already
/// parse this exact shape, so the offset must stay absent.
pub const UTC_ISO8601: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]");

/// Formats the current UTC wall-clock time as naive ISO-8601.
///
/// Recomputed on every call; callers must not cache the result across
/// requests.
pub fn utc_timestamp() -> Result<String, Format> {
    OffsetDateTime::now_utc().format(UTC_ISO8601)
}

//! crates/logging-sink/src/header.rs
//! Rendering of the prefix, timestamp and call-site header.

use std::io::{self, Write};

use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::{CallSite, LineFlags};

/// Date field, including the separator that follows it.
const DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]/[month padding:zero]/[day padding:zero] ");

/// Time-of-day field at second resolution.
const TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour padding:zero]:[minute padding:zero]:[second padding:zero]");

const MICROSECONDS_FORMAT: &[FormatItem<'static>] = format_description!(".[subsecond digits:6]");

/// Returns the current time in the offset selected by `flags`.
///
/// The local offset is used unless [`LineFlags::UTC`] is set. When the local
/// offset cannot be determined (for example on platforms where querying it
/// from a multi-threaded process is unsound) the timestamp falls back to UTC.
#[must_use]
pub fn current_timestamp(flags: LineFlags) -> OffsetDateTime {
    if flags.contains(LineFlags::UTC) {
        OffsetDateTime::now_utc()
    } else {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

/// Appends the header for one line to `out`.
pub(crate) fn render_header(
    out: &mut Vec<u8>,
    prefix: &str,
    flags: LineFlags,
    call_site: &CallSite,
    now: OffsetDateTime,
) -> io::Result<()> {
    let prefix_first = !flags.contains(LineFlags::MSG_PREFIX);
    if prefix_first {
        out.extend_from_slice(prefix.as_bytes());
    }

    let has_date = flags.contains(LineFlags::DATE);
    if has_date || flags.has_time() {
        let now = if flags.contains(LineFlags::UTC) {
            now.to_offset(UtcOffset::UTC)
        } else {
            now
        };

        if has_date {
            now.format_into(out, DATE_FORMAT).map_err(io::Error::other)?;
        }
        if flags.has_time() {
            now.format_into(out, TIME_FORMAT).map_err(io::Error::other)?;
            if flags.contains(LineFlags::MICROSECONDS) {
                now.format_into(out, MICROSECONDS_FORMAT)
                    .map_err(io::Error::other)?;
            }
            out.push(b' ');
        }
    }

    if flags.has_call_site() {
        let file = if flags.contains(LineFlags::SHORT_FILE) {
            call_site.short_file()
        } else {
            call_site.file()
        };
        write!(out, "{file}:{}: ", call_site.line())?;
    }

    if !prefix_first {
        out.extend_from_slice(prefix.as_bytes());
    }
    Ok(())
}

//! crates/logging-sink/src/flags.rs
//! Header flags controlling which annotations precede each logged line.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// Bitfield selecting the header fields a [`LineLogger`](crate::LineLogger) renders.
///
/// The flag set mirrors the classic line-logger layout: an optional date and
/// time, an optional source location, and a switch that moves the configured
/// prefix from the start of the line to just before the message body. Flags are
/// combined with `|`:
///
/// ```
/// use logging_sink::LineFlags;
///
/// let flags = LineFlags::STANDARD | LineFlags::SHORT_FILE;
/// assert!(flags.contains(LineFlags::DATE));
/// assert!(flags.has_call_site());
/// assert!(!LineFlags::STANDARD.has_call_site());
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LineFlags {
    bits: u8,
}

impl LineFlags {
    const fn new(bits: u8) -> Self {
        Self { bits }
    }

    /// No header fields; only the prefix and the message are written.
    pub const EMPTY: Self = Self::new(0);
    /// Local date rendered as `YYYY/MM/DD`.
    pub const DATE: Self = Self::new(1 << 0);
    /// Local time rendered as `HH:MM:SS`.
    pub const TIME: Self = Self::new(1 << 1);
    /// Microsecond resolution appended to the time as `.uuuuuu`. Implies [`TIME`](Self::TIME).
    pub const MICROSECONDS: Self = Self::new(1 << 2);
    /// Full source path and line number of the call site.
    pub const LONG_FILE: Self = Self::new(1 << 3);
    /// Final path component and line number of the call site. Overrides [`LONG_FILE`](Self::LONG_FILE).
    pub const SHORT_FILE: Self = Self::new(1 << 4);
    /// Render timestamps in UTC rather than the local offset.
    pub const UTC: Self = Self::new(1 << 5);
    /// Move the prefix from the beginning of the line to the start of the message.
    pub const MSG_PREFIX: Self = Self::new(1 << 6);
    /// Initial values for a standard logger: date and time.
    pub const STANDARD: Self = Self::new(Self::DATE.bits | Self::TIME.bits);

    const KNOWN_MASK: u8 = Self::DATE.bits
        | Self::TIME.bits
        | Self::MICROSECONDS.bits
        | Self::LONG_FILE.bits
        | Self::SHORT_FILE.bits
        | Self::UTC.bits
        | Self::MSG_PREFIX.bits;

    /// Builds a flag set from raw bits, discarding bits that have no meaning.
    #[must_use]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self::new(bits & Self::KNOWN_MASK)
    }

    /// Returns the raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// Returns `true` when no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Checks whether all flags in `other` are set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Returns the union of both flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::new(self.bits | other.bits)
    }

    /// Returns the flags present in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self::new(self.bits & other.bits)
    }

    /// Returns `self` with every flag of `other` cleared.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self::new(self.bits & !other.bits)
    }

    /// Reports whether a time-of-day field is rendered.
    #[must_use]
    pub const fn has_time(self) -> bool {
        self.bits & (Self::TIME.bits | Self::MICROSECONDS.bits) != 0
    }

    /// Reports whether a `file:line` annotation is rendered.
    #[must_use]
    pub const fn has_call_site(self) -> bool {
        self.bits & (Self::SHORT_FILE.bits | Self::LONG_FILE.bits) != 0
    }

    const NAMES: [(Self, &'static str); 7] = [
        (Self::DATE, "DATE"),
        (Self::TIME, "TIME"),
        (Self::MICROSECONDS, "MICROSECONDS"),
        (Self::LONG_FILE, "LONG_FILE"),
        (Self::SHORT_FILE, "SHORT_FILE"),
        (Self::UTC, "UTC"),
        (Self::MSG_PREFIX, "MSG_PREFIX"),
    ];
}

impl fmt::Debug for LineFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineFlags({self})")
    }
}

impl fmt::Display for LineFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("EMPTY");
        }

        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl BitOr for LineFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for LineFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for LineFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl BitAndAssign for LineFlags {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl From<LineFlags> for u8 {
    fn from(flags: LineFlags) -> Self {
        flags.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_combines_date_and_time() {
        assert_eq!(LineFlags::STANDARD, LineFlags::DATE | LineFlags::TIME);
        assert_eq!(LineFlags::STANDARD.bits(), 0b11);
    }

    #[test]
    fn microseconds_implies_time_field() {
        assert!(LineFlags::MICROSECONDS.has_time());
        assert!(LineFlags::TIME.has_time());
        assert!(!LineFlags::DATE.has_time());
    }

    #[test]
    fn call_site_requires_a_file_flag() {
        assert!(LineFlags::SHORT_FILE.has_call_site());
        assert!(LineFlags::LONG_FILE.has_call_site());
        assert!(!(LineFlags::STANDARD | LineFlags::UTC).has_call_site());
    }

    #[test]
    fn from_bits_truncate_drops_unknown_bits() {
        let flags = LineFlags::from_bits_truncate(0xff);
        assert_eq!(flags.bits(), 0x7f);
        assert!(flags.contains(LineFlags::MSG_PREFIX));
    }

    #[test]
    fn difference_clears_selected_flags() {
        let flags = (LineFlags::STANDARD | LineFlags::SHORT_FILE).difference(LineFlags::SHORT_FILE);
        assert_eq!(flags, LineFlags::STANDARD);
    }

    #[test]
    fn assign_operators_update_in_place() {
        let mut flags = LineFlags::DATE;
        flags |= LineFlags::UTC;
        assert!(flags.contains(LineFlags::UTC));
        flags &= LineFlags::UTC;
        assert_eq!(flags, LineFlags::UTC);
    }

    #[test]
    fn display_lists_flag_names() {
        let flags = LineFlags::STANDARD | LineFlags::SHORT_FILE;
        assert_eq!(flags.to_string(), "DATE | TIME | SHORT_FILE");
        assert_eq!(LineFlags::EMPTY.to_string(), "EMPTY");
        assert_eq!(format!("{:?}", LineFlags::UTC), "LineFlags(UTC)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_raw_bits() {
        let json = serde_json::to_string(&LineFlags::STANDARD).expect("serialize");
        assert_eq!(json, "3");
        let parsed: LineFlags = serde_json::from_str("16").expect("deserialize");
        assert_eq!(parsed, LineFlags::SHORT_FILE);
    }
}

//! Data parsing helpers.
//!
//! Parse dates, clock times, and lookup keys from their string
//! representations.  The functions return plain tuples so that the typed
//! wrappers in `hd-time` and `hd-directory` can apply their own range checks.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.  The year must have exactly four
/// digits and month/day exactly two.
pub fn parse_iso_date(s: &str) -> Option<(i32, u8, u8)> {
    let s = s.trim();
    let mut parts = s.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return None;
    }
    if !(y.bytes().chain(m.bytes()).chain(d.bytes())).all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((y.parse().ok()?, m.parse().ok()?, d.parse().ok()?))
}

/// Parse a 24-hour clock time `H:MM` or `HH:MM`, optionally followed by
/// `:SS` which must be `00`.
///
/// Returns `(hour, minute)` on success.
pub fn parse_clock_time(s: &str) -> Option<(u8, u8)> {
    let s = s.trim();
    let mut parts = s.split(':');
    let (h, m) = (parts.next()?, parts.next()?);
    match parts.next() {
        None => {}
        Some("00") if parts.next().is_none() => {}
        Some(_) => return None,
    }
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return None;
    }
    if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u8 = h.parse().ok()?;
    let minute: u8 = m.parse().ok()?;
    (hour < 24 && minute < 60).then_some((hour, minute))
}

/// Normalise a lookup key: surrounding whitespace removed, lower-cased.
///
/// Team names, attribute names, schedule types, and record ids are all
/// compared through this function.
pub fn normalize_key(s: &str) -> String {
    s.trim().to_lowercase()
}

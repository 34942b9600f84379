//! Best-effort detection of an event date inside an image payload.
//!
//! Poster images frequently carry their date as rendered text; uncompressed
//! regions and metadata keep those glyphs as plain ASCII. The scanner pulls
//! printable ASCII runs out of the decoded bytes and matches numeric dates
//! (`2024-03-15`, `2024/03/15`, `15-03-2024`) and month-name forms
//! (`March 15, 2024`, `15 March 2024`). The first plausible date wins.

use chrono::NaiveDate;

/// Years outside this window are treated as noise, not dates.
const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2100;

/// Shorter runs are overwhelmingly compression noise.
const MIN_RUN_LEN: usize = 6;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Scan decoded image bytes for a plausible event date.
#[must_use]
pub fn scan_for_date(bytes: &[u8]) -> Option<NaiveDate> {
    printable_runs(bytes)
        .into_iter()
        .find_map(|run| find_date(&run))
}

/// Find a date inside a single text fragment.
#[must_use]
pub fn find_date(text: &str) -> Option<NaiveDate> {
    numeric_date(text).or_else(|| month_name_date(text))
}

/// Runs of printable ASCII of at least [`MIN_RUN_LEN`] characters.
fn printable_runs(bytes: &[u8]) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current = String::new();
    for &byte in bytes {
        if (0x20..=0x7e).contains(&byte) {
            current.push(byte as char);
        } else {
            if current.len() >= MIN_RUN_LEN {
                runs.push(std::mem::take(&mut current));
            }
            current.clear();
        }
    }
    if current.len() >= MIN_RUN_LEN {
        runs.push(current);
    }
    runs
}

fn make_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// A run of ASCII digits with its numeric value.
#[derive(Clone, Copy)]
struct Number {
    value: u32,
    digits: usize,
}

/// Read a digit group of at most `max` digits starting at `pos`.
///
/// Rejects groups that keep running past `max` digits (phone numbers,
/// checksums) rather than truncating them.
fn digit_group(bytes: &[u8], pos: usize, max: usize) -> Option<(Number, usize)> {
    let mut end = pos;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let digits = end - pos;
    if digits == 0 || digits > max {
        return None;
    }
    let value = std::str::from_utf8(&bytes[pos..end])
        .ok()?
        .parse::<u32>()
        .ok()?;
    Some((Number { value, digits }, end))
}

fn numeric_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    for start in 0..bytes.len() {
        if !bytes[start].is_ascii_digit() {
            continue;
        }
        if start > 0 && bytes[start - 1].is_ascii_digit() {
            continue;
        }
        if let Some(date) = numeric_date_at(bytes, start) {
            return Some(date);
        }
    }
    None
}

fn numeric_date_at(bytes: &[u8], start: usize) -> Option<NaiveDate> {
    let (first, pos) = digit_group(bytes, start, 4)?;
    let sep = *bytes.get(pos)?;
    if !matches!(sep, b'-' | b'/' | b'.') {
        return None;
    }
    let (second, pos) = digit_group(bytes, pos + 1, 2)?;
    if *bytes.get(pos)? != sep {
        return None;
    }
    let (third, _) = digit_group(bytes, pos + 1, 4)?;

    if first.digits == 4 && third.digits <= 2 {
        // YYYY-MM-DD
        return make_date(first.value.try_into().ok()?, second.value, third.value);
    }
    if third.digits == 4 && first.digits <= 2 {
        let year = third.value.try_into().ok()?;
        // Day-first when unambiguous, month-first fallback.
        return make_date(year, second.value, first.value)
            .or_else(|| make_date(year, first.value, second.value));
    }
    None
}

fn month_name_date(text: &str) -> Option<NaiveDate> {
    let lower = text.to_ascii_lowercase();
    // Earliest match position wins, not earliest month in the year.
    let mut best: Option<(usize, NaiveDate)> = None;
    for (index, name) in MONTHS.iter().enumerate() {
        let month = u32::try_from(index).ok()? + 1;
        for variant in [*name, &name[..3]] {
            let mut search = 0;
            while let Some(found) = lower[search..].find(variant) {
                let at = search + found;
                search = at + 1;
                if !word_bounded(&lower, at, variant.len()) {
                    continue;
                }
                if let Some(date) = date_around(&lower, at, at + variant.len(), month) {
                    if best.is_none_or(|(offset, _)| at < offset) {
                        best = Some((at, date));
                    }
                    break;
                }
            }
        }
    }
    best.map(|(_, date)| date)
}

/// Whether the match at `at..at + len` is not embedded in a longer word.
fn word_bounded(text: &str, at: usize, len: usize) -> bool {
    let bytes = text.as_bytes();
    let before_ok = at == 0 || !bytes[at - 1].is_ascii_alphabetic();
    let after_ok = bytes
        .get(at + len)
        .is_none_or(|b| !b.is_ascii_alphabetic());
    before_ok && after_ok
}

/// Assemble a full date from the numbers around a month-name match.
fn date_around(text: &str, start: usize, end: usize, month: u32) -> Option<NaiveDate> {
    let after = numbers_after(&text[end..]);
    let before = number_before(&text[..start]);

    // "march 15, 2024"
    if let [day, year, ..] = after[..] {
        if (1..=31).contains(&day.value) && year.digits == 4 {
            return make_date(year.value.try_into().ok()?, month, day.value);
        }
    }
    // "15 march 2024"
    if let (Some(day), Some(year)) = (before, after.first()) {
        if (1..=31).contains(&day.value) && year.digits == 4 {
            return make_date(year.value.try_into().ok()?, month, day.value);
        }
    }
    None
}

/// Up to two number tokens from the first characters after a month name.
fn numbers_after(text: &str) -> Vec<Number> {
    let bytes = text.as_bytes();
    let mut numbers = Vec::new();
    let mut pos = 0;
    while pos < bytes.len().min(16) && numbers.len() < 2 {
        if bytes[pos].is_ascii_digit() {
            match digit_group(bytes, pos, 4) {
                Some((number, end)) => {
                    numbers.push(number);
                    pos = end;
                }
                None => break,
            }
        } else if matches!(bytes[pos], b' ' | b',' | b'.' | b'-') {
            pos += 1;
        } else {
            break;
        }
    }
    numbers
}

/// The number token immediately preceding a month name, if any.
fn number_before(text: &str) -> Option<Number> {
    let bytes = text.as_bytes();
    let mut end = bytes.len();
    while end > 0 && matches!(bytes[end - 1], b' ' | b',') {
        end -= 1;
    }
    let mut start = end;
    while start > 0 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }
    if start == end {
        return None;
    }
    digit_group(bytes, start, 4).map(|(number, _)| number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Wrap a text fragment in binary junk the way a decoded image would.
    fn noisy(text: &str) -> Vec<u8> {
        let mut bytes = vec![0x89, 0x50, 0x4e, 0x47, 0x00, 0x01, 0x02];
        bytes.extend_from_slice(text.as_bytes());
        bytes.extend_from_slice(&[0xff, 0xfe, 0x00]);
        bytes
    }

    #[test]
    fn should_find_iso_date() {
        let bytes = noisy("LIVE AT THE FORUM 2024-03-15 TICKETS AT THE DOOR");
        assert_eq!(scan_for_date(&bytes), Some(date(2024, 3, 15)));
    }

    #[test]
    fn should_find_slash_separated_date() {
        let bytes = noisy("doors open 2025/07/01 8pm");
        assert_eq!(scan_for_date(&bytes), Some(date(2025, 7, 1)));
    }

    #[test]
    fn should_find_day_first_date() {
        let bytes = noisy("festival 15-03-2024 main stage");
        assert_eq!(scan_for_date(&bytes), Some(date(2024, 3, 15)));
    }

    #[test]
    fn should_fall_back_to_month_first_when_day_first_is_invalid() {
        // 03/25 is not a valid day/month pair, 25 March is.
        let bytes = noisy("opening 03/25/2024 downtown");
        assert_eq!(scan_for_date(&bytes), Some(date(2024, 3, 25)));
    }

    #[test]
    fn should_find_month_name_then_day_and_year() {
        let bytes = noisy("SUMMER FESTIVAL March 15, 2024 RIVERSIDE");
        assert_eq!(scan_for_date(&bytes), Some(date(2024, 3, 15)));
    }

    #[test]
    fn should_find_day_before_month_name() {
        let bytes = noisy("konzert 15 March 2024 einlass 19h");
        assert_eq!(scan_for_date(&bytes), Some(date(2024, 3, 15)));
    }

    #[test]
    fn should_find_abbreviated_month_name() {
        let bytes = noisy("GRAND OPENING Mar 15 2024");
        assert_eq!(scan_for_date(&bytes), Some(date(2024, 3, 15)));
    }

    #[test]
    fn should_prefer_earlier_position_over_earlier_month_name() {
        // April appears first in the text even though January sorts first.
        let bytes = noisy("festival April 5, 2024 rescheduled from January 9, 2024");
        assert_eq!(scan_for_date(&bytes), Some(date(2024, 4, 5)));
    }

    #[test]
    fn should_not_match_month_inside_a_word() {
        let bytes = noisy("marching band 15 2024 parade");
        assert_eq!(scan_for_date(&bytes), None);
    }

    #[test]
    fn should_ignore_years_outside_plausible_window() {
        let bytes = noisy("serial 9999-01-01 batch 0123-05-06");
        assert_eq!(scan_for_date(&bytes), None);
    }

    #[test]
    fn should_ignore_invalid_calendar_dates() {
        let bytes = noisy("code 2024-02-30 but also 2024-02-29 works");
        assert_eq!(scan_for_date(&bytes), Some(date(2024, 2, 29)));
    }

    #[test]
    fn should_not_truncate_longer_digit_runs() {
        let bytes = noisy("phone 555-12-34567 order 20240-11-22");
        assert_eq!(scan_for_date(&bytes), None);
    }

    #[test]
    fn should_return_none_for_pure_binary() {
        let bytes: Vec<u8> = (0u8..=19).cycle().take(400).collect();
        assert_eq!(scan_for_date(&bytes), None);
    }

    #[test]
    fn should_skip_short_printable_runs() {
        // "24-03" is below the minimum run length.
        let mut bytes = vec![0x00];
        bytes.extend_from_slice(b"24-03");
        bytes.push(0x00);
        assert_eq!(scan_for_date(&bytes), None);
    }
}

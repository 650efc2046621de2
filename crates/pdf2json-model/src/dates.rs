//! PDF date string parsing.
//!
//! PDF dates look like `D:YYYYMMDDHHmmSSOHH'mm'` with every component after
//! the year optional. Signature blocks carry these converted to ISO-8601.

/// Parse a PDF date string into an ISO-8601 string.
///
/// Missing time components default to zero; a missing offset is emitted as
/// `Z`. Returns `None` when the input does not start with a 4-digit year.
pub fn parse_pdf_date(raw: &str) -> Option<String> {
    let s = raw.strip_prefix("D:").unwrap_or(raw);
    let bytes = s.as_bytes();

    let digits = |range: std::ops::Range<usize>| -> Option<u32> {
        let part = bytes.get(range)?;
        if part.iter().all(u8::is_ascii_digit) {
            std::str::from_utf8(part).ok()?.parse().ok()
        } else {
            None
        }
    };

    // The timezone marker sits right after however many date/time components
    // are present, so scan for it; components past it belong to the offset.
    let tz_pos = bytes.iter().position(|b| matches!(b, b'+' | b'-' | b'Z'));
    let end = tz_pos.unwrap_or(bytes.len());
    let component = |range: std::ops::Range<usize>| -> Option<u32> {
        if range.end > end { None } else { digits(range) }
    };

    let year = component(0..4)?;
    let month = component(4..6).filter(|m| (1..=12).contains(m)).unwrap_or(1);
    let day = component(6..8).filter(|d| (1..=31).contains(d)).unwrap_or(1);
    let hour = component(8..10).filter(|h| *h < 24).unwrap_or(0);
    let minute = component(10..12).filter(|m| *m < 60).unwrap_or(0);
    let second = component(12..14).filter(|sec| *sec < 60).unwrap_or(0);

    let offset = match tz_pos {
        Some(pos) if bytes[pos] != b'Z' => {
            let sign = bytes[pos] as char;
            let oh = digits(pos + 1..pos + 3).unwrap_or(0);
            // Offset minutes follow an apostrophe: +09'00'
            let om = digits(pos + 4..pos + 6).unwrap_or(0);
            format!("{sign}{oh:02}:{om:02}")
        }
        _ => "Z".to_string(),
    };

    Some(format!(
        "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}{offset}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_date_with_utc_marker() {
        assert_eq!(
            parse_pdf_date("D:20240115093045Z").as_deref(),
            Some("2024-01-15T09:30:45Z")
        );
    }

    #[test]
    fn date_with_positive_offset() {
        assert_eq!(
            parse_pdf_date("D:20240115093045+09'00'").as_deref(),
            Some("2024-01-15T09:30:45+09:00")
        );
    }

    #[test]
    fn date_with_negative_offset() {
        assert_eq!(
            parse_pdf_date("D:20231201120000-05'30'").as_deref(),
            Some("2023-12-01T12:00:00-05:30")
        );
    }

    #[test]
    fn date_only_with_offset() {
        assert_eq!(
            parse_pdf_date("D:20240115+09'00'").as_deref(),
            Some("2024-01-15T00:00:00+09:00")
        );
    }

    #[test]
    fn offset_minutes_do_not_leak_into_seconds() {
        assert_eq!(
            parse_pdf_date("D:20240115+11'30'").as_deref(),
            Some("2024-01-15T00:00:00+11:30")
        );
    }

    #[test]
    fn date_and_hour_with_negative_offset() {
        assert_eq!(
            parse_pdf_date("D:2024011509-05'00'").as_deref(),
            Some("2024-01-15T09:00:00-05:00")
        );
    }

    #[test]
    fn date_without_time_defaults_to_midnight() {
        assert_eq!(
            parse_pdf_date("D:20240115").as_deref(),
            Some("2024-01-15T00:00:00Z")
        );
    }

    #[test]
    fn year_only() {
        assert_eq!(
            parse_pdf_date("D:2024").as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
    }

    #[test]
    fn missing_d_prefix_accepted() {
        assert_eq!(
            parse_pdf_date("20240115").as_deref(),
            Some("2024-01-15T00:00:00Z")
        );
    }

    #[test]
    fn garbage_returns_none() {
        assert_eq!(parse_pdf_date("not a date"), None);
        assert_eq!(parse_pdf_date(""), None);
        assert_eq!(parse_pdf_date("D:20"), None);
    }

    #[test]
    fn out_of_range_components_fall_back() {
        // Month 99 is invalid; fall back to January rather than failing.
        assert_eq!(
            parse_pdf_date("D:20249901").as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
    }
}

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the "1 September 2020" fragment inside whatever the sitting-date
/// cell carries (usually prefixed with a weekday and punctuation).
static DAY_MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})\s+([A-Za-z]+)\s+(\d{4})").unwrap());

/// Parse the sitting date out of an anchor cell.
///
/// Tries the human format the Votes and Proceedings print
/// ("Tuesday, 1 September 2020"), then ISO `YYYY-MM-DD`, then `DD/MM/YYYY`.
pub fn parse_sitting_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Some(caps) = DAY_MONTH_YEAR.captures(text) {
        let candidate = format!("{} {} {}", &caps[1], &caps[2], &caps[3]);
        for fmt in ["%d %B %Y", "%d %b %Y"] {
            if let Ok(date) = NaiveDate::parse_from_str(&candidate, fmt) {
                return Some(date);
            }
        }
    }

    for fmt in ["%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return Some(date);
        }
    }

    None
}

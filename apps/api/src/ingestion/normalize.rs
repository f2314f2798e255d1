//! Field normalization for raw spreadsheet cells: HTML description cleanup,
//! salary sniffing and relative posted-date formatting.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use regex::Regex;

use crate::models::job::DEFAULT_SALARY;

/// Cleaned descriptions longer than this are cut and suffixed with "...".
pub const DESCRIPTION_MAX_CHARS: usize = 200;

static RE_HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// Salary patterns in priority order. The first pattern matching anywhere wins.
static SALARY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\$[\d,]+\s*-\s*\$[\d,]+",         // $50,000 - $80,000
        r"\$[\d,]+k?\s*-\s*\$?[\d,]+k?",    // $50k - $80k
        r"₹[\d,]+\s*-\s*₹[\d,]+",           // ₹500,000 - ₹800,000
        r"INR\s*[\d,]+\s*-\s*[\d,]+",       // INR 500000 - 800000
        r"\b[\d,]+\s*LPA\b",                // 10 LPA
        r"\b[\d,]+\s*-\s*[\d,]+\s*LPA\b",   // 5 - 10 LPA
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Turns an HTML job description into a short plain-text blurb.
pub fn clean_description(html: &str) -> String {
    let mut text = RE_HTML_TAG.replace_all(html, "").into_owned();
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }
    let text = RE_WHITESPACE.replace_all(&text, " ");
    let text = text.trim();

    if text.chars().count() > DESCRIPTION_MAX_CHARS {
        let head: String = text.chars().take(DESCRIPTION_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Returns the first salary-looking substring, or "Competitive salary".
pub fn extract_salary(text: &str) -> String {
    SALARY_PATTERNS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_SALARY.to_string())
}

/// Renders a raw posted-date cell relative to `now`.
///
/// Only GMT timestamps are interpreted; any other non-empty text is passed
/// through as-is ("3 days ago" stays "3 days ago").
pub fn format_posted_date(raw: &str, now: DateTime<Utc>) -> String {
    if raw.is_empty() {
        return "Recently".to_string();
    }
    if !raw.contains("GMT") {
        return raw.to_string();
    }

    let Some(posted) = parse_gmt_timestamp(raw) else {
        return "Recently".to_string();
    };

    let elapsed_ms = (now - posted).num_milliseconds().unsigned_abs();
    let days = elapsed_ms.div_ceil(86_400_000);

    match days {
        1 => "1 day ago".to_string(),
        d if d < 7 => format!("{d} days ago"),
        d if d < 30 => format!("{} weeks ago", d / 7),
        d => format!("{} months ago", d / 30),
    }
}

/// Accepts the GMT forms seen in the sheet: RFC 2822
/// (`Mon, 02 Jun 2025 10:00:00 GMT`), JavaScript `Date#toString`
/// (`Mon Jun 02 2025 10:00:00 GMT+0530 (India Standard Time)`) and
/// `2025-06-02 10:00:00 GMT`.
fn parse_gmt_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    // Drop the "(Zone Name)" suffix JavaScript appends.
    let without_zone_name = raw.split(" (").next().unwrap_or(raw).trim();
    if let Ok(dt) =
        DateTime::<FixedOffset>::parse_from_str(without_zone_name, "%a %b %d %Y %H:%M:%S GMT%z")
    {
        return Some(dt.with_timezone(&Utc));
    }

    let bare = without_zone_name.strip_suffix("GMT")?.trim();
    ["%a %b %d %Y %H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(bare, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap()
    }

    fn rfc2822_days_ago(days: i64) -> String {
        (now() - Duration::days(days))
            .format("%a, %d %b %Y %H:%M:%S GMT")
            .to_string()
    }

    #[test]
    fn test_clean_strips_tags_and_entities() {
        let html = "<p>Build&nbsp;tools &amp; ship <b>fast</b></p>\n\n<ul><li>Rust &lt;3</li></ul>";
        assert_eq!(clean_description(html), "Build tools & ship fast Rust <3");
    }

    #[test]
    fn test_clean_decodes_quotes() {
        assert_eq!(
            clean_description("&quot;We&#39;re hiring&quot;"),
            "\"We're hiring\""
        );
    }

    #[test]
    fn test_clean_truncates_to_200_plus_ellipsis() {
        let long = "word ".repeat(100);
        let cleaned = clean_description(&long);
        assert_eq!(cleaned.chars().count(), DESCRIPTION_MAX_CHARS + 3);
        assert!(cleaned.ends_with("..."));
    }

    #[test]
    fn test_clean_keeps_exactly_200_chars() {
        let exact = "a".repeat(DESCRIPTION_MAX_CHARS);
        assert_eq!(clean_description(&exact), exact);
    }

    #[test]
    fn test_clean_truncation_is_char_based() {
        let long = "₹".repeat(250);
        let cleaned = clean_description(&long);
        assert_eq!(cleaned.chars().count(), DESCRIPTION_MAX_CHARS + 3);
    }

    #[test]
    fn test_clean_is_idempotent() {
        let lorem = format!("<p>{}</p>", "lorem ipsum ".repeat(40));
        let inputs = [
            "<div><h2>About</h2><p>We&#39;re a small&nbsp;team &amp; we   ship.</p></div>",
            "  plain text with   gaps  ",
            lorem.as_str(),
            "",
        ];
        for input in inputs {
            let once = clean_description(input);
            assert_eq!(clean_description(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_salary_usd_range() {
        assert_eq!(
            extract_salary("Pays $50,000 - $80,000 per year"),
            "$50,000 - $80,000"
        );
    }

    #[test]
    fn test_salary_k_suffix_range() {
        assert_eq!(extract_salary("Band: $120k-$150k + equity"), "$120k-$150k");
    }

    #[test]
    fn test_salary_rupee_and_inr() {
        assert_eq!(extract_salary("CTC ₹5,00,000 - ₹8,00,000"), "₹5,00,000 - ₹8,00,000");
        assert_eq!(extract_salary("INR 500000 - 800000 fixed"), "INR 500000 - 800000");
    }

    #[test]
    fn test_salary_lpa() {
        assert_eq!(extract_salary("Up to 12 LPA"), "12 LPA");
    }

    #[test]
    fn test_salary_lpa_range_hits_single_lpa_pattern_first() {
        // "n LPA" is listed before "n - n LPA", so the range loses.
        assert_eq!(extract_salary("5 - 10 LPA"), "10 LPA");
    }

    #[test]
    fn test_salary_usd_beats_lpa_regardless_of_position() {
        assert_eq!(
            extract_salary("India: 10 LPA. US: $90,000 - $120,000."),
            "$90,000 - $120,000"
        );
    }

    #[test]
    fn test_salary_default_sentinel() {
        assert_eq!(extract_salary("Great benefits"), DEFAULT_SALARY);
        assert_eq!(extract_salary(""), DEFAULT_SALARY);
    }

    #[test]
    fn test_date_empty_is_recently() {
        assert_eq!(format_posted_date("", now()), "Recently");
    }

    #[test]
    fn test_date_non_gmt_passthrough() {
        assert_eq!(format_posted_date("3 days ago", now()), "3 days ago");
        assert_eq!(format_posted_date("2025-06-01", now()), "2025-06-01");
    }

    #[test]
    fn test_date_unparseable_gmt_is_recently() {
        assert_eq!(format_posted_date("sometime GMT", now()), "Recently");
    }

    #[test]
    fn test_date_boundaries() {
        assert_eq!(format_posted_date(&rfc2822_days_ago(1), now()), "1 day ago");
        assert_eq!(format_posted_date(&rfc2822_days_ago(2), now()), "2 days ago");
        assert_eq!(format_posted_date(&rfc2822_days_ago(6), now()), "6 days ago");
        assert_eq!(format_posted_date(&rfc2822_days_ago(7), now()), "1 weeks ago");
        assert_eq!(format_posted_date(&rfc2822_days_ago(29), now()), "4 weeks ago");
        assert_eq!(format_posted_date(&rfc2822_days_ago(30), now()), "1 months ago");
        assert_eq!(format_posted_date(&rfc2822_days_ago(95), now()), "3 months ago");
    }

    #[test]
    fn test_date_partial_day_rounds_up() {
        let posted = (now() - Duration::hours(30))
            .format("%a, %d %b %Y %H:%M:%S GMT")
            .to_string();
        assert_eq!(format_posted_date(&posted, now()), "2 days ago");
    }

    #[test]
    fn test_date_javascript_to_string_form() {
        assert_eq!(
            format_posted_date("Sun Jun 29 2025 17:30:00 GMT+0530 (India Standard Time)", now()),
            "2 days ago"
        );
    }

    #[test]
    fn test_date_iso_like_gmt_form() {
        assert_eq!(format_posted_date("2025-06-24 12:00:00 GMT", now()), "1 weeks ago");
    }
}

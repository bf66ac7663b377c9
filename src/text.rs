use chrono::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Humanized "how long ago" phrase, e.g. `about 59 minutes ago`.
pub fn fuzzy_ago(ago: Duration) -> String {
    if ago < Duration::minutes(1) {
        return "less than a minute ago".to_string();
    }
    if ago < Duration::hours(1) {
        return about(ago.num_minutes(), "minute");
    }
    if ago < Duration::days(1) {
        return about(ago.num_hours(), "hour");
    }
    if ago < Duration::days(30) {
        return about(ago.num_days(), "day");
    }
    if ago < Duration::days(365) {
        return about(ago.num_days() / 30, "month");
    }
    about(ago.num_days() / 365, "year")
}

fn about(amount: i64, unit: &str) -> String {
    if amount == 1 {
        format!("about 1 {unit} ago")
    } else {
        format!("about {amount} {unit}s ago")
    }
}

/// Compact elapsed time: `34s`, `4m34s`, `1h2m`.
pub fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds().max(0);
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m{}s", secs / 60, secs % 60)
    } else {
        format!("{}h{}m", secs / 3600, (secs % 3600) / 60)
    }
}

/// Cuts `s` to at most `max_width` terminal columns, ending in `ellipsis`
/// when anything was dropped.
pub fn truncate(s: &str, max_width: usize, ellipsis: &str) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(ellipsis.width());
    let mut used = 0;
    let kept: String = s
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    format!("{kept}{ellipsis}")
}

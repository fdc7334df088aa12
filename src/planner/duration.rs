use std::sync::LazyLock;

use regex::Regex;

/// First "<number> <unit>" pair in a free-text duration.
static DURATION_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(hour|minute|min|hr)").ok());

/// Parse a free-text duration ("1 hour 30 minutes") into minutes.
///
/// Only the first number+unit pair counts. Unparseable input is 0.
pub fn parse_duration(text: &str) -> u32 {
    let Some(pattern) = DURATION_PATTERN.as_ref() else {
        return 0;
    };
    let Some(caps) = pattern.captures(text) else {
        return 0;
    };

    let value: u32 = match caps[1].parse() {
        Ok(v) => v,
        Err(_) => return 0,
    };
    let unit = caps[2].to_lowercase();

    if unit.starts_with("hour") || unit.starts_with("hr") {
        value.saturating_mul(60)
    } else {
        value
    }
}

/// Render minutes as "45 min", "2h" or "1h 30min".
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}min", hours, rest)
    }
}

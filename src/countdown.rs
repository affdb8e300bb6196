//! Time-to-deadline text for open expectations.

use chrono::Duration;

pub const VOTING_ENDED: &str = "Voting ended";

/// Relative text such as "in 7 days", or `"Voting ended"` once the
/// deadline (unix ms) has passed.
pub fn countdown_text(deadline: i64, now: i64) -> String {
    let remaining = deadline - now;
    if remaining <= 0 {
        return VOTING_ENDED.to_string();
    }
    format!("in {}", distance(Duration::milliseconds(remaining)))
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

fn rounded_div(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}

const MINUTES_IN_DAY: i64 = 24 * 60;
const MINUTES_IN_MONTH: i64 = 30 * MINUTES_IN_DAY;
const MINUTES_IN_TWO_MONTHS: i64 = 2 * MINUTES_IN_MONTH;

fn distance(remaining: Duration) -> String {
    let seconds = remaining.num_seconds();
    let minutes = rounded_div(seconds, 60);

    if minutes == 0 {
        return "less than a minute".to_string();
    }
    if minutes < 45 {
        return plural(minutes, "minute");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        return format!("about {}", plural(rounded_div(minutes, 60), "hour"));
    }
    if minutes < 42 * 60 {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        return plural(rounded_div(minutes, MINUTES_IN_DAY), "day");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        return format!("about {}", plural(rounded_div(minutes, MINUTES_IN_MONTH), "month"));
    }

    let months = minutes / MINUTES_IN_MONTH;
    if months < 12 {
        return plural(rounded_div(minutes, MINUTES_IN_MONTH), "month");
    }

    let years = months / 12;
    match months % 12 {
        0..=2 => format!("about {}", plural(years, "year")),
        3..=8 => format!("over {}", plural(years, "year")),
        _ => format!("almost {}", plural(years + 1, "year")),
    }
}

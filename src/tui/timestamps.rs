use chrono::{DateTime, Datelike, Utc};

/// Chat-list style timestamp tiers:
/// - same day: "14:22"
/// - yesterday: "Yesterday"
/// - within a week: weekday name, "Tuesday"
/// - same year: "Mar 5"
/// - otherwise: "Mar 5, 2023"
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_relative_to(timestamp, &Utc::now())
}

fn format_relative_to(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let days_apart = (now.date_naive() - timestamp.date_naive()).num_days();

    if days_apart <= 0 {
        timestamp.format("%H:%M").to_string()
    } else if days_apart == 1 {
        "Yesterday".to_string()
    } else if days_apart < 7 {
        timestamp.format("%A").to_string()
    } else if timestamp.year() == now.year() {
        timestamp.format("%b %-d").to_string()
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}

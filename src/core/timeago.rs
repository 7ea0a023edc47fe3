use chrono::{DateTime, Datelike, Duration, Utc};

/// Relative-time label for feed posts, e.g. "5m ago" or "2w ago"
///
/// Months are 30-day approximations and years 365-day, matching how the
/// feed cards have always rendered these labels. A `then` in the future
/// renders as "Just now".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);

    if seconds < 60 {
        return "Just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    let days = hours / 24;
    if days < 7 {
        return format!("{}d ago", days);
    }

    let weeks = days / 7;
    if weeks < 4 {
        return format!("{}w ago", weeks);
    }

    let months = days / 30;
    if months < 12 {
        return format!("{}mo ago", months);
    }

    format!("{}y ago", days / 365)
}

/// Conversation-list timestamp label
///
/// Clock time for today ("10:30 AM"), "Yesterday", a weekday abbreviation
/// within the last week, and a short date beyond that.
pub fn clock_label(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let then_date = then.date_naive();
    let now_date = now.date_naive();

    if then_date == now_date {
        return then.format("%-I:%M %p").to_string();
    }

    if then_date == now_date - Duration::days(1) {
        return "Yesterday".to_string();
    }

    if now_date - then_date < Duration::days(7) && then_date < now_date {
        return then.format("%a").to_string();
    }

    format!(
        "{}/{}/{}",
        then_date.month(),
        then_date.day(),
        then.format("%y")
    )
}

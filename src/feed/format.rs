use std::time::SystemTime;

/// Compact relative age for post rows: "now", "5m", "2h", "3d".
///
/// A timestamp in the future (clock skew on a user seed file) renders as
/// "now" rather than underflowing.
pub fn humanize(timestamp: SystemTime, now: SystemTime) -> String {
    let secs = now
        .duration_since(timestamp)
        .map(|age| age.as_secs())
        .unwrap_or(0);

    if secs < 60 {
        "now".to_string()
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86_400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86_400)
    }
}

/// Counter shorthand: 999 stays "999", 12400 becomes "12.4k".
pub fn compact_count(count: u64) -> String {
    if count < 1000 {
        count.to_string()
    } else if count < 10_000 {
        format!("{:.1}k", count as f64 / 1000.0)
    } else {
        format!("{}k", count / 1000)
    }
}

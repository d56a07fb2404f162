/// Seconds with four decimals below a minute, `Xm Ys` above.
pub fn format_seconds(secs: f64) -> String {
    let secs = secs.max(0.0);
    if secs < 60.0 {
        format!("{:.4}s", secs)
    } else if secs < 3600.0 {
        let whole = secs as u64;
        format!("{}m {}s", whole / 60, whole % 60)
    } else {
        let whole = secs as u64;
        format!("{}h {}m", whole / 3600, (whole % 3600) / 60)
    }
}

pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

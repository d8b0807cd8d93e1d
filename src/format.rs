pub const NAME_WIDTH: usize = 24;
const NAME_KEEP: usize = NAME_WIDTH - ELLIPSIS.len();
const ELLIPSIS: &str = "...";

const MB: u64 = 1024 * 1024;
const GB: u64 = 1024 * 1024 * 1024;

/// Fits a process name into the name column, counting characters rather
/// than bytes.
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        return name.to_string();
    }
    let mut out: String = name.chars().take(NAME_KEEP).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Whole megabytes, truncated.
pub fn bytes_to_mb(bytes: u64) -> u64 {
    bytes / MB
}

/// Whole gigabytes, truncated.
pub fn bytes_to_gb(bytes: u64) -> u64 {
    bytes / GB
}

/// `part / whole` as a percentage clamped to [0, 100]; zero when `whole` is zero.
pub fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 100.0).clamp(0.0, 100.0)
}

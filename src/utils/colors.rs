/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Remove ANSI escapes, e.g. before measuring display width.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Billable entries in green, non-billable in yellow.
pub fn colorize_status(label: &str, billable: bool) -> String {
    if billable {
        format!("{GREEN}{label}{RESET}")
    } else {
        format!("{YELLOW}{label}{RESET}")
    }
}

/// Dashboard URLs: grey placeholder when none has been generated yet.
pub fn colorize_url(url: Option<&str>) -> String {
    match url {
        Some(u) if !u.trim().is_empty() => format!("{CYAN}{u}{RESET}"),
        _ => format!("{GREY}--{RESET}"),
    }
}

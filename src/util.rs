use chrono::Utc;

/// Logs one line to stdout as `[<utc> PLANEVEC] <message>`.
#[macro_export]
macro_rules! vprintln {
    ($($arg:tt)*) => {
        println!("{} {}", $crate::util::log_prefix(), format_args!($($arg)*))
    };
}

/// Same as `vprintln!`, on stderr.
#[macro_export]
macro_rules! veprintln {
    ($($arg:tt)*) => {
        eprintln!("{} {}", $crate::util::log_prefix(), format_args!($($arg)*))
    };
}

/// UTC ISO 8601 formatted string, second precision.
pub fn get_utc() -> String {
    let now = Utc::now();
    now.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// The `[<utc> PLANEVEC]` tag every log line starts with.
pub fn log_prefix() -> String {
    format!("[{} PLANEVEC]", get_utc())
}

/// Prefixes each line of `text` separately.
pub fn prefixed_lines(text: &str) -> Vec<String> {
    let prefix = log_prefix();
    text.lines()
        .map(|line| format!("{} {}", prefix, line))
        .collect()
}

/// Logs multi-line text, one prefixed line at a time.
pub fn log_lines(text: &str) {
    for line in prefixed_lines(text) {
        println!("{}", line);
    }
}

use regex::Regex;
use std::sync::OnceLock;

/// Matches the leading dotted-decimal address token of an access-log line.
///
/// Example:
///   10.0.0.1 - - [15/Jan/2024:10:30:00 +0000] "GET /home HTTP/1.1" 200 512
static ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches the quoted HTTP request line anywhere in the line and captures
/// the request path.
static ENDPOINT_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches a failed login attempt: leading address, "POST /login HTTP..."
/// request line, status 401.
static FAILED_LOGIN_REGEX: OnceLock<Regex> = OnceLock::new();

fn address_regex() -> &'static Regex {
    ADDRESS_REGEX.get_or_init(|| {
        // Anchored to line start so addresses appearing later in the line
        // (request bodies, headers) never match.
        Regex::new(r"^([\d.]+) ").expect("hard-coded regex should always compile")
    })
}

fn endpoint_regex() -> &'static Regex {
    ENDPOINT_REGEX.get_or_init(|| {
        Regex::new(r#""[A-Z]+ (/\S*) HTTP"#).expect("hard-coded regex should always compile")
    })
}

fn failed_login_regex() -> &'static Regex {
    FAILED_LOGIN_REGEX.get_or_init(|| {
        Regex::new(r#"^([\d.]+).*"POST /login HTTP.*" 401"#)
            .expect("hard-coded regex should always compile")
    })
}

/// Extract the leading address token, if the line starts with one.
pub fn address(line: &str) -> Option<&str> {
    address_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the request path from the quoted HTTP request line, if present.
///
/// The path must begin with `/`; method and protocol version are matched
/// but discarded.
pub fn endpoint(line: &str) -> Option<&str> {
    endpoint_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the source address of a failed login attempt.
///
/// A line qualifies only when it starts with an address token, carries a
/// `POST /login HTTP...` request line, and reports status 401.
pub fn failed_login(line: &str) -> Option<&str> {
    failed_login_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

// ─── Unit Tests ──────────────────────────────────────────────────────────────

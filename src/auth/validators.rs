// src/auth/validators.rs
//! Signup credential validation

use regex::Regex;
use std::sync::OnceLock;

/// Minimum fullname length accepted at signup
pub const FULLNAME_MIN_LEN: usize = 3;

const PASSWORD_MIN_LEN: usize = 6;
const PASSWORD_MAX_LEN: usize = 20;

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$")
            .expect("email regex is valid")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// 6 to 20 characters with at least one digit, one lowercase and one
/// uppercase letter. Checked with explicit scans; the `regex` crate does
/// not support the lookahead form this rule is usually written with.
pub fn is_valid_password(password: &str) -> bool {
    let len = password.chars().count();
    len >= PASSWORD_MIN_LEN
        && len <= PASSWORD_MAX_LEN
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
}

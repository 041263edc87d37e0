// src/common/id_generator.rs
//! Random tokens, entity ids, and title slugs.
//!
//! Tokens use a lowercase alphanumeric alphabet so they can be embedded
//! directly in blog slugs and usernames without further normalization.

use rand::Rng;

const TOKEN_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random part of a user id
const USER_ID_LEN: usize = 12;

/// Length of the unique suffix appended to blog slugs
const BLOG_SUFFIX_LEN: usize = 12;

/// Generate a random token of the given length
pub fn generate_token(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..TOKEN_ALPHABET.len());
            TOKEN_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a user id (U_xxxxxxxxxxxx)
pub fn generate_user_id() -> String {
    format!("U_{}", generate_token(USER_ID_LEN))
}

/// Turn a blog title into a URL slug: every non-alphanumeric character
/// becomes a space, whitespace runs collapse to single hyphens, and the
/// result is lowercased.
pub fn slugify(title: &str) -> String {
    title
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Derive a unique blog id from a title: slug plus a random suffix, so two
/// blogs with identical titles still get distinct ids.
pub fn generate_blog_id(title: &str) -> String {
    format!("{}-{}", slugify(title), generate_token(BLOG_SUFFIX_LEN))
}

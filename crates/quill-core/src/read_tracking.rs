use sha2::{Digest, Sha256};

/// Derive the tracking cookie key for one post.
///
/// The key is opaque to clients: `read_` plus the truncated hex SHA-256 of
/// the post identity. The detail view checks the request's cookie jar for
/// this key, bumps the read counter when it is absent, and sets a boolean
/// marker under it in the response.
pub fn read_cookie_key(post_id: i64) -> String {
    let digest = Sha256::digest(format!("post:{post_id}"));
    let mut key = String::with_capacity(5 + 16);
    key.push_str("read_");
    for byte in &digest[..8] {
        key.push_str(&format!("{:02x}", byte));
    }
    key
}

#[cfg(test)]
mod tests {
    use super::read_cookie_key;

    #[test]
    fn keys_are_stable_and_distinct_per_post() {
        let a = read_cookie_key(1);
        let b = read_cookie_key(2);
        assert_eq!(a, read_cookie_key(1));
        assert_ne!(a, b);
        assert!(a.starts_with("read_"));
        assert_eq!(a.len(), "read_".len() + 16);
    }

    #[test]
    fn keys_are_cookie_name_safe() {
        let key = read_cookie_key(123_456);
        assert!(key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }
}

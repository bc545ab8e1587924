//! Shared-secret checks for the admin endpoint and the results view token.

/// Constant-time equality for shared secrets.
///
/// Always scans the full candidate so the comparison time does not reveal
/// how long a matching prefix was. Length difference still fails the check.
pub fn secrets_match(candidate: &str, expected: &str) -> bool {
    let a = candidate.as_bytes();
    let b = expected.as_bytes();
    if b.is_empty() {
        return a.is_empty();
    }
    let mut diff = a.len() ^ b.len();
    for (i, &byte) in a.iter().enumerate() {
        diff |= (byte ^ b[i % b.len()]) as usize;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_secrets_match() {
        assert!(secrets_match("hunter2", "hunter2"));
    }

    #[test]
    fn test_different_secrets_do_not_match() {
        assert!(!secrets_match("hunter2", "hunter3"));
    }

    #[test]
    fn test_prefix_is_not_enough() {
        assert!(!secrets_match("hunter", "hunter2"));
        assert!(!secrets_match("hunter2x", "hunter2"));
    }

    #[test]
    fn test_empty_candidate_fails_against_nonempty_secret() {
        assert!(!secrets_match("", "hunter2"));
    }

    #[test]
    fn test_empty_configured_secret_rejects_nonempty_candidate() {
        // must not panic when the expected secret has zero length
        assert!(!secrets_match("x", ""));
        assert!(!secrets_match("hunter2", ""));
    }

    #[test]
    fn test_two_empty_secrets_match() {
        assert!(secrets_match("", ""));
    }
}

//! Random credential generation for provisioned users.
//!
//! Provisioned users get a throwaway credential: login proceeds through the
//! role-login bypass, so nobody ever types the password back in.

use rand::Rng;

/// Alphanumeric characters used for email suffixes.
const ALNUM: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Characters used for generated passwords, including specials.
const PASSWORD_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()";

/// Default length of generated passwords.
pub const PASSWORD_LENGTH: usize = 24;

/// Length of the random suffix in placeholder emails.
pub const EMAIL_SUFFIX_LENGTH: usize = 6;

fn sample(charset: &[u8], len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect()
}

/// Generate a random alphanumeric suffix.
pub fn random_suffix(len: usize) -> String {
    sample(ALNUM, len)
}

/// Generate a strong random password.
pub fn generate_password(len: usize) -> String {
    sample(PASSWORD_CHARS, len)
}

/// Synthesize a filler unique email for a provisioned user:
/// `{login}_{6-character-random-suffix}@example.com`.
pub fn placeholder_email(login: &str) -> String {
    format!(
        "{}_{}@example.com",
        login,
        random_suffix(EMAIL_SUFFIX_LENGTH)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_suffix_length_and_charset() {
        let suffix = random_suffix(EMAIL_SUFFIX_LENGTH);
        assert_eq!(suffix.len(), EMAIL_SUFFIX_LENGTH);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_password_length() {
        let password = generate_password(PASSWORD_LENGTH);
        assert_eq!(password.len(), PASSWORD_LENGTH);
    }

    #[test]
    fn test_passwords_are_unique() {
        assert_ne!(
            generate_password(PASSWORD_LENGTH),
            generate_password(PASSWORD_LENGTH)
        );
    }

    #[test]
    fn test_placeholder_email_shape() {
        let email = placeholder_email("editor");
        assert!(email.starts_with("editor_"));
        assert!(email.ends_with("@example.com"));

        let local_part = email.strip_suffix("@example.com").unwrap();
        let suffix = local_part.strip_prefix("editor_").unwrap();
        assert_eq!(suffix.len(), EMAIL_SUFFIX_LENGTH);
    }
}

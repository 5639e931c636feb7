use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

const SALT_BYTES: usize = 16;
const TOKEN_BYTES: usize = 32;

/// SHA-256 of `password + salt`, hex encoded
pub fn hash_password(password: &str, salt: &str) -> String {
  let mut hasher = Sha256::new();
  hasher.update(password.as_bytes());
  hasher.update(salt.as_bytes());
  hex::encode(hasher.finalize())
}

pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
  hash_password(password, salt) == expected_hash
}

/// Generate a per-user salt (32 hex characters)
pub fn generate_salt() -> String {
  random_hex(SALT_BYTES)
}

/// Generate a login token (64 hex characters).
///
/// Tokens are handed to the client only; nothing stores or checks them.
pub fn generate_token() -> String {
  random_hex(TOKEN_BYTES)
}

fn random_hex(len: usize) -> String {
  let mut bytes = vec![0u8; len];
  OsRng.fill_bytes(&mut bytes);
  hex::encode(bytes)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hash_is_deterministic() {
    assert_eq!(hash_password("secret", "abc"), hash_password("secret", "abc"));
  }

  #[test]
  fn hash_matches_known_digest() {
    // sha256("password" + "salt") == sha256("passwordsalt")
    assert_eq!(
      hash_password("password", "salt"),
      "7a37b85c8918eac19a9089c0fa5a2ab4dce3f90528dcdeec108b23ddf3607b99"
    );
  }

  #[test]
  fn hash_changes_with_password_or_salt() {
    let base = hash_password("secret", "abc");
    assert_ne!(base, hash_password("secret!", "abc"));
    assert_ne!(base, hash_password("secret", "abd"));
  }

  #[test]
  fn verify_round_trip() {
    let salt = generate_salt();
    let hash = hash_password("hunter22", &salt);
    assert!(verify_password("hunter22", &salt, &hash));
    assert!(!verify_password("hunter23", &salt, &hash));
  }

  #[test]
  fn salt_and_token_shapes() {
    let salt = generate_salt();
    let token = generate_token();
    assert_eq!(salt.len(), 32);
    assert_eq!(token.len(), 64);
    assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(generate_token(), token);
  }
}

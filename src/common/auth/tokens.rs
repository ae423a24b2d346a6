use argon2::password_hash::rand_core::{OsRng, RngCore};

use super::password;

/// Length of the plaintext token handed to the user.
pub const VERIFICATION_TOKEN_LENGTH: usize = 64;

/// 32 random bytes, hex encoded.
pub fn generate_verification_token() -> String {
    let mut buff = [0_u8; VERIFICATION_TOKEN_LENGTH / 2];
    OsRng.fill_bytes(&mut buff);
    hex::encode(buff)
}

#[tracing::instrument(name = "Hashing verification token", skip(token))]
pub fn hash_token(token: &str) -> Result<String, argon2::password_hash::Error> {
    password::hash(token.as_bytes())
}

/// Checks through argon2's verifier, never by string equality.
pub fn verify_token(hashed_token: &str, token: &str) -> bool {
    password::verify_password(hashed_token, token.as_bytes()).is_ok()
}

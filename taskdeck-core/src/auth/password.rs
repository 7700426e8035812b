/// Password hashing using Argon2id
///
/// Hashes for the `users.password` column are produced here in PHC string
/// format, so the stored value carries its own algorithm parameters and salt.
///
/// # Parameters
///
/// - **Algorithm**: Argon2id
/// - **Memory**: 64 MB (65536 KB)
/// - **Iterations**: 3 passes
/// - **Parallelism**: 4 lanes
/// - **Output**: 32-byte hash
///
/// # Example
///
/// ```
/// use taskdeck_core::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("super_secret_password_123")?;
/// assert!(verify_password("super_secret_password_123", &hash)?);
/// assert!(!verify_password("wrong_password", &hash)?);
/// # Ok(())
/// # }
/// ```

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, ParamsBuilder, Version,
};

/// Error type for password hashing operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash password
    #[error("failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password
    #[error("failed to verify password: {0}")]
    VerifyError(String),

    /// Invalid password hash format
    #[error("invalid password hash format: {0}")]
    InvalidHash(String),
}

/// Hashes a password with Argon2id
///
/// Returns a PHC string such as
/// `$argon2id$v=19$m=65536,t=3,p=4$c2FsdA$hash...`. The salt is 16 random
/// bytes from the OS RNG, so hashing the same password twice yields
/// different strings.
///
/// # Errors
///
/// Returns [`PasswordError::HashError`] if hashing fails.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let params = ParamsBuilder::new()
        .m_cost(65536)
        .t_cost(3)
        .p_cost(4)
        .output_len(32)
        .build()
        .map_err(|e| PasswordError::HashError(format!("invalid parameters: {}", e)))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params);

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(format!("hash generation failed: {}", e)))?;

    Ok(password_hash.to_string())
}

/// Verifies a password against a stored hash
///
/// Comparison is constant-time. Returns `Ok(false)` for a wrong password;
/// an unparseable hash is an error, not a mismatch.
///
/// # Errors
///
/// Returns [`PasswordError::InvalidHash`] if the hash cannot be parsed and
/// [`PasswordError::VerifyError`] for other verification failures.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| PasswordError::InvalidHash(format!("failed to parse hash: {}", e)))?;

    // Parameters are embedded in the hash itself
    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(format!(
            "verification failed: {}",
            e
        ))),
    }
}

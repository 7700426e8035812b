/// Credential utilities
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
///
/// Session issuance and cookie handling live in the web frontend; this layer
/// only produces and checks the stored credential material.

pub mod password;

/// Generated identifiers
///
/// Entity ids are random 30-character lowercase alphanumeric strings and are
/// produced application-side so rows can be addressed before the insert
/// round-trips. Task display codes take the form `TASK-NNNN` and two-factor
/// codes are six-digit numbers.
///
/// # Example
///
/// ```
/// use taskdeck_core::ids;
///
/// let id = ids::generate_id();
/// assert_eq!(id.len(), 30);
///
/// let code = ids::generate_task_code();
/// assert!(code.starts_with("TASK-"));
/// ```

use rand::Rng;

/// Length of generated entity ids
pub const ID_LENGTH: usize = 30;

const ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random entity id (30 lowercase alphanumeric characters)
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();

    (0..ID_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..ID_CHARSET.len());
            ID_CHARSET[idx] as char
        })
        .collect()
}

/// Generates a display code for a task (`TASK-` plus four digits)
///
/// Codes are not guaranteed unique by construction; the `tasks.code` column
/// carries a UNIQUE constraint and a collision surfaces as a conflict.
pub fn generate_task_code() -> String {
    let mut rng = rand::thread_rng();

    format!("TASK-{:04}", rng.gen_range(0..10_000))
}

/// Generates a six-digit two-factor code (100000 through 999999)
pub fn generate_two_factor_code() -> String {
    let mut rng = rand::thread_rng();

    rng.gen_range(100_000..1_000_000).to_string()
}

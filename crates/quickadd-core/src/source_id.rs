//! Idempotency tokens sent as `source_id`.
//!
//! A token is the creation time in milliseconds followed by six random
//! characters, both in lowercase base 36: `m1x9k2ab-4fz0qe`. The API uses it to
//! recognise a retried submission of the same task.

use chrono::Utc;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 6;

/// Encode `n` in lowercase base 36.
pub fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while n > 0 {
        digits.push(ALPHABET[(n % 36) as usize] as char);
        n /= 36;
    }
    digits.iter().rev().collect()
}

/// Token for a submission made at `millis` since the Unix epoch.
pub fn generate_at(millis: u64, rng: &mut fastrand::Rng) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.usize(..ALPHABET.len())] as char)
        .collect();
    format!("{}-{}", to_base36(millis), suffix)
}

/// Fresh token for a submission made now.
pub fn generate() -> String {
    let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
    generate_at(millis, &mut fastrand::Rng::new())
}

//! Local record ID generation.
//!
//! New records (users, payment methods) get timestamp-derived string IDs
//! like `card_1724790000000_3`. A process-local counter breaks ties when two
//! records are created in the same millisecond, which is all the uniqueness
//! a single-device store needs.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generate a fresh record ID with the given prefix.
#[must_use]
pub fn generate(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}_{millis}_{seq}")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_carry_prefix() {
        let id = generate("card");
        assert!(id.starts_with("card_"));
    }

    #[test]
    fn rapid_generation_stays_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| generate("upi")).collect();
        assert_eq!(ids.len(), 1000);
    }
}

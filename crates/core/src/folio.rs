//! Folio generation: the human-facing ticket code assigned to every report.
//!
//! The code space (32^8) makes collisions unlikely, not impossible. The
//! storage layer enforces uniqueness and retries generation on conflict;
//! nothing here relies on probability alone.

use rand::Rng;

/// Prefix for every folio.
pub const FOLIO_PREFIX: &str = "WL-";

/// Random suffix length.
pub const FOLIO_SUFFIX_LEN: usize = 8;

/// Uppercase alphanumerics minus the easily confused 0/O and 1/I.
const FOLIO_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Generate a fresh folio, e.g. `WL-7KQ2M9XD`.
pub fn generate() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..FOLIO_SUFFIX_LEN)
        .map(|_| FOLIO_ALPHABET[rng.random_range(0..FOLIO_ALPHABET.len())] as char)
        .collect();
    format!("{FOLIO_PREFIX}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folio_has_expected_shape() {
        let folio = generate();
        assert!(folio.starts_with(FOLIO_PREFIX));
        assert_eq!(folio.len(), FOLIO_PREFIX.len() + FOLIO_SUFFIX_LEN);
        assert!(folio[FOLIO_PREFIX.len()..]
            .bytes()
            .all(|b| FOLIO_ALPHABET.contains(&b)));
    }

    #[test]
    fn folios_are_practically_unique() {
        let a = generate();
        let b = generate();
        // Not a guarantee, but two consecutive collisions in a 32^8 space
        // would indicate a broken RNG.
        assert_ne!(a, b);
    }
}

//! Fixed-width numeric identifier generation.
//!
//! # Invariants
//! - Generated ids are exactly [`ID_LEN`] ASCII digits, zero-padded.
//! - Generators make no uniqueness promise; the store rejects collisions at
//!   insert time with `AlreadyExists`.

use rand::Rng;

/// Number of digits in every course and student id.
pub const ID_LEN: usize = 8;

/// Size of the id space, `10^ID_LEN`.
pub const ID_SPACE: u32 = 100_000_000;

/// Source of new entity ids.
///
/// Injected into whichever component assigns ids so tests can force
/// deterministic values or collisions.
pub trait IdGenerator {
    fn generate(&self) -> String;
}

/// Draws ids uniformly from `[0, ID_SPACE)` using the thread-local CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        format_id(rand::thread_rng().gen_range(0..ID_SPACE))
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn generate(&self) -> String {
        (**self).generate()
    }
}

/// Renders a value from `[0, ID_SPACE)` as a zero-padded [`ID_LEN`]-digit
/// string.
pub(crate) fn format_id(value: u32) -> String {
    debug_assert!(value < ID_SPACE, "id value {value} outside id space");
    format!("{value:0width$}", width = ID_LEN)
}

#[cfg(test)]
mod tests {
    use super::{format_id, IdGenerator, RandomIdGenerator, ID_LEN};
    use std::collections::HashSet;

    #[test]
    fn format_id_zero_pads_to_fixed_width() {
        assert_eq!(format_id(0), "00000000");
        assert_eq!(format_id(42), "00000042");
        assert_eq!(format_id(99_999_999), "99999999");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "outside id space")]
    fn format_id_rejects_values_outside_id_space() {
        let _ = format_id(100_000_007);
    }

    #[test]
    fn random_ids_are_fixed_width_digits() {
        let generator = RandomIdGenerator;
        for _ in 0..256 {
            let id = generator.generate();
            assert_eq!(id.len(), ID_LEN);
            assert!(id.chars().all(|c| c.is_ascii_digit()), "bad id {id}");
        }
    }

    #[test]
    fn random_ids_rarely_repeat() {
        let generator = RandomIdGenerator;
        let ids: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();
        // 1000 draws from 10^8 collide with probability well under 1%.
        assert!(ids.len() >= 998);
    }
}

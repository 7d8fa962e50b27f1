//! Random password generation.
//!
//! A password is `length` independent draws, with replacement, from the pool
//! of the enabled character classes. Each draw picks an index uniformly from
//! `[0, pool.len())`.

use rand::Rng;

use crate::charset::ClassSet;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Please select at least one character set")]
    EmptyPool,

    #[error("Password length must be at least 1")]
    InvalidLength,
}

/// Generate a password using the operating system's random source.
pub fn generate(length: usize, classes: &ClassSet) -> Result<String, GenerateError> {
    generate_with(&mut rand::rngs::OsRng, length, classes)
}

/// Generate a password drawing indices from `rng`.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidLength`] for a zero length and
/// [`GenerateError::EmptyPool`] when no class is enabled.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    classes: &ClassSet,
) -> Result<String, GenerateError> {
    if length == 0 {
        return Err(GenerateError::InvalidLength);
    }

    let pool = classes.pool();
    if pool.is_empty() {
        return Err(GenerateError::EmptyPool);
    }

    log::debug!("generating {} characters from a pool of {}", length, pool.len());

    let out = (0..length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect();

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::CharacterClass;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn set(classes: &[CharacterClass]) -> ClassSet {
        classes.iter().copied().collect()
    }

    #[test]
    fn length_and_alphabet_hold_for_every_combination() {
        let mut rng = StdRng::seed_from_u64(7);

        // every non-empty subset of the four classes
        for mask in 1u8..16 {
            let classes: ClassSet = CharacterClass::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1u8 << *i) != 0)
                .map(|(_, c)| c)
                .collect();
            let pool = classes.pool();

            for length in 1..=20 {
                let pwd = generate_with(&mut rng, length, &classes).unwrap();
                assert_eq!(pwd.chars().count(), length);
                assert!(pwd.chars().all(|c| pool.contains(&c)), "{pwd:?} escapes pool");
            }
        }
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert_eq!(generate(8, &ClassSet::new()), Err(GenerateError::EmptyPool));
    }

    #[test]
    fn zero_length_is_rejected() {
        let classes = set(&[CharacterClass::Lowercase]);
        assert_eq!(generate(0, &classes), Err(GenerateError::InvalidLength));
    }

    #[test]
    fn numbers_only() {
        let pwd = generate(4, &set(&[CharacterClass::Numbers])).unwrap();
        assert_eq!(pwd.len(), 4);
        assert!(pwd.chars().all(|c| "0123456789".contains(c)));
    }

    #[test]
    fn uppercase_and_symbols() {
        let allowed = "ABCDEFGHIJKLMNOPQRSTUVWXYZ!@#$%^&*()_+<>?";
        let pwd = generate(10, &set(&[CharacterClass::Uppercase, CharacterClass::Symbols])).unwrap();
        assert_eq!(pwd.len(), 10);
        assert!(pwd.chars().all(|c| allowed.contains(c)));
    }

    #[test]
    fn repeated_calls_differ() {
        let classes = ClassSet::all();
        let first = generate(20, &classes).unwrap();
        let distinct = (0..5).any(|_| generate(20, &classes).unwrap() != first);
        assert!(distinct);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let classes = ClassSet::all();
        let a = generate_with(&mut StdRng::seed_from_u64(42), 16, &classes).unwrap();
        let b = generate_with(&mut StdRng::seed_from_u64(42), 16, &classes).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_pool_index_is_reachable() {
        let classes = set(&[CharacterClass::Numbers]);
        let mut rng = StdRng::seed_from_u64(1);
        let pwd = generate_with(&mut rng, 20, &classes).unwrap();
        let mut seen: Vec<char> = pwd.chars().collect();
        for _ in 0..50 {
            seen.extend(generate_with(&mut rng, 20, &classes).unwrap().chars());
        }
        assert!("0123456789".chars().all(|d| seen.contains(&d)));
    }
}

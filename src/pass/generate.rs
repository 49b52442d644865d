//! Password generation.

use rand::Rng;

use super::charset;
use super::config::GenerationConfig;

/// Generate a single password from the thread-local CSPRNG.
pub fn generate(config: &GenerationConfig) -> String {
    generate_with(config, &mut rand::rng())
}

/// Generate a single password.
///
/// One character is drawn from every enabled class's own pool, the rest come
/// from the combined pool, and the whole sequence is shuffled. Returns an empty
/// string when no class is enabled.
///
/// When `config.length` is smaller than the number of enabled classes the
/// result keeps one character per class and is longer than requested.
pub fn generate_with<R: Rng>(config: &GenerationConfig, rng: &mut R) -> String {
    let pools = charset::pools(config);
    let combined: Vec<char> = pools.iter().flat_map(|(_, p)| p.iter().copied()).collect();
    if combined.is_empty() {
        return String::new();
    }

    let mut chars: Vec<char> = Vec::with_capacity(config.length.max(pools.len()));
    chars.extend(
        pools
            .iter()
            .filter(|(_, pool)| !pool.is_empty())
            .map(|(_, pool)| random_char(pool, rng)),
    );

    for _ in chars.len()..config.length {
        chars.push(random_char(&combined, rng));
    }

    shuffle(&mut chars, rng);
    chars.into_iter().collect()
}

/// Generate `config.quantity` passwords. Index `i` is the `i`-th call.
pub fn generate_batch<R: Rng>(config: &GenerationConfig, rng: &mut R) -> Vec<String> {
    let passwords: Vec<String> = (0..config.quantity)
        .map(|_| generate_with(config, rng))
        .collect();
    tracing::debug!(
        count = passwords.len(),
        length = config.length,
        pool = charset::build(config).len(),
        "generated batch"
    );
    passwords
}

#[inline]
fn random_char<R: Rng>(pool: &[char], rng: &mut R) -> char {
    pool[rng.random_range(0..pool.len())]
}

/// Fisher-Yates: walk down from the last index, swapping each slot with a
/// uniformly chosen slot at or before it.
#[inline]
fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{AMBIGUOUS, CharClass, SIMILAR};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn none() -> GenerationConfig {
        GenerationConfig {
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: false,
            ..Default::default()
        }
    }

    #[test]
    fn empty_without_classes() {
        assert_eq!(generate_with(&none(), &mut rng()), "");
        assert_eq!(generate(&none()), "");
    }

    #[test]
    fn twenty_chars_with_every_class() {
        let config = GenerationConfig::default();
        let mut rng = rng();
        for _ in 0..200 {
            let pass = generate_with(&config, &mut rng);
            assert_eq!(pass.chars().count(), 20);
            for class in CharClass::ALL {
                assert!(
                    pass.chars().any(|c| CharClass::of(c) == class),
                    "{pass} is missing {class:?}"
                );
            }
        }
    }

    #[test]
    fn single_class_draws_only_from_that_pool() {
        let config = GenerationConfig {
            numbers: true,
            length: 64,
            ..none()
        };
        let pass = generate_with(&config, &mut rng());
        assert_eq!(pass.len(), 64);
        assert!(pass.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn exclusions_hold() {
        let config = GenerationConfig {
            length: 128,
            exclude_similar: true,
            exclude_ambiguous: true,
            ..Default::default()
        };
        let mut rng = rng();
        for _ in 0..50 {
            let pass = generate_with(&config, &mut rng);
            for c in pass.chars() {
                match CharClass::of(c) {
                    CharClass::Symbol => assert!(!AMBIGUOUS.contains(&c), "{c} in {pass}"),
                    _ => assert!(!SIMILAR.contains(&c), "{c} in {pass}"),
                }
            }
        }
    }

    #[test]
    fn short_length_overflows_to_one_per_class() {
        let config = GenerationConfig {
            length: 2,
            ..Default::default()
        };
        let pass = generate_with(&config, &mut rng());
        assert_eq!(pass.chars().count(), 4);
        let mut classes: Vec<_> = pass.chars().map(CharClass::of).collect();
        classes.sort();
        assert_eq!(classes, CharClass::ALL.to_vec());
    }

    #[test]
    fn zero_length_still_yields_required_chars() {
        let config = GenerationConfig {
            length: 0,
            lowercase: true,
            ..none()
        };
        assert_eq!(generate_with(&config, &mut rng()).len(), 1);
    }

    #[test]
    fn same_seed_same_output() {
        let config = GenerationConfig::default();
        assert_eq!(
            generate_with(&config, &mut rng()),
            generate_with(&config, &mut rng())
        );
    }

    #[test]
    fn batch_honours_quantity_and_order() {
        let config = GenerationConfig {
            quantity: 5,
            ..Default::default()
        };
        let batch = generate_batch(&config, &mut rng());
        assert_eq!(batch.len(), 5);

        let mut sequential = rng();
        let expected: Vec<String> = (0..5)
            .map(|_| generate_with(&config, &mut sequential))
            .collect();
        assert_eq!(batch, expected);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut items: Vec<u8> = (0..32).collect();
        shuffle(&mut items, &mut rng());
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..32).collect::<Vec<u8>>());
    }

    #[test]
    fn required_chars_are_not_pinned_to_the_front() {
        let config = GenerationConfig {
            length: 16,
            lowercase: true,
            symbols: true,
            ..none()
        };
        let mut rng = rng();
        let moved = (0..200)
            .map(|_| generate_with(&config, &mut rng))
            .any(|pass| pass.starts_with(|c: char| !c.is_ascii_lowercase()));
        assert!(moved);
    }
}

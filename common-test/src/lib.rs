use std::{env, sync::OnceLock};

use rand::{random, rngs::StdRng, SeedableRng};

pub const TEST_SEED_ENV: &str = "PLAYLIST_TEST_SEED";

static SEED: OnceLock<u64> = OnceLock::new();

fn seed() -> u64 {
    *SEED.get_or_init(|| {
        let seed = env::var(TEST_SEED_ENV)
            .ok()
            .and_then(|seed_var| seed_var.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {} (override with {})", seed, TEST_SEED_ENV);
        seed
    })
}

/// Test RNG seeded once per process, from `PLAYLIST_TEST_SEED` when set so a
/// failing run can be replayed.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(seed())
}

#[cfg(test)]
mod tests {
    use rand::RngCore;

    use crate::{seed, seeded_rng};

    #[test]
    fn test_seeded_rng_is_reproducible() {
        // Given
        let mut first = seeded_rng();
        let mut second = seeded_rng();

        // When
        let values = (first.next_u64(), second.next_u64());

        // Then
        assert_eq!(
            values.0, values.1,
            "Should produce the same stream for the same process seed"
        );
        assert_eq!(seed(), seed(), "Should keep one seed per process");
    }
}

//! Random source helpers.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_brigade::random::create_rng;
///
/// let a: u64 = create_rng(42).random();
/// let b: u64 = create_rng(42).random();
/// assert_eq!(a, b);
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a seeded RNG, falling back to a random seed.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

//! Random number selection for `GET /next`.

use rand::Rng;

/// Upper bound of the low range, picked half of the time.
const LOW_BOUND: u32 = 20;

/// Upper bound of the full range.
const FULL_BOUND: u32 = 100;

/// Pick a non-zero number below 100.
///
/// A coin flip chooses between `[0, 20)` and `[0, 100)`; zero is re-rolled.
/// Small numbers therefore come up noticeably more often than large ones.
pub fn random_number<R: Rng>(rng: &mut R) -> u32 {
    loop {
        let bound = if rng.random_bool(0.5) {
            LOW_BOUND
        } else {
            FULL_BOUND
        };
        let n = rng.random_range(0..bound);
        if n != 0 {
            return n;
        }
    }
}

//! Seed selection for the CLI's random sources.

use tracing::info;

/// SplitMix64 increment (the 64-bit golden ratio) used to space derived seeds.
const SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Returns `requested`, or a fresh seed drawn from OS entropy.
pub(super) fn resolve_seed(requested: Option<u64>) -> u64 {
    requested.unwrap_or_else(|| {
        let seed = rand::random();
        info!(seed, "no seed supplied; drew one from entropy");
        seed
    })
}

/// Derives an independent seed for sweep iteration `index`.
#[inline]
pub(super) fn mix_seed(base_seed: u64, index: usize) -> u64 {
    splitmix64(base_seed ^ ((index as u64 + 1).wrapping_mul(SEED_SPACING)))
}

#[inline]
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}

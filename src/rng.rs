// Deterministic generator for dataset sampling. The dataset must be byte
// reproducible across runs and platforms, so the generator is pinned here
// rather than taken from rand's default sources.
//
// Algorithm: 64-bit LCG advanced once per draw, with the PCG RXS-M-XS output
// permutation applied to the state. Reference: Melissa E. O'Neill, "PCG: A
// Family of Simple Fast Space-Efficient Statistically Good Algorithms for
// Random Number Generation".

use rand::{RngCore, SeedableRng};

const LCG_MULT: u64 = 6364136223846793005;
const LCG_ADD: u64 = 1442695040888963407;

/// Seeded generator behind every uniform draw in the sampler.
///
/// The seed is taken raw: `DatasetRng::new(s)` with the same `s` always
/// replays the same stream, which is what ties a dataset file to its seed
/// constant. Uniform `f64` draws go through `rand::Rng`, consuming exactly
/// one `next_u64` each.
#[derive(Clone, Copy, Debug)]
pub struct DatasetRng {
    state: u64,
}

impl DatasetRng {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RngCore for DatasetRng {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.state = LCG_MULT.wrapping_mul(self.state).wrapping_add(LCG_ADD);

        // RXS-M-XS: random xorshift, multiply, fixed xorshift
        let word = ((self.state >> ((self.state >> 59) + 5)) ^ self.state)
            .wrapping_mul(12605985483714917081);
        (word >> 43) ^ word
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut rest = dest;
        while rest.len() >= 8 {
            rest[..8].copy_from_slice(&self.next_u64().to_le_bytes());
            rest = &mut rest[8..];
        }
        if !rest.is_empty() {
            let bytes = self.next_u64().to_le_bytes();
            let n = rest.len();
            rest.copy_from_slice(&bytes[..n]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for DatasetRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed),
        }
    }
}

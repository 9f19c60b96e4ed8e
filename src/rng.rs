/// A small, deterministic xorshift64* generator wrapped so it can serve as entropy
/// source for `rand::seq::SliceRandom::shuffle` (`spec.md` §9 "PRNG adapter": "The
/// source wraps a custom PRNG into a standard-shuffle adapter").
///
/// Not cryptographically secure — it exists purely to give [`crate::local_search::dfs_opt2`]
/// reproducible, seed-determined swap orderings.
pub struct RandomAdaptor {
    state: u64,
}

impl RandomAdaptor {
    pub fn seed_from_u64(seed: u64) -> RandomAdaptor {
        // avoid an all-zero state, which is a fixed point of xorshift.
        let state = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        RandomAdaptor { state }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl rand::RngCore for RandomAdaptor {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        RandomAdaptor::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut filled = 0;
        while filled < dest.len() {
            let chunk = RandomAdaptor::next_u64(self).to_le_bytes();
            let n = (dest.len() - filled).min(8);
            dest[filled..filled + n].copy_from_slice(&chunk[..n]);
            filled += n;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

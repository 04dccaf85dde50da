use rand::{RngCore, SeedableRng};

use crate::Rng;

impl RngCore for &Rng {
    fn next_u32(&mut self) -> u32 {
        (self.u64() >> 32) as _
    }

    fn next_u64(&mut self) -> u64 {
        self.u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Rng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Rng::with_seed(u64::from_ne_bytes(seed))
    }
}

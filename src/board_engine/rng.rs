//! Mulberry32: the 32-bit generator every daily board is drawn from.
//!
//! The output sequence is a pure function of the 32-bit state, so a seed
//! reproduces the same boards on every platform. The generator plugs into
//! `rand` through [`RngCore`] / [`SeedableRng`], but the board shuffle reads
//! it through [`unit_f64`] rather than `Rng::gen`, because the reference
//! float conversion (`u32 / 2^32`) must be matched bit for bit.

use rand_core::{impls, Error, RngCore, SeedableRng};

const INCREMENT: u32 = 0x6D2B_79F5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: i32) -> Self {
        Mulberry32 { state: seed as u32 }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Mulberry32::new(i32::from_le_bytes(seed))
    }
}

/// Next value in `[0, 1)`, computed as `next_u32 / 2^32`.
pub fn unit_f64<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.next_u32()) / 4_294_967_296.0
}

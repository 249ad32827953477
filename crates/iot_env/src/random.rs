/// Source of uniform random indices used by the environment.
///
/// The environment samples its starting row and the malicious-report reward
/// through this trait, so tests can swap in a seeded generator or a fixed
/// script of indices.
pub trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

impl RandomSource for fastrand::Rng {
    fn index(&mut self, len: usize) -> usize {
        self.usize(..len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::{Fp, Fq};

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl RandomField for Fp {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

impl RandomField for Fq {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

//! Randomness seam for animation and evasion sampling.
//!
//! The browser feeds `js_sys::Math::random`; tests feed a seeded generator.
//! Both are just closures returning a unit sample.

/// Source of uniform samples in `[0, 1)`.
pub trait UnitSampler {
    fn sample(&mut self) -> f64;
}

impl<F> UnitSampler for F
where
    F: FnMut() -> f64,
{
    fn sample(&mut self) -> f64 {
        self()
    }
}

/// Uniform sample in `[min, max)`. Returns `min` when the range is empty.
pub fn sample_range<S: UnitSampler + ?Sized>(sampler: &mut S, min: f64, max: f64) -> f64 {
    if max <= min {
        return min;
    }
    min + (sampler.sample() * (max - min))
}

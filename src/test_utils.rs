use proptest::prelude::*;

/// The upper bound (exclusive) of keys generated by [`arbitrary_key()`].
pub(crate) const KEY_MAX: u64 = 64;

/// Generate keys from a small domain, encouraging multiple operations to act
/// on the same key.
pub(crate) fn arbitrary_key() -> impl Strategy<Value = u64> {
    0..KEY_MAX
}

/// Linear-feedback shift register based PRNG.
///
/// Generates 65,535 unique values before cycling.
#[derive(Debug, Clone)]
pub(crate) struct Lfsr(u16);

impl Default for Lfsr {
    fn default() -> Self {
        Self(42)
    }
}

impl Lfsr {
    pub(crate) fn new(seed: u16) -> Self {
        assert_ne!(seed, 0, "LFSR seed must be non-zero");
        Self(seed)
    }

    #[allow(clippy::should_implement_trait)]
    pub(crate) fn next(&mut self) -> u16 {
        let lsb = self.0 & 1;
        self.0 >>= 1;
        if lsb == 1 {
            self.0 ^= 0xD008;
        }
        self.0
    }

    /// Return a value within `1..=max`.
    pub(crate) fn next_in(&mut self, max: u16) -> u64 {
        (self.next() % max) as u64 + 1
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_lfsr_deterministic() {
        let a = (0..100).map({
            let mut r = Lfsr::new(7);
            move |_| r.next()
        });
        let b = (0..100).map({
            let mut r = Lfsr::new(7);
            move |_| r.next()
        });
        assert!(a.eq(b));
    }

    #[test]
    fn test_lfsr_unique() {
        let mut r = Lfsr::default();
        let values = (0..1_000).map(|_| r.next()).collect::<HashSet<_>>();
        assert_eq!(values.len(), 1_000);
    }

    #[test]
    fn test_next_in_bounds() {
        let mut r = Lfsr::default();
        for _ in 0..1_000 {
            let v = r.next_in(100);
            assert!((1..=100).contains(&v));
        }
    }
}

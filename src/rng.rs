//! Randomness for decoration scatter and button relocation.
//!
//! Not crypto secure. Seeded once from browser entropy (`crypto.getRandomValues`
//! via getrandom's `js` backend); tests use fixed seeds.

pub trait RandomSource {
    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Uniform index in `0..len`; `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }
}

#[derive(Clone, Debug)]
pub struct CardRng {
    inner: fastrand::Rng,
}

impl CardRng {
    pub fn with_seed(seed: u64) -> Self {
        Self { inner: fastrand::Rng::with_seed(seed) }
    }

    pub fn from_entropy() -> Self {
        let mut buf = [0u8; 8];
        match getrandom::getrandom(&mut buf) {
            Ok(()) => Self::with_seed(u64::from_le_bytes(buf)),
            Err(err) => {
                log::debug!("entropy unavailable ({err}); falling back to clock seed");
                let now = web_sys::window()
                    .and_then(|w| w.performance())
                    .map(|p| p.now())
                    .unwrap_or(0.0);
                Self::with_seed((now * 1000.0) as u64)
            }
        }
    }
}

impl RandomSource for CardRng {
    fn next_f64(&mut self) -> f64 {
        self.inner.f64()
    }

    fn index(&mut self, len: usize) -> usize {
        self.inner.usize(..len)
    }
}

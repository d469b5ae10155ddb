//! Variance generator — a pooled source of uniform [0, 1) draws.
//!
//! Draws are served from a fixed-size buffer consumed round-robin. The
//! contract is deliberately weak: each call returns some value previously
//! drawn uniformly at random, not necessarily freshly generated, and not
//! guaranteed independent from earlier draws once the buffer has wrapped.
//! The refill behavior at the wrap point is an explicit policy choice.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use orrery_core::constants::VARIANCE_POOL_SIZE;
use orrery_core::enums::RefreshPolicy;

/// Fixed-size pool of pre-drawn uniform samples.
#[derive(Debug, Clone)]
pub struct VariancePool {
    samples: Vec<f64>,
    cursor: usize,
    policy: RefreshPolicy,
}

impl VariancePool {
    /// Create a pool filled from `rng`.
    pub fn new(policy: RefreshPolicy, rng: &mut ChaCha8Rng) -> Self {
        let mut pool = Self {
            samples: vec![0.0; VARIANCE_POOL_SIZE],
            cursor: 0,
            policy,
        };
        pool.refill(rng);
        pool
    }

    /// Next sample in [0, 1).
    ///
    /// When the cursor wraps, `RefreshPolicy::OnWrap` redraws the buffer;
    /// `RefreshPolicy::Frozen` replays the original fill, so the sequence
    /// repeats with period `VARIANCE_POOL_SIZE`.
    pub fn next(&mut self, rng: &mut ChaCha8Rng) -> f64 {
        if self.cursor == self.samples.len() {
            self.cursor = 0;
            if self.policy == RefreshPolicy::OnWrap {
                self.refill(rng);
            }
        }
        let sample = self.samples[self.cursor];
        self.cursor += 1;
        sample
    }

    /// The configured refill policy.
    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    /// Number of samples consumed since the last wrap.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn refill(&mut self, rng: &mut ChaCha8Rng) {
        for sample in &mut self.samples {
            *sample = rng.gen::<f64>();
        }
    }
}

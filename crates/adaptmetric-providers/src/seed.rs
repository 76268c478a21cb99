use sha2::{Digest, Sha256};

/// Deterministic seed for a request: SHA-256 over the coordinates rounded
/// to two decimals plus the scenario year, first eight digest bytes read
/// big-endian. Stable across platforms and process restarts; this exact
/// construction is part of the determinism contract.
pub fn request_seed(lat: f64, lon: f64, scenario_year: i32) -> u64 {
    let key = format!("{lat:.2},{lon:.2},{scenario_year}");
    let digest = Sha256::digest(key.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// Linear congruential generator with the Numerical Recipes constants,
/// state reduced mod 2^32. Deliberately simple: the point is a documented,
/// reproducible formula, not statistical quality.
#[derive(Clone, Debug)]
pub struct Lcg {
    state: u64,
}

const LCG_A: u64 = 1_664_525;
const LCG_C: u64 = 1_013_904_223;
const LCG_M: u64 = 1 << 32;

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance once and return a draw uniform in `[min, max]`.
    pub fn next_in(&mut self, min: f64, max: f64) -> f64 {
        self.state = (LCG_A.wrapping_mul(self.state).wrapping_add(LCG_C)) % LCG_M;
        let normalized = self.state as f64 / LCG_M as f64;
        min + normalized * (max - min)
    }
}

/// One-shot draw: seed, advance once, scale. Mirrors the generator the
/// synthetic provider documents (each quantity gets its own seed offset
/// rather than a shared stream).
pub fn seeded_draw(seed: u64, min: f64, max: f64) -> f64 {
    Lcg::new(seed).next_in(min, max)
}

//! Mash string hash (Baagoe)
//!
//! Stateful hash used to turn an arbitrary seed string into the initial
//! Alea accumulators. Each call folds the input into the running value,
//! so successive calls on the same `Mash` return different results.

/// 2^32
pub(crate) const TWO_POW_32: f64 = 4_294_967_296.0;

/// 2^-32
pub(crate) const TWO_POW_NEG_32: f64 = 2.328_306_436_538_696_3e-10;

const MASH_INIT: f64 = 4_022_871_197.0; // 0xefc8249d
const MASH_MULTIPLIER: f64 = 0.025_196_032_824_169_38;

/// Truncate toward zero and wrap into [0, 2^32)
fn to_uint32(x: f64) -> f64 {
    x.trunc().rem_euclid(TWO_POW_32)
}

#[derive(Debug, Clone)]
pub(crate) struct Mash {
    n: f64,
}

impl Mash {
    pub(crate) fn new() -> Self {
        Self { n: MASH_INIT }
    }

    /// Fold `data` (as UTF-16 code units) into the running hash and
    /// return the current value scaled to [0, 1)
    pub(crate) fn hash(&mut self, data: &str) -> f64 {
        for unit in data.encode_utf16() {
            self.n += f64::from(unit);
            let mut h = MASH_MULTIPLIER * self.n;
            self.n = to_uint32(h);
            h -= self.n;
            h *= self.n;
            self.n = to_uint32(h);
            h -= self.n;
            self.n += h * TWO_POW_32;
        }
        to_uint32(self.n) * TWO_POW_NEG_32
    }
}

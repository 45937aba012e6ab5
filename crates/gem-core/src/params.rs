use serde::{Deserialize, Serialize};

/// Default value for the tunable exponent `s`.
pub const DEFAULT_S: f64 = 0.5;

/// Default value for the Varma constant `m`.
pub const DEFAULT_M: f64 = 1.1;

/// Tunable exponents shared by the entropy functionals.
///
/// Caller-owned configuration threaded through every entropy call; there is
/// no process-global parameter state, so concurrent callers with distinct
/// params never race. `s` controls the sharpness of the generalized entropy
/// families; `m` is read only by the Varma functional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntropyParams {
    /// Tunable exponent, read by every functional except Shannon.
    pub s: f64,
    /// Varma constant, fixed at 1.1 by convention.
    pub m: f64,
}

impl Default for EntropyParams {
    fn default() -> Self {
        Self {
            s: DEFAULT_S,
            m: DEFAULT_M,
        }
    }
}

impl EntropyParams {
    /// Creates params with the given exponent and the default `m`.
    pub fn with_s(s: f64) -> Self {
        Self { s, m: DEFAULT_M }
    }

    /// Replaces the tunable exponent. No validation or range restriction is
    /// applied; the new value takes effect for all subsequent calls made
    /// with these params and never back-propagates into returned scalars.
    pub fn set_s(&mut self, val: f64) {
        self.s = val;
    }
}

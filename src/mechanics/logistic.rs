/// Logistic activation: squashes an unbounded score into (0,1).

/// `sigmoid(z) = e^z / (e^z + e^-z)`, computed via the tanh identity so
/// large |z| saturates to exactly 0 or 1 instead of overflowing the
/// naive exponentials. `sigmoid(0) = 0.5`; `sigmoid(±∞) = 1/0`.
#[inline]
pub fn sigmoid(z: f64) -> f64 {
    0.5 * (1.0 + z.tanh())
}

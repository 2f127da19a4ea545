//! Periodic series shared by every position theory
//!
//! Each theory is a mean motion plus a short list of periodic terms of the
//! form
//!
//! ```text
//! amplitude · tᵖ · sin(k₁·a₁ + k₂·a₂ + … + phase)
//! ```
//!
//! where the `aᵢ` are the theory's fundamental arguments (mean anomalies,
//! elongations, ...) in degrees and `t` is Julian centuries since J2000.0.
//! Only the coefficient tables differ between bodies.

use crate::constants::DEG2RAD;

/// One term of a periodic series over `N` fundamental arguments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicTerm<const N: usize> {
    /// Amplitude in the unit of the series (degrees, 1e-6 degrees, metres, ...)
    pub amplitude: f64,
    /// Power of `t` multiplying the amplitude
    pub power: i32,
    /// Integer multiples of each fundamental argument
    pub multipliers: [i8; N],
    /// Constant phase in degrees
    pub phase: f64,
}

impl<const N: usize> PeriodicTerm<N> {
    pub const fn new(amplitude: f64, multipliers: [i8; N]) -> Self {
        PeriodicTerm {
            amplitude,
            power: 0,
            multipliers,
            phase: 0.0,
        }
    }

    /// Same term with a constant phase (degrees) added to the argument
    pub const fn with_phase(self, phase: f64) -> Self {
        PeriodicTerm { phase, ..self }
    }

    /// Same term with the amplitude scaled by `t^power`
    pub const fn secular(self, power: i32) -> Self {
        PeriodicTerm { power, ..self }
    }

    /// The argument of the term in degrees
    pub fn argument(&self, fundamentals: &[f64; N]) -> f64 {
        self.multipliers
            .iter()
            .zip(fundamentals.iter())
            .map(|(&k, &a)| k as f64 * a)
            .sum::<f64>()
            + self.phase
    }

    /// Multiplier of the `index`-th fundamental argument
    pub fn multiplier(&self, index: usize) -> i8 {
        self.multipliers[index]
    }

    fn scaled_amplitude(&self, t: f64) -> f64 {
        if self.power == 0 {
            self.amplitude
        } else {
            self.amplitude * t.powi(self.power)
        }
    }
}

/// Σ weight · amplitude · tᵖ · sin(argument)
///
/// `weight` lets a theory scale individual terms, e.g. the lunar theory's
/// correction for the decreasing eccentricity of the Earth's orbit.
pub fn sum_sines<const N: usize>(
    terms: &[PeriodicTerm<N>],
    fundamentals: &[f64; N],
    t: f64,
    weight: impl Fn(&PeriodicTerm<N>) -> f64,
) -> f64 {
    terms
        .iter()
        .map(|term| {
            let argument = term.argument(fundamentals) * DEG2RAD;
            weight(term) * term.scaled_amplitude(t) * argument.sin()
        })
        .sum()
}

/// Σ weight · amplitude · tᵖ · cos(argument)
pub fn sum_cosines<const N: usize>(
    terms: &[PeriodicTerm<N>],
    fundamentals: &[f64; N],
    t: f64,
    weight: impl Fn(&PeriodicTerm<N>) -> f64,
) -> f64 {
    terms
        .iter()
        .map(|term| {
            let argument = term.argument(fundamentals) * DEG2RAD;
            weight(term) * term.scaled_amplitude(t) * argument.cos()
        })
        .sum()
}

/// Weight that leaves every term unchanged
pub fn unweighted<const N: usize>(_: &PeriodicTerm<N>) -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TERMS: [PeriodicTerm<2>; 3] = [
        PeriodicTerm::new(2.0, [1, 0]),
        PeriodicTerm::new(1.0, [1, -1]).with_phase(90.0),
        PeriodicTerm::new(0.5, [0, 2]).secular(1),
    ];

    #[test]
    fn test_argument() {
        assert_abs_diff_eq!(TERMS[1].argument(&[30.0, 10.0]), 110.0);
        assert_eq!(TERMS[1].multiplier(1), -1);
    }

    #[test]
    fn test_sum_sines() {
        let t = 0.5;
        let args = [30.0, 45.0];
        // 2 sin 30 + sin(-15 + 90) + 0.5 t sin 90
        let expected = 1.0 + (75.0_f64).to_radians().sin() + 0.25;
        let total = sum_sines(&TERMS, &args, t, unweighted);
        assert_abs_diff_eq!(total, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_sum_cosines() {
        let args = [60.0, 0.0];
        // 2 cos 60 + cos 150 + 0 (t = 0)
        let expected = 1.0 + (150.0_f64).to_radians().cos();
        let total = sum_cosines(&TERMS, &args, 0.0, unweighted);
        assert_abs_diff_eq!(total, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_weighted_sum() {
        let args = [90.0, 0.0];
        // Only the first term survives a weight that keeps k₂ = 0 terms
        let total = sum_sines(&TERMS, &args, 0.0, |term| {
            if term.multiplier(1) == 0 {
                1.0
            } else {
                0.0
            }
        });
        assert_abs_diff_eq!(total, 2.0, epsilon = 1e-12);
    }
}

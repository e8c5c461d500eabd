use std::f64::consts::{PI, TAU};

/// Wraps an angle into the half-open interval `(−π, π]`.
///
/// Angles already in range are returned unchanged, bit for bit.
#[must_use]
pub fn wrap_phase(phase: f64) -> f64 {
    if phase > -PI && phase <= PI {
        return phase;
    }
    let wrapped = PI - (PI - phase).rem_euclid(TAU);
    // rem_euclid rounds up to TAU for tiny negative remainders
    if wrapped <= -PI { PI } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    fn assert_in_range(phase: f64) {
        assert!(phase > -PI && phase <= PI, "{phase} is outside (−π, π]");
    }

    #[test]
    fn in_range_is_untouched() {
        for phase in [0.0, 0.1, -0.1, 1.0, -3.0, PI, -PI + 1e-12] {
            assert_eq!(wrap_phase(phase).to_bits(), phase.to_bits());
        }
    }

    #[test]
    fn lower_bound_maps_to_upper() {
        assert_eq!(wrap_phase(-PI), PI);
    }

    #[test]
    fn single_turn_excursions() {
        assert_abs_diff_eq!(wrap_phase(PI + 0.5), -PI + 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_phase(-PI - 0.5), PI - 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_phase(TAU), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_phase(3.0 * PI), PI, epsilon = 1e-12);
    }

    #[test]
    fn many_turns() {
        for turns in [2.0, 7.0, 1_000.0, 123_456.0] {
            let phase = 0.75 + turns * TAU;
            assert_abs_diff_eq!(wrap_phase(phase), 0.75, epsilon = 1e-6);
            assert_abs_diff_eq!(wrap_phase(-phase), -0.75, epsilon = 1e-6);
        }
    }

    #[test]
    fn always_lands_in_range() {
        let mut phase = -1.0e6;
        while phase < 1.0e6 {
            assert_in_range(wrap_phase(phase));
            phase += 997.123_456_789;
        }
        for phase in [f64::MAX, f64::MIN, 1e300, -1e300, PI + f64::EPSILON, -PI - 1e-15] {
            assert_in_range(wrap_phase(phase));
        }
    }

    #[test]
    fn just_below_minus_pi() {
        let phase = -PI - f64::EPSILON * 4.0;
        let wrapped = wrap_phase(phase);
        assert_in_range(wrapped);
        assert_abs_diff_eq!(wrapped, PI, epsilon = 1e-12);
    }
}

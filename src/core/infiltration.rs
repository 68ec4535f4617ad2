use crate::core::units::{cubic_feet_per_hour_to_cfm, AIR_SENSIBLE_HEAT_FACTOR};

// Rule-of-thumb divisor relating blower-door ACH50 to natural air changes.
const ACH50_TO_NATURAL_DIVISOR: f64 = 20.;

/// Assumed blower-door tightness (ACH50) by construction vintage.
///
/// Bands reflect the progression of California energy-code air-sealing
/// requirements; older homes leak more.
pub fn blower_door_ach50(year_built: i32) -> f64 {
    match year_built {
        ..=1949 => 15.,
        1950..=1977 => 12.,
        1978..=1991 => 10.,
        1992..=2005 => 7.,
        2006..=2013 => 5.,
        _ => 3.,
    }
}

/// Natural air-change rate estimated from the vintage-based ACH50 figure.
pub fn natural_air_changes(year_built: i32) -> f64 {
    blower_door_ach50(year_built) / ACH50_TO_NATURAL_DIVISOR
}

/// Infiltration airflow in CFM for a conditioned volume, in cubic ft.
pub fn infiltration_cfm(volume: f64, natural_ach: f64) -> f64 {
    cubic_feet_per_hour_to_cfm(volume * natural_ach)
}

/// Sensible infiltration load in BTU/h for the given design temperature
/// difference.
pub fn sensible_infiltration_load(cfm: f64, delta_t: f64) -> f64 {
    AIR_SENSIBLE_HEAT_FACTOR * cfm * delta_t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(1925, 15.)]
    #[case(1949, 15.)]
    #[case(1950, 12.)]
    #[case(1977, 12.)]
    #[case(1985, 10.)]
    #[case(2005, 7.)]
    #[case(2010, 5.)]
    #[case(2020, 3.)]
    fn should_band_ach50_by_vintage(#[case] year: i32, #[case] expected: f64) {
        assert_eq!(blower_door_ach50(year), expected);
    }

    #[rstest]
    fn should_derive_natural_air_changes() {
        assert_relative_eq!(natural_air_changes(2005), 0.35);
        assert_relative_eq!(natural_air_changes(1940), 0.75);
    }

    #[rstest]
    fn should_convert_volume_exchange_to_cfm() {
        // 18,000 ft3 at 0.35 ach is 105 CFM
        assert_relative_eq!(infiltration_cfm(18_000., 0.35), 105.);
    }

    #[rstest]
    fn should_compute_sensible_load_on_cfm_basis() {
        assert_relative_eq!(sensible_infiltration_load(105., 38.), 4_309.2);
        assert_relative_eq!(sensible_infiltration_load(105., 12.), 1_360.8);
    }

    #[rstest]
    fn should_follow_sign_of_design_delta_t() {
        assert!(sensible_infiltration_load(105., -5.) < 0.);
    }
}

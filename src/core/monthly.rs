use crate::core::units::{BtuPerHour, BTU_PER_KBTU, MONTHS_PER_YEAR};
use serde::Serialize;

pub const MONTH_LABELS: [&str; MONTHS_PER_YEAR] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// Mean monthly outdoor temperatures for the served region, in deg F.
// Separate tables weight the heating and cooling seasons.
const HEATING_SEASON_MEAN_TEMPS: [f64; MONTHS_PER_YEAR] =
    [44., 47., 50., 53., 57., 61., 63., 63., 61., 55., 48., 43.];
const COOLING_SEASON_MEAN_TEMPS: [f64; MONTHS_PER_YEAR] =
    [52., 55., 58., 62., 67., 73., 78., 78., 74., 66., 57., 51.];

// Days-per-month approximation for the degree-day proxy.
const DEGREE_DAY_MULTIPLIER: f64 = 30.;
// Normalisation constant for the proxy. A calibration value carried from the
// original estimator, not a true degree-day base.
const DEGREE_NORMALIZATION: f64 = 65.;

/// Estimated monthly energy use, in kBTU per month.
///
/// A crude degree-day proxy, not calibrated against billing data: each
/// month's energy is the design load scaled by that month's setpoint-to-mean
/// temperature distance.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthlyEnergyProfile {
    pub heating_kbtu: [f64; MONTHS_PER_YEAR],
    pub cooling_kbtu: [f64; MONTHS_PER_YEAR],
}

pub fn monthly_profile(
    heating_setpoint: f64,
    cooling_setpoint: f64,
    heating_total: BtuPerHour,
    cooling_total: BtuPerHour,
) -> MonthlyEnergyProfile {
    let heating_kbtu_total = heating_total as f64 / BTU_PER_KBTU;
    let cooling_kbtu_total = cooling_total as f64 / BTU_PER_KBTU;

    let mut heating_kbtu = [0.; MONTHS_PER_YEAR];
    let mut cooling_kbtu = [0.; MONTHS_PER_YEAR];
    for month in 0..MONTHS_PER_YEAR {
        let heating_proxy = (heating_setpoint - HEATING_SEASON_MEAN_TEMPS[month]).max(0.)
            * DEGREE_DAY_MULTIPLIER;
        let cooling_proxy = (COOLING_SEASON_MEAN_TEMPS[month] - cooling_setpoint).max(0.)
            * DEGREE_DAY_MULTIPLIER;
        heating_kbtu[month] = heating_kbtu_total * heating_proxy / DEGREE_NORMALIZATION;
        cooling_kbtu[month] = cooling_kbtu_total * cooling_proxy / DEGREE_NORMALIZATION;
    }

    MonthlyEnergyProfile {
        heating_kbtu,
        cooling_kbtu,
    }
}

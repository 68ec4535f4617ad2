use serde::Serialize;

pub const BTU_PER_HOUR_PER_WATT: f64 = 3.412;
pub const BTU_PER_KBTU: f64 = 1_000.;
pub const MINUTES_PER_HOUR: u32 = 60;
pub const MONTHS_PER_YEAR: usize = 12;
// Sensible heat factor for standard air, in BTU/h per CFM per deg F
pub const AIR_SENSIBLE_HEAT_FACTOR: f64 = 1.08;

/// A rounded load figure in BTU/h. Signed, as the heating design temperature
/// difference is not clamped against unrealistic setpoints.
pub type BtuPerHour = i64;

/// Convert a continuous electrical load in watts to a heat rate in BTU/h.
pub fn watts_to_btu_per_hour(watts: f64) -> f64 {
    watts * BTU_PER_HOUR_PER_WATT
}

/// Convert an hourly volumetric exchange (cubic feet per hour) to CFM.
pub fn cubic_feet_per_hour_to_cfm(cubic_feet_per_hour: f64) -> f64 {
    cubic_feet_per_hour / MINUTES_PER_HOUR as f64
}

/// Round a load to a whole BTU/h figure for reporting.
///
/// Loads are reported as integers throughout. A NaN produced by degenerate
/// explicit input (e.g. a zero area supplied by the caller) casts to 0 rather
/// than propagating.
pub fn round_btu(load: f64) -> BtuPerHour {
    load.round() as BtuPerHour
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TemperatureDifference {
    pub indoor_temp: f64,
    pub outdoor_temp: f64,
    pub delta_t: f64,
}

impl TemperatureDifference {
    /// Heating design conditions: indoor setpoint less the winter design temperature.
    pub fn for_heating(indoor_setpoint: f64, winter_design_temp: f64) -> Self {
        Self {
            indoor_temp: indoor_setpoint,
            outdoor_temp: winter_design_temp,
            delta_t: indoor_setpoint - winter_design_temp,
        }
    }

    /// Cooling design conditions: summer design temperature less the indoor setpoint.
    pub fn for_cooling(indoor_setpoint: f64, summer_design_temp: f64) -> Self {
        Self {
            indoor_temp: indoor_setpoint,
            outdoor_temp: summer_design_temp,
            delta_t: summer_design_temp - indoor_setpoint,
        }
    }
}

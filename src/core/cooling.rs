use crate::climate::ClimateProfile;
use crate::core::envelope::{conditioned_volume, net_wall_area};
use crate::core::infiltration::{infiltration_cfm, natural_air_changes, sensible_infiltration_load};
use crate::core::internal_gains::internal_gains;
use crate::core::thermal_properties::ThermalProperties;
use crate::core::units::{round_btu, BtuPerHour, TemperatureDifference};
use crate::input::{BuildingDescriptor, Orientation};
use serde::Serialize;

// Oversizing margin applied to the sensible + latent sum.
pub const COOLING_SAFETY_FACTOR: f64 = 1.10;

// Peak solar intensities, in BTU/h per sq ft of surface
const WALL_SOLAR_INTENSITY: f64 = 20.;
const ROOF_SOLAR_INTENSITY: f64 = 40.;
const WINDOW_PEAK_SOLAR_INTENSITY: f64 = 200.;

// Derate applied to window solar gain when any shading is present.
const SHADING_DERATE: f64 = 0.7;
// Fraction of sensible infiltration taken as the latent infiltration load.
const LATENT_INFILTRATION_FACTOR: f64 = 0.3;

/// Fraction of peak solar intensity incident on glazing by compass facing.
fn orientation_solar_factor(orientation: Orientation) -> f64 {
    match orientation {
        Orientation::North => 0.2,
        Orientation::East => 0.7,
        Orientation::South => 0.4,
        Orientation::West => 0.9,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CoolingComponents {
    pub walls: BtuPerHour,
    pub windows: BtuPerHour,
    pub roof: BtuPerHour,
    /// Always 0: below-grade gain is negligible at cooling conditions.
    pub foundation: BtuPerHour,
    pub infiltration: BtuPerHour,
    /// Total internal gains (sensible plus latent), for the breakdown chart.
    pub internal: BtuPerHour,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CoolingDesignConditions {
    pub indoor_temp: f64,
    pub outdoor_temp: f64,
    pub delta_t: f64,
    pub wet_bulb: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CoolingLoad {
    /// Sensible load before the safety factor, in BTU/h.
    pub sensible: BtuPerHour,
    /// Latent load before the safety factor, in BTU/h.
    pub latent: BtuPerHour,
    /// Safety-factor-adjusted design cooling load, in BTU/h.
    pub total: BtuPerHour,
    pub components: CoolingComponents,
    pub design: CoolingDesignConditions,
}

/// Design cooling load: conductive and solar envelope gains, infiltration,
/// and internal gains, split sensible/latent.
pub fn cooling_load(
    building: &BuildingDescriptor,
    climate: &ClimateProfile,
    thermal: &ThermalProperties,
) -> CoolingLoad {
    let conditions =
        TemperatureDifference::for_cooling(building.cooling_setpoint(), climate.summer_design_temp);
    let delta_t = conditions.delta_t;
    let area = building.total_area();
    let wall_area = net_wall_area(building);

    let wall_r = thermal.wall_base_r(&building.wall_construction()) + building.wall_insulation_r();
    let walls = wall_area / wall_r * delta_t
        + wall_area * thermal.absorptance(&building.wall_color()) * WALL_SOLAR_INTENSITY;

    let window = thermal.window(&building.window_glazing());
    let shading_factor = if building.shading().is_present() {
        SHADING_DERATE
    } else {
        1.0
    };
    let window_solar: f64 = Orientation::ALL
        .into_iter()
        .map(|orientation| {
            building.window_area(orientation)
                * window.shgc
                * WINDOW_PEAK_SOLAR_INTENSITY
                * orientation_solar_factor(orientation)
        })
        .sum();
    let windows =
        building.total_window_area() * window.u_value * delta_t + window_solar * shading_factor;

    let roof =
        area / thermal.effective_attic_r(building.attic_insulation_r(), &building.attic_type())
            * delta_t
            + area * thermal.absorptance(&building.roof_color()) * ROOF_SOLAR_INTENSITY;

    let foundation = 0.;

    let cfm = infiltration_cfm(
        conditioned_volume(building),
        natural_air_changes(building.year_built()),
    );
    let infiltration = sensible_infiltration_load(cfm, delta_t);

    let internal = internal_gains(building);

    let sensible = walls + windows + roof + foundation + infiltration + internal.sensible;
    let latent = internal.latent + LATENT_INFILTRATION_FACTOR * infiltration;
    let total = (sensible + latent) * COOLING_SAFETY_FACTOR;

    CoolingLoad {
        sensible: round_btu(sensible),
        latent: round_btu(latent),
        total: round_btu(total),
        components: CoolingComponents {
            walls: round_btu(walls),
            windows: round_btu(windows),
            roof: round_btu(roof),
            foundation: round_btu(foundation),
            infiltration: round_btu(infiltration),
            internal: round_btu(internal.sensible + internal.latent),
        },
        design: CoolingDesignConditions {
            indoor_temp: conditions.indoor_temp,
            outdoor_temp: conditions.outdoor_temp,
            delta_t,
            wet_bulb: climate.summer_wet_bulb,
        },
    }
}

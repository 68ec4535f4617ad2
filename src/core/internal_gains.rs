use crate::core::units::watts_to_btu_per_hour;
use crate::input::BuildingDescriptor;

// Per-occupant design gains, in BTU/h
const OCCUPANT_SENSIBLE: f64 = 250.;
const OCCUPANT_LATENT: f64 = 200.;

// Area-based gains, in W per sq ft
const LIGHTING_WATTS_PER_SQ_FT: f64 = 1.5;
const PLUG_LOAD_WATTS_PER_SQ_FT: f64 = 2.0;

// Fixed adders for flagged appliances, in BTU/h (all sensible)
const POOL_PUMP_LOAD: f64 = 2_000.;
const HOT_TUB_LOAD: f64 = 3_000.;
const ELECTRIC_RANGE_LOAD: f64 = 1_000.;
const ELECTRIC_DRYER_LOAD: f64 = 1_500.;

/// Internal gains split into sensible and latent contributions, in BTU/h.
/// Occupant latent heat is the only latent internal component.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InternalGains {
    pub sensible: f64,
    pub latent: f64,
}

/// Design internal gains for the dwelling: occupants, lighting, plug loads,
/// and fixed adders for any flagged appliances.
pub fn internal_gains(building: &BuildingDescriptor) -> InternalGains {
    let occupants = building.occupants();
    let area = building.total_area();

    let mut sensible = occupants * OCCUPANT_SENSIBLE
        + watts_to_btu_per_hour(area * LIGHTING_WATTS_PER_SQ_FT)
        + watts_to_btu_per_hour(area * PLUG_LOAD_WATTS_PER_SQ_FT);

    if building.pool_pump() {
        sensible += POOL_PUMP_LOAD;
    }
    if building.hot_tub() {
        sensible += HOT_TUB_LOAD;
    }
    if building.electric_range() {
        sensible += ELECTRIC_RANGE_LOAD;
    }
    if building.electric_dryer() {
        sensible += ELECTRIC_DRYER_LOAD;
    }

    InternalGains {
        sensible,
        latent: occupants * OCCUPANT_LATENT,
    }
}

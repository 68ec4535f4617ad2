use crate::core::units::BtuPerHour;
use crate::input::BuildingDescriptor;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

// Seasonal heating efficiency of the replaced baseline system, used by the
// illustrative savings rule.
const BASELINE_HSPF: f64 = 6.5;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, strum::Display)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentCategory {
    Ducted,
    Ductless,
    MultiZone,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CostRange {
    pub low: i64,
    pub high: i64,
}

/// One catalogued system family the recommendation rules can draw from.
#[derive(Clone, Debug, Serialize)]
pub struct CatalogEntry {
    pub category: EquipmentCategory,
    pub label: String,
    pub capacity_min_btu: BtuPerHour,
    pub capacity_max_btu: BtuPerHour,
    pub hspf: f64,
    pub seer: f64,
    /// Capacities are sold in steps of this quantum.
    pub sizing_step_btu: BtuPerHour,
    pub installed_cost: CostRange,
    /// Itemised rebate programs, in catalog order.
    pub rebates: IndexMap<String, i64>,
}

/// Immutable equipment reference data, injected at engine construction so
/// regional catalogs and rebate programs can be replaced without touching
/// the recommendation rules.
#[derive(Clone, Debug, Default)]
pub struct EquipmentCatalog {
    entries: Vec<CatalogEntry>,
}

impl EquipmentCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            CatalogEntry {
                category: EquipmentCategory::Ducted,
                label: "Central Ducted Heat Pump".into(),
                capacity_min_btu: 18_000,
                capacity_max_btu: 60_000,
                hspf: 9.5,
                seer: 16.0,
                sizing_step_btu: 6_000,
                installed_cost: CostRange {
                    low: 12_000,
                    high: 18_000,
                },
                rebates: IndexMap::from([
                    ("TECH Clean California".to_owned(), 1_000),
                    ("Federal 25C tax credit".to_owned(), 2_000),
                    ("Utility heat pump rebate".to_owned(), 500),
                ]),
            },
            CatalogEntry {
                category: EquipmentCategory::Ductless,
                label: "Single-Zone Ductless Mini-Split".into(),
                capacity_min_btu: 6_000,
                capacity_max_btu: 36_000,
                hspf: 10.5,
                seer: 20.0,
                sizing_step_btu: 3_000,
                installed_cost: CostRange {
                    low: 4_500,
                    high: 8_000,
                },
                rebates: IndexMap::from([
                    ("TECH Clean California".to_owned(), 1_000),
                    ("Federal 25C tax credit".to_owned(), 600),
                ]),
            },
            CatalogEntry {
                category: EquipmentCategory::MultiZone,
                label: "Multi-Zone Ductless".into(),
                capacity_min_btu: 24_000,
                capacity_max_btu: 48_000,
                hspf: 9.8,
                seer: 18.0,
                sizing_step_btu: 6_000,
                installed_cost: CostRange {
                    low: 9_000,
                    high: 15_000,
                },
                rebates: IndexMap::from([
                    ("TECH Clean California".to_owned(), 1_000),
                    ("Federal 25C tax credit".to_owned(), 2_000),
                ]),
            },
        ])
    }

    pub fn entry(&self, category: EquipmentCategory) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.category == category)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RebateSummary {
    pub programs: IndexMap<String, i64>,
    pub total: i64,
}

impl RebateSummary {
    fn from_programs(programs: IndexMap<String, i64>) -> Self {
        let total = programs.values().sum();
        Self { programs, total }
    }
}

/// One candidate system for the calculated loads.
#[derive(Clone, Debug, Serialize)]
pub struct EquipmentOption {
    pub category: EquipmentCategory,
    pub label: String,
    pub capacity_min_btu: BtuPerHour,
    pub capacity_max_btu: BtuPerHour,
    pub hspf: f64,
    pub seer: f64,
    pub recommended: bool,
    /// Peak load rounded up to the catalog sizing step, in BTU/h.
    pub sized_capacity_btu: BtuPerHour,
    pub annual_savings_usd: i64,
    pub rebates: RebateSummary,
    pub installed_cost: CostRange,
}

/// Candidate systems for the calculated peak loads.
///
/// The rules are evaluated in fixed order and are independent of one
/// another, so more than one option can carry the `recommended` flag.
/// An oversized load that matches no rule yields an empty list, which
/// callers must treat as "professional sizing required".
pub fn recommend(
    catalog: &EquipmentCatalog,
    heating_total: BtuPerHour,
    cooling_total: BtuPerHour,
    building: &BuildingDescriptor,
) -> Vec<EquipmentOption> {
    let ducts_sound = building.ductwork_condition().supports_ducted();
    let peak = heating_total.max(cooling_total);
    let multi_zone_min = catalog
        .entry(EquipmentCategory::MultiZone)
        .map(|entry| entry.capacity_min_btu)
        .unwrap_or(24_000);

    let mut options = Vec::new();

    if let Some(entry) = catalog.entry(EquipmentCategory::Ducted) {
        if ducts_sound
            && heating_total > entry.capacity_min_btu
            && heating_total <= entry.capacity_max_btu
        {
            options.push(build_option(entry, peak, building, true));
        }
    }

    if let Some(entry) = catalog.entry(EquipmentCategory::Ductless) {
        if heating_total <= entry.capacity_max_btu {
            let recommended = !ducts_sound || heating_total < multi_zone_min;
            options.push(build_option(entry, peak, building, recommended));
        }
    }

    if let Some(entry) = catalog.entry(EquipmentCategory::MultiZone) {
        if heating_total > entry.capacity_min_btu && heating_total <= entry.capacity_max_btu {
            options.push(build_option(entry, peak, building, !ducts_sound));
        }
    }

    // recommended options first; otherwise stable in rule order
    options.sort_by_key(|option| !option.recommended);

    debug!(
        candidates = options.len(),
        heating_total, cooling_total, "equipment recommendation complete"
    );

    options
}

fn build_option(
    entry: &CatalogEntry,
    peak_load: BtuPerHour,
    building: &BuildingDescriptor,
    recommended: bool,
) -> EquipmentOption {
    EquipmentOption {
        category: entry.category,
        label: entry.label.clone(),
        capacity_min_btu: entry.capacity_min_btu,
        capacity_max_btu: entry.capacity_max_btu,
        hspf: entry.hspf,
        seer: entry.seer,
        recommended,
        sized_capacity_btu: sized_capacity(peak_load, entry.sizing_step_btu),
        annual_savings_usd: annual_savings(building.monthly_energy_bill(), entry.hspf),
        rebates: RebateSummary::from_programs(entry.rebates.clone()),
        installed_cost: entry.installed_cost,
    }
}

/// Round the peak load up to the catalog sizing quantum.
fn sized_capacity(peak_load: BtuPerHour, step: BtuPerHour) -> BtuPerHour {
    if step <= 0 {
        return peak_load;
    }
    ((peak_load as f64 / step as f64).ceil() * step as f64) as BtuPerHour
}

/// Illustrative annual savings against the baseline system efficiency.
fn annual_savings(monthly_bill: f64, hspf: f64) -> i64 {
    let annual_spend = monthly_bill * 12.;
    (annual_spend * (1. - BASELINE_HSPF / hspf)).round() as i64
}

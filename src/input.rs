use serde::{Deserialize, Deserializer, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use serde_json::Value;
use std::io::{BufReader, Read};
use std::str::FromStr;

pub fn ingest_for_processing(json: impl Read) -> Result<BuildingDescriptor, anyhow::Error> {
    let descriptor: BuildingDescriptor = serde_json::from_reader(BufReader::new(json))?;
    Ok(descriptor)
}

pub const DEFAULT_TOTAL_AREA: f64 = 2_000.;
pub const DEFAULT_CEILING_HEIGHT: f64 = 9.;
pub const DEFAULT_STORIES: f64 = 1.;
pub const DEFAULT_YEAR_BUILT: i32 = 2_000;
pub const DEFAULT_OCCUPANTS: f64 = 4.;
pub const DEFAULT_HEATING_SETPOINT: f64 = 70.;
pub const DEFAULT_COOLING_SETPOINT: f64 = 75.;
pub const DEFAULT_WALL_INSULATION_R: f64 = 11.;
pub const DEFAULT_ATTIC_INSULATION_R: f64 = 30.;
pub const DEFAULT_FOUNDATION_INSULATION_R: f64 = 0.;
pub const DEFAULT_WINDOW_AREA_PER_ORIENTATION: f64 = 50.;
pub const DEFAULT_MONTHLY_ENERGY_BILL: f64 = 250.;

/// Physical and usage attributes of the dwelling, as submitted by a caller.
///
/// Every field is optional on the wire and defaults are substituted by the
/// typed accessors, so a calculation never fails on missing or malformed
/// input. Numeric fields accept JSON numbers or numeric strings; anything
/// else (including NaN/inf) is treated as absent. Unknown enum strings land
/// in each enum's catch-all variant, which property lookups treat as the
/// documented default.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(rename_all = "camelCase", default)]
pub struct BuildingDescriptor {
    #[serde(deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_area: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub ceiling_height: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub stories: Option<f64>,
    #[serde(deserialize_with = "lenient_i32")]
    pub year_built: Option<i32>,
    #[serde(deserialize_with = "lenient_f64")]
    pub occupants: Option<f64>,
    #[serde(rename = "heatingTemp", deserialize_with = "lenient_f64")]
    pub heating_setpoint: Option<f64>,
    #[serde(rename = "coolingTemp", deserialize_with = "lenient_f64")]
    pub cooling_setpoint: Option<f64>,
    #[serde(rename = "wallType", deserialize_with = "lenient_enum")]
    pub wall_construction: Option<WallConstruction>,
    #[serde(rename = "wallInsulation", deserialize_with = "lenient_f64")]
    pub wall_insulation_r: Option<f64>,
    #[serde(deserialize_with = "lenient_enum")]
    pub wall_color: Option<SurfaceColor>,
    #[serde(rename = "atticInsulation", deserialize_with = "lenient_f64")]
    pub attic_insulation_r: Option<f64>,
    #[serde(deserialize_with = "lenient_enum")]
    pub attic_type: Option<AtticType>,
    #[serde(deserialize_with = "lenient_enum")]
    pub foundation_type: Option<FoundationType>,
    #[serde(rename = "foundationInsulation", deserialize_with = "lenient_f64")]
    pub foundation_insulation_r: Option<f64>,
    #[serde(rename = "windowType", deserialize_with = "lenient_enum")]
    pub window_glazing: Option<WindowGlazing>,
    #[serde(deserialize_with = "lenient_f64")]
    pub window_area_north: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub window_area_east: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub window_area_south: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub window_area_west: Option<f64>,
    #[serde(deserialize_with = "lenient_enum")]
    pub shading: Option<ShadingPresence>,
    #[serde(deserialize_with = "lenient_enum")]
    pub roof_color: Option<SurfaceColor>,
    #[serde(deserialize_with = "lenient_enum")]
    pub ductwork_condition: Option<DuctworkCondition>,
    #[serde(deserialize_with = "lenient_f64")]
    pub monthly_energy_bill: Option<f64>,
    #[serde(deserialize_with = "lenient_bool")]
    pub pool_pump: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub hot_tub: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub electric_range: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub electric_dryer: Option<bool>,
}

impl BuildingDescriptor {
    pub fn address(&self) -> &str {
        self.address.as_deref().unwrap_or("")
    }

    pub fn total_area(&self) -> f64 {
        self.total_area.unwrap_or(DEFAULT_TOTAL_AREA)
    }

    pub fn ceiling_height(&self) -> f64 {
        self.ceiling_height.unwrap_or(DEFAULT_CEILING_HEIGHT)
    }

    pub fn stories(&self) -> f64 {
        self.stories.unwrap_or(DEFAULT_STORIES)
    }

    pub fn year_built(&self) -> i32 {
        self.year_built.unwrap_or(DEFAULT_YEAR_BUILT)
    }

    pub fn occupants(&self) -> f64 {
        self.occupants.unwrap_or(DEFAULT_OCCUPANTS)
    }

    pub fn heating_setpoint(&self) -> f64 {
        self.heating_setpoint.unwrap_or(DEFAULT_HEATING_SETPOINT)
    }

    pub fn cooling_setpoint(&self) -> f64 {
        self.cooling_setpoint.unwrap_or(DEFAULT_COOLING_SETPOINT)
    }

    pub fn wall_construction(&self) -> WallConstruction {
        self.wall_construction.clone().unwrap_or_default()
    }

    pub fn wall_insulation_r(&self) -> f64 {
        self.wall_insulation_r.unwrap_or(DEFAULT_WALL_INSULATION_R)
    }

    pub fn wall_color(&self) -> SurfaceColor {
        self.wall_color.clone().unwrap_or_default()
    }

    pub fn attic_insulation_r(&self) -> f64 {
        self.attic_insulation_r.unwrap_or(DEFAULT_ATTIC_INSULATION_R)
    }

    pub fn attic_type(&self) -> AtticType {
        self.attic_type.clone().unwrap_or_default()
    }

    pub fn foundation_type(&self) -> FoundationType {
        self.foundation_type.clone().unwrap_or_default()
    }

    pub fn foundation_insulation_r(&self) -> f64 {
        self.foundation_insulation_r
            .unwrap_or(DEFAULT_FOUNDATION_INSULATION_R)
    }

    pub fn window_glazing(&self) -> WindowGlazing {
        self.window_glazing.clone().unwrap_or_default()
    }

    pub fn window_area(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::North => self.window_area_north,
            Orientation::East => self.window_area_east,
            Orientation::South => self.window_area_south,
            Orientation::West => self.window_area_west,
        }
        .unwrap_or(DEFAULT_WINDOW_AREA_PER_ORIENTATION)
    }

    pub fn total_window_area(&self) -> f64 {
        Orientation::ALL
            .into_iter()
            .map(|orientation| self.window_area(orientation))
            .sum()
    }

    pub fn shading(&self) -> ShadingPresence {
        self.shading.clone().unwrap_or_default()
    }

    pub fn roof_color(&self) -> SurfaceColor {
        self.roof_color.clone().unwrap_or_default()
    }

    pub fn ductwork_condition(&self) -> DuctworkCondition {
        self.ductwork_condition.clone().unwrap_or_default()
    }

    pub fn monthly_energy_bill(&self) -> f64 {
        self.monthly_energy_bill
            .unwrap_or(DEFAULT_MONTHLY_ENERGY_BILL)
    }

    pub fn pool_pump(&self) -> bool {
        self.pool_pump.unwrap_or(false)
    }

    pub fn hot_tub(&self) -> bool {
        self.hot_tub.unwrap_or(false)
    }

    pub fn electric_range(&self) -> bool {
        self.electric_range.unwrap_or(false)
    }

    pub fn electric_dryer(&self) -> bool {
        self.electric_dryer.unwrap_or(false)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];
}

#[derive(Clone, Debug, Default, Deserialize_enum_str, Eq, Hash, PartialEq, Serialize_enum_str)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum WallConstruction {
    #[default]
    #[serde(rename = "wood-frame-2x4")]
    WoodFrame2x4,
    #[serde(rename = "wood-frame-2x6")]
    WoodFrame2x6,
    #[serde(rename = "masonry")]
    Masonry,
    #[serde(rename = "brick-veneer")]
    BrickVeneer,
    #[serde(rename = "concrete-block")]
    ConcreteBlock,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, Default, Deserialize_enum_str, Eq, Hash, PartialEq, Serialize_enum_str)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum SurfaceColor {
    White,
    Light,
    #[default]
    Medium,
    Dark,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, Default, Deserialize_enum_str, Eq, Hash, PartialEq, Serialize_enum_str)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum AtticType {
    #[default]
    Vented,
    Cathedral,
    #[serde(other)]
    Other(String),
}

impl AtticType {
    pub fn is_cathedral(&self) -> bool {
        matches!(self, AtticType::Cathedral)
    }
}

#[derive(Clone, Debug, Default, Deserialize_enum_str, Eq, Hash, PartialEq, Serialize_enum_str)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum FoundationType {
    #[default]
    #[serde(rename = "slab")]
    Slab,
    #[serde(rename = "crawlspace-vented")]
    CrawlspaceVented,
    #[serde(rename = "crawlspace-unvented")]
    CrawlspaceUnvented,
    #[serde(rename = "basement-unconditioned")]
    BasementUnconditioned,
    #[serde(rename = "basement-conditioned")]
    BasementConditioned,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, Default, Deserialize_enum_str, Eq, Hash, PartialEq, Serialize_enum_str)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum WindowGlazing {
    #[serde(rename = "single-pane")]
    SinglePane,
    #[default]
    #[serde(rename = "double-pane")]
    DoublePane,
    #[serde(rename = "double-pane-low-e")]
    DoublePaneLowE,
    #[serde(rename = "triple-pane")]
    TriplePane,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, Default, Deserialize_enum_str, Eq, Hash, PartialEq, Serialize_enum_str)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum ShadingPresence {
    #[default]
    None,
    Partial,
    Full,
    #[serde(other)]
    Other(String),
}

impl ShadingPresence {
    pub fn is_present(&self) -> bool {
        matches!(self, ShadingPresence::Partial | ShadingPresence::Full)
    }
}

#[derive(Clone, Debug, Default, Deserialize_enum_str, Eq, Hash, PartialEq, Serialize_enum_str)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum DuctworkCondition {
    Excellent,
    Good,
    #[default]
    Fair,
    Poor,
    None,
    #[serde(other)]
    Other(String),
}

impl DuctworkCondition {
    /// Whether existing ductwork is sound enough to serve a ducted system.
    pub fn supports_ducted(&self) -> bool {
        matches!(self, DuctworkCondition::Excellent | DuctworkCondition::Good)
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        Value::String(text) => Some(text),
        _ => None,
    }))
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(value_as_f64))
}

fn lenient_i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(value_as_f64).map(|number| number as i32))
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|value| match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => number.as_f64().map(|n| n != 0.),
        Value::String(text) => match text.trim().to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }))
}

fn lenient_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|text| text.trim().to_lowercase().parse::<T>().ok()))
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|number| number.is_finite())
}

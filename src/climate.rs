use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Debug;
use tracing::debug;

/// Design-day climate data for a resolved location.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClimateProfile {
    pub zone: String,
    /// 99% heating design dry-bulb, in deg F
    pub winter_design_temp: f64,
    /// 1% cooling design dry-bulb, in deg F
    pub summer_design_temp: f64,
    /// coincident cooling design wet-bulb, in deg F
    pub summer_wet_bulb: f64,
    /// mean daily temperature range, in deg F
    pub daily_range: f64,
    /// design wind speed, in mph
    pub wind_speed: f64,
    /// site elevation, in ft
    pub elevation: f64,
}

impl ClimateProfile {
    /// Mid-range Bay Area values used when an address matches nothing.
    pub fn default_profile() -> Self {
        Self {
            zone: "3C Marine".into(),
            winter_design_temp: 35.,
            summer_design_temp: 85.,
            summer_wet_bulb: 64.,
            daily_range: 20.,
            wind_speed: 10.,
            elevation: 100.,
        }
    }
}

/// Resolves a free-text address to a climate profile.
///
/// The bundled resolver is a substring-matching placeholder for a real
/// geocoding/weather-data service; the engine only depends on this trait so
/// that service can be swapped in without touching calculation code.
pub trait ClimateResolver: Debug + Send + Sync {
    fn resolve(&self, address: &str) -> ClimateProfile;
}

/// Substring-containment resolver over a fixed, ordered location table.
/// Matching is case-insensitive and first-match-wins in table-definition
/// order; an unmatched address yields the default profile.
#[derive(Clone, Debug)]
pub struct AddressSubstringResolver {
    table: IndexMap<String, ClimateProfile>,
    default: ClimateProfile,
}

impl AddressSubstringResolver {
    pub fn new(table: IndexMap<String, ClimateProfile>, default: ClimateProfile) -> Self {
        Self { table, default }
    }

    /// The bundled Northern California location table.
    pub fn standard() -> Self {
        let profile = |zone: &str,
                       winter_design_temp: f64,
                       summer_design_temp: f64,
                       summer_wet_bulb: f64,
                       daily_range: f64,
                       wind_speed: f64,
                       elevation: f64| ClimateProfile {
            zone: zone.into(),
            winter_design_temp,
            summer_design_temp,
            summer_wet_bulb,
            daily_range,
            wind_speed,
            elevation,
        };
        Self::new(
            IndexMap::from([
                (
                    "san francisco".into(),
                    profile("3C Marine", 38., 78., 62., 12., 12., 52.),
                ),
                (
                    "oakland".into(),
                    profile("3C Marine", 32., 87., 64., 19., 10., 43.),
                ),
                (
                    "berkeley".into(),
                    profile("3C Marine", 34., 82., 63., 16., 10., 171.),
                ),
                (
                    "san jose".into(),
                    profile("3C Marine", 34., 90., 66., 24., 8., 82.),
                ),
                (
                    "walnut creek".into(),
                    profile("3B Inland", 30., 95., 67., 30., 8., 141.),
                ),
                (
                    "santa rosa".into(),
                    profile("3C Marine", 30., 93., 66., 30., 8., 160.),
                ),
                (
                    "sacramento".into(),
                    profile("3B Hot-Dry", 32., 100., 69., 32., 8., 30.),
                ),
                (
                    "fresno".into(),
                    profile("3B Hot-Dry", 30., 102., 70., 34., 6., 308.),
                ),
            ]),
            ClimateProfile::default_profile(),
        )
    }
}

impl ClimateResolver for AddressSubstringResolver {
    fn resolve(&self, address: &str) -> ClimateProfile {
        let needle = address.to_lowercase();
        self.table
            .iter()
            .find(|(location, _)| needle.contains(location.as_str()))
            .map(|(location, profile)| {
                debug!(location = location.as_str(), "matched address to location table");
                profile.clone()
            })
            .unwrap_or_else(|| {
                debug!("address matched no location, using default profile");
                self.default.clone()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn resolver() -> AddressSubstringResolver {
        AddressSubstringResolver::standard()
    }

    #[rstest]
    fn should_match_addresses_case_insensitively(resolver: AddressSubstringResolver) {
        let profile = resolver.resolve("123 Main St, OAKLAND, CA 94601");
        assert_eq!(profile.winter_design_temp, 32.);
        assert_eq!(profile.summer_design_temp, 87.);
    }

    #[rstest]
    fn should_return_default_profile_for_unmatched_addresses(resolver: AddressSubstringResolver) {
        assert_eq!(resolver.resolve("1 Infinite Loop, Cupertino"), ClimateProfile::default_profile());
        assert_eq!(resolver.resolve(""), ClimateProfile::default_profile());
    }

    #[rstest]
    fn should_prefer_earlier_table_entries_on_multiple_matches(
        resolver: AddressSubstringResolver,
    ) {
        // "san francisco" precedes "oakland" in table-definition order
        let profile = resolver.resolve("Oakland Ave, San Francisco, CA");
        assert_eq!(profile.winter_design_temp, 38.);
    }

    #[rstest]
    fn should_respect_an_injected_table() {
        let arctic = ClimateProfile {
            zone: "8 Subarctic".into(),
            winter_design_temp: -40.,
            summer_design_temp: 70.,
            summer_wet_bulb: 58.,
            daily_range: 24.,
            wind_speed: 6.,
            elevation: 440.,
        };
        let resolver = AddressSubstringResolver::new(
            IndexMap::from([("fairbanks".to_owned(), arctic.clone())]),
            ClimateProfile::default_profile(),
        );
        assert_eq!(resolver.resolve("Fairbanks, AK"), arctic);
    }
}

use crate::input::{AtticType, FoundationType, SurfaceColor, WallConstruction, WindowGlazing};
use indexmap::IndexMap;

/// This module contains the thermal reference data the engine is constructed
/// with, and typed lookups over it. Every lookup is total: an unrecognised
/// construction key falls back to the documented default assembly rather
/// than propagating an absence.

// Fallbacks used when an injected table is missing even its default row.
const FALLBACK_WALL_BASE_R: f64 = 4.0;
const FALLBACK_ABSORPTANCE: f64 = 0.55;
const FALLBACK_FOUNDATION_BASE_R: f64 = 5.0;

// Uninsulated attic assembly resistance added to the user-supplied R-value.
const ATTIC_ASSEMBLY_BASE_R: f64 = 2.5;
// Cathedral framing leaves less depth for insulation than a vented attic.
const CATHEDRAL_R_FACTOR: f64 = 0.75;
const MIN_EFFECTIVE_R: f64 = 1.0;

/// U-value and solar heat gain coefficient for a window assembly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowProperties {
    pub u_value: f64, // BTU/(h.ft2.F)
    pub shgc: f64,
}

impl WindowProperties {
    pub fn new(u_value: f64, shgc: f64) -> Self {
        Self { u_value, shgc }
    }
}

/// Immutable thermal reference tables, injected into the engine at
/// construction so alternate assemblies can be substituted without touching
/// calculation code.
#[derive(Clone, Debug)]
pub struct ThermalProperties {
    wall_base_r: IndexMap<WallConstruction, f64>,
    windows: IndexMap<WindowGlazing, WindowProperties>,
    absorptance: IndexMap<SurfaceColor, f64>,
    foundation_base_r: IndexMap<FoundationType, f64>,
}

impl ThermalProperties {
    pub fn new(
        wall_base_r: IndexMap<WallConstruction, f64>,
        windows: IndexMap<WindowGlazing, WindowProperties>,
        absorptance: IndexMap<SurfaceColor, f64>,
        foundation_base_r: IndexMap<FoundationType, f64>,
    ) -> Self {
        Self {
            wall_base_r,
            windows,
            absorptance,
            foundation_base_r,
        }
    }

    /// The standard residential assembly tables.
    pub fn standard() -> Self {
        Self::new(
            IndexMap::from([
                (WallConstruction::WoodFrame2x4, 4.0),
                (WallConstruction::WoodFrame2x6, 5.5),
                (WallConstruction::Masonry, 3.0),
                (WallConstruction::BrickVeneer, 4.5),
                (WallConstruction::ConcreteBlock, 2.5),
            ]),
            IndexMap::from([
                (WindowGlazing::SinglePane, WindowProperties::new(1.04, 0.76)),
                (WindowGlazing::DoublePane, WindowProperties::new(0.48, 0.58)),
                (
                    WindowGlazing::DoublePaneLowE,
                    WindowProperties::new(0.30, 0.40),
                ),
                (WindowGlazing::TriplePane, WindowProperties::new(0.20, 0.30)),
            ]),
            IndexMap::from([
                (SurfaceColor::White, 0.25),
                (SurfaceColor::Light, 0.35),
                (SurfaceColor::Medium, 0.55),
                (SurfaceColor::Dark, 0.80),
            ]),
            IndexMap::from([
                (FoundationType::Slab, 5.0),
                (FoundationType::CrawlspaceVented, 6.0),
                (FoundationType::CrawlspaceUnvented, 8.0),
                (FoundationType::BasementUnconditioned, 10.0),
                (FoundationType::BasementConditioned, 12.0),
            ]),
        )
    }

    /// Base R-value of the opaque wall assembly before added insulation.
    pub fn wall_base_r(&self, construction: &WallConstruction) -> f64 {
        self.wall_base_r
            .get(construction)
            .or_else(|| self.wall_base_r.get(&WallConstruction::default()))
            .copied()
            .unwrap_or(FALLBACK_WALL_BASE_R)
    }

    pub fn window(&self, glazing: &WindowGlazing) -> WindowProperties {
        self.windows
            .get(glazing)
            .or_else(|| self.windows.get(&WindowGlazing::default()))
            .copied()
            .unwrap_or(WindowProperties::new(0.48, 0.58))
    }

    /// Solar absorptance of an exterior surface finish.
    pub fn absorptance(&self, color: &SurfaceColor) -> f64 {
        self.absorptance
            .get(color)
            .or_else(|| self.absorptance.get(&SurfaceColor::default()))
            .copied()
            .unwrap_or(FALLBACK_ABSORPTANCE)
    }

    /// Effective resistance of the roof/attic assembly.
    pub fn effective_attic_r(&self, insulation_r: f64, attic_type: &AtticType) -> f64 {
        let assembly_r = ATTIC_ASSEMBLY_BASE_R + insulation_r;
        let effective = if attic_type.is_cathedral() {
            assembly_r * CATHEDRAL_R_FACTOR
        } else {
            assembly_r
        };
        effective.max(MIN_EFFECTIVE_R)
    }

    /// Overall heat-transfer coefficient of the foundation assembly, before
    /// the ground-coupling derating applied by the load calculation.
    pub fn foundation_u(&self, foundation_type: &FoundationType, insulation_r: f64) -> f64 {
        let base_r = self
            .foundation_base_r
            .get(foundation_type)
            .or_else(|| self.foundation_base_r.get(&FoundationType::default()))
            .copied()
            .unwrap_or(FALLBACK_FOUNDATION_BASE_R);
        1. / (base_r + insulation_r).max(MIN_EFFECTIVE_R)
    }
}

impl Default for ThermalProperties {
    fn default() -> Self {
        Self::standard()
    }
}

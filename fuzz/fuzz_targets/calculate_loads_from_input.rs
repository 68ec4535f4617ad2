#![no_main]

use libfuzzer_sys::fuzz_target;
use manualj::input::BuildingDescriptor;
use manualj::LoadEngine;

// The engine's contract is that it is total over any descriptor: every
// combination of present/absent/degenerate fields must produce a result
// without panicking.
fuzz_target!(|building: BuildingDescriptor| {
    let engine = LoadEngine::default();
    let analysis = engine.calculate_loads(&building);
    let _ = engine.recommend(&analysis, &building);
});

pub mod climate;
pub mod core;
pub mod engine;
pub mod errors;
pub mod input;
pub mod output;

pub use crate::engine::{LoadAnalysis, LoadEngine};
pub use crate::errors::ManualJError;
pub use crate::input::{ingest_for_processing, BuildingDescriptor};

use crate::core::equipment::EquipmentOption;
use crate::core::monthly::MONTH_LABELS;
use crate::errors::ReportError;
use crate::output::Output;
use csv::WriterBuilder;
use itertools::izip;
use std::io::Read;

/// Run one full load estimate: ingest a building descriptor from JSON,
/// calculate loads and recommendations with the standard reference tables,
/// and write the report artifacts to the given output.
pub fn run_project(input: impl Read, output: impl Output) -> Result<(), ManualJError> {
    let building = ingest_for_processing(input)?;

    let engine = LoadEngine::default();
    let analysis = engine.calculate_loads(&building);
    let options = engine.recommend(&analysis, &building);

    if output.is_noop() {
        return Ok(());
    }

    write_loads_report(&output, &analysis)?;
    write_breakdown_report(&output, &analysis)?;
    write_monthly_report(&output, &analysis)?;
    write_equipment_report(&output, &options)?;

    Ok(())
}

fn write_loads_report(output: &impl Output, analysis: &LoadAnalysis) -> Result<(), ReportError> {
    let writer = output
        .writer_for_location_key("loads.json")
        .map_err(ReportError::new)?;
    serde_json::to_writer_pretty(writer, analysis)
        .map_err(|error| ReportError::new(error.into()))?;
    Ok(())
}

fn write_breakdown_report(
    output: &impl Output,
    analysis: &LoadAnalysis,
) -> Result<(), ReportError> {
    let writer = output
        .writer_for_location_key("breakdown.csv")
        .map_err(ReportError::new)?;
    let mut writer = WriterBuilder::new().from_writer(writer);
    let report_error = |error: csv::Error| ReportError::new(error.into());

    writer
        .write_record(["mode", "component", "btu_per_hour"])
        .map_err(report_error)?;
    for (mode, series) in [
        ("heating", &analysis.breakdown.heating),
        ("cooling", &analysis.breakdown.cooling),
    ] {
        for (label, value) in izip!(&series.labels, &series.values) {
            writer
                .write_record([mode, label.as_str(), value.to_string().as_str()])
                .map_err(report_error)?;
        }
    }

    Ok(())
}

fn write_monthly_report(output: &impl Output, analysis: &LoadAnalysis) -> Result<(), ReportError> {
    let writer = output
        .writer_for_location_key("monthly.csv")
        .map_err(ReportError::new)?;
    let mut writer = WriterBuilder::new().from_writer(writer);

    writer
        .write_record(["month", "heating_kbtu", "cooling_kbtu"])
        .map_err(|error| ReportError::new(error.into()))?;
    for (month, heating, cooling) in izip!(
        MONTH_LABELS,
        &analysis.monthly.heating_kbtu,
        &analysis.monthly.cooling_kbtu
    ) {
        writer
            .write_record([
                month,
                format!("{heating:.1}").as_str(),
                format!("{cooling:.1}").as_str(),
            ])
            .map_err(|error| ReportError::new(error.into()))?;
    }

    Ok(())
}

fn write_equipment_report(
    output: &impl Output,
    options: &[EquipmentOption],
) -> Result<(), ReportError> {
    let writer = output
        .writer_for_location_key("equipment.json")
        .map_err(ReportError::new)?;
    serde_json::to_writer_pretty(writer, options)
        .map_err(|error| ReportError::new(error.into()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{MemoryOutput, SinkOutput};
    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::Value;

    const SCENARIO: &str = r#"{
        "address": "Oakland, CA",
        "totalArea": 2000, "ceilingHeight": 9, "yearBuilt": 2005,
        "occupants": 4, "heatingTemp": 70, "coolingTemp": 75,
        "windowAreaNorth": 20, "windowAreaEast": 20,
        "windowAreaSouth": 20, "windowAreaWest": 20
    }"#;

    #[rstest]
    fn should_write_all_report_artifacts() {
        let output = MemoryOutput::new();
        run_project(SCENARIO.as_bytes(), &output).unwrap();

        let loads: Value =
            serde_json::from_str(&output.artifact_string("loads.json").unwrap()).unwrap();
        assert!(loads["heating"]["total"].as_i64().unwrap() > 0);
        assert_eq!(loads["climate"]["winter_design_temp"], 32.);

        let equipment: Value =
            serde_json::from_str(&output.artifact_string("equipment.json").unwrap()).unwrap();
        assert!(equipment.as_array().is_some());

        let breakdown = output.artifact_string("breakdown.csv").unwrap();
        // header + 5 heating + 6 cooling rows
        assert_eq!(breakdown.trim().lines().count(), 12);
        assert!(breakdown.starts_with("mode,component,btu_per_hour"));

        let monthly = output.artifact_string("monthly.csv").unwrap();
        assert_eq!(monthly.trim().lines().count(), 13);
    }

    #[rstest]
    fn should_skip_report_rendering_for_a_noop_output() {
        run_project(SCENARIO.as_bytes(), SinkOutput).unwrap();
    }

    #[rstest]
    fn should_reject_unreadable_top_level_json() {
        let result = run_project("not json at all".as_bytes(), SinkOutput);
        assert!(matches!(result, Err(ManualJError::InvalidRequest(_))));
    }

    #[rstest]
    fn should_accept_an_empty_descriptor_object() {
        run_project("{}".as_bytes(), SinkOutput).unwrap();
    }
}

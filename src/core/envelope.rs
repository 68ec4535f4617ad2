use crate::input::BuildingDescriptor;

// Fixed allowance for exterior doors deducted from gross wall area, in sq ft.
pub const DOOR_AREA_ALLOWANCE: f64 = 40.;

/// Estimate the footprint perimeter from conditioned area, in ft.
///
/// Assumes a square footprint (perimeter = 4 * sqrt(area)), which is the
/// accepted simplification for a quick estimate without floor-plan input.
pub fn estimated_perimeter(total_area: f64) -> f64 {
    4. * total_area.max(0.).sqrt()
}

/// Gross exterior wall area across all storeys, in sq ft.
pub fn gross_wall_area(building: &BuildingDescriptor) -> f64 {
    estimated_perimeter(building.total_area()) * building.ceiling_height() * building.stories()
}

/// Opaque wall area: gross area less glazing and the door allowance,
/// floored at zero for heavily glazed inputs.
pub fn net_wall_area(building: &BuildingDescriptor) -> f64 {
    (gross_wall_area(building) - building.total_window_area() - DOOR_AREA_ALLOWANCE).max(0.)
}

/// Conditioned air volume, in cubic ft.
pub fn conditioned_volume(building: &BuildingDescriptor) -> f64 {
    building.total_area() * building.ceiling_height()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::*;

    #[fixture]
    fn building() -> BuildingDescriptor {
        BuildingDescriptor {
            total_area: Some(2_000.),
            ceiling_height: Some(9.),
            stories: Some(1.),
            window_area_north: Some(20.),
            window_area_east: Some(20.),
            window_area_south: Some(20.),
            window_area_west: Some(20.),
            ..Default::default()
        }
    }

    #[rstest]
    fn should_estimate_perimeter_of_square_footprint() {
        assert_relative_eq!(estimated_perimeter(2_500.), 200.);
        assert_relative_eq!(estimated_perimeter(2_000.), 178.88543819998318);
    }

    #[rstest]
    fn should_not_take_sqrt_of_negative_area() {
        assert_eq!(estimated_perimeter(-100.), 0.);
    }

    #[rstest]
    fn should_compute_net_wall_area(building: BuildingDescriptor) {
        let gross = gross_wall_area(&building);
        assert_relative_eq!(gross, 178.88543819998318 * 9.);
        assert_relative_eq!(net_wall_area(&building), gross - 80. - 40.);
    }

    #[rstest]
    fn should_scale_wall_area_with_storeys(mut building: BuildingDescriptor) {
        building.stories = Some(2.);
        assert_relative_eq!(gross_wall_area(&building), 178.88543819998318 * 9. * 2.);
    }

    #[rstest]
    fn should_floor_net_wall_area_at_zero(mut building: BuildingDescriptor) {
        building.window_area_south = Some(5_000.);
        assert_eq!(net_wall_area(&building), 0.);
    }

    #[rstest]
    fn should_compute_conditioned_volume(building: BuildingDescriptor) {
        assert_relative_eq!(conditioned_volume(&building), 18_000.);
    }
}

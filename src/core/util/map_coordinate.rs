/// Maps a pixel index to a coordinate by linear interpolation over
/// `[range_min, range_max)`.
///
/// Callers pass `0 <= pixel_index < display_size` and a non-zero
/// `display_size`; a zero size divides by zero and yields garbage, which is
/// the caller's precondition to guard, not an error this function reports.
#[must_use]
pub fn map_coordinate(
    range_min: f64,
    range_max: f64,
    display_size: usize,
    pixel_index: usize,
) -> f64 {
    range_min + (pixel_index as f64 / display_size as f64) * (range_max - range_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_zero_maps_to_range_min() {
        assert_eq!(map_coordinate(-2.0, 1.0, 600, 0), -2.0);
        assert_eq!(map_coordinate(5.0, 10.0, 7, 0), 5.0);
    }

    #[test]
    fn test_index_equal_to_size_extrapolates_to_range_max() {
        assert_eq!(map_coordinate(-2.0, 1.0, 600, 600), 1.0);
        assert_eq!(map_coordinate(-1.5, 1.5, 4, 4), 1.5);
    }

    #[test]
    fn test_midpoint_is_linear() {
        assert_eq!(map_coordinate(-2.0, 2.0, 600, 300), 0.0);
        assert_eq!(map_coordinate(0.0, 1.0, 8, 2), 0.25);
    }

    #[test]
    fn test_last_valid_index_stays_below_range_max() {
        let coordinate = map_coordinate(0.0, 1.0, 600, 599);

        assert!(coordinate < 1.0);
        assert_eq!(coordinate, 599.0 / 600.0);
    }
}

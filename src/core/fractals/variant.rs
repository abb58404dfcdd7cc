use crate::core::data::viewport::Viewport;

/// Iteration cap shared by all variants.
pub const MAX_ITERATIONS: i32 = 2000;

/// Returned by [`FractalVariant::iterate`] for points that never leave the
/// escape radius within the cap.
pub const BOUNDED: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalVariant {
    #[default]
    Mandelbrot,
    Tricorn,
    BurningShip,
}

impl FractalVariant {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Tricorn, Self::BurningShip];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Tricorn => "Tricorn",
            Self::BurningShip => "Burning Ship",
        }
    }

    /// The most interesting region of the complex plane for this variant,
    /// used as the starting view and as the reset target.
    #[must_use]
    pub fn initial_range(self) -> Viewport {
        let viewport = match self {
            Self::Mandelbrot => Viewport::new(-2.0, -1.5, 3.0, 3.0),
            Self::Tricorn => Viewport::new(-2.0, -2.0, 4.0, 4.0),
            Self::BurningShip => Viewport::new(-2.0, -2.5, 4.0, 4.0),
        };

        viewport.expect("initial ranges are valid")
    }

    /// Counts recurrence steps until `(x0, y0)` leaves the escape radius.
    ///
    /// The orbit starts at the point itself and the escape test runs after
    /// each update. Points still inside after the full cap report
    /// [`BOUNDED`], and so does a point whose escape lands exactly on the
    /// final allowed step.
    #[must_use]
    pub fn iterate(self, x0: f64, y0: f64) -> i32 {
        let mut r = x0;
        let mut i = y0;
        let mut counter = 0;

        while counter < MAX_ITERATIONS {
            counter += 1;

            let next_r = r * r - i * i + x0;
            let next_i = match self {
                Self::Mandelbrot => 2.0 * r * i + y0,
                Self::Tricorn => -2.0 * r * i + y0,
                Self::BurningShip => (2.0 * r * i).abs() + y0,
            };
            r = next_r;
            i = next_i;

            if r * r + i * i > 4.0 {
                break;
            }
        }

        if counter == MAX_ITERATIONS {
            return BOUNDED;
        }
        counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_ranges_are_the_fixed_constants() {
        let mandelbrot = FractalVariant::Mandelbrot.initial_range();
        assert_eq!(
            (
                mandelbrot.x(),
                mandelbrot.y(),
                mandelbrot.width(),
                mandelbrot.height()
            ),
            (-2.0, -1.5, 3.0, 3.0)
        );

        let tricorn = FractalVariant::Tricorn.initial_range();
        assert_eq!(
            (tricorn.x(), tricorn.y(), tricorn.width(), tricorn.height()),
            (-2.0, -2.0, 4.0, 4.0)
        );

        let ship = FractalVariant::BurningShip.initial_range();
        assert_eq!(
            (ship.x(), ship.y(), ship.width(), ship.height()),
            (-2.0, -2.5, 4.0, 4.0)
        );
    }

    #[test]
    fn test_initial_ranges_are_square() {
        for &variant in FractalVariant::ALL {
            let range = variant.initial_range();
            assert_eq!(range.width(), range.height(), "{}", variant.display_name());
        }
    }

    #[test]
    fn test_interior_point_is_bounded() {
        for &variant in FractalVariant::ALL {
            assert_eq!(
                variant.iterate(0.0, 0.0),
                BOUNDED,
                "{}",
                variant.display_name()
            );
        }
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        for &variant in FractalVariant::ALL {
            let count = variant.iterate(10.0, 10.0);
            assert_eq!(count, 1, "{}", variant.display_name());
        }
    }

    #[test]
    fn test_escape_counts_are_positive_and_below_cap() {
        for &variant in FractalVariant::ALL {
            let count = variant.iterate(0.4, 0.6);
            if count != BOUNDED {
                assert!(count >= 1, "{}", variant.display_name());
                assert!(count < MAX_ITERATIONS, "{}", variant.display_name());
            }
        }
    }

    #[test]
    fn test_recurrences_differ_between_variants() {
        // Points whose orbits are sensitive to the sign and absolute-value
        // twists on the imaginary part.
        assert_eq!(FractalVariant::Mandelbrot.iterate(-0.6, 0.5), 11);
        assert_eq!(FractalVariant::Tricorn.iterate(-0.6, 0.5), 2);

        assert_eq!(FractalVariant::Tricorn.iterate(0.4, 0.6), BOUNDED);
        assert_eq!(FractalVariant::BurningShip.iterate(0.4, 0.6), 3);
    }

    #[test]
    fn test_conjugate_axis_symmetry_of_tricorn() {
        // The Tricorn recurrence conjugates the orbit, so a real-axis point
        // behaves identically under Mandelbrot and Tricorn.
        let mandelbrot = FractalVariant::Mandelbrot.iterate(0.3, 0.0);
        let tricorn = FractalVariant::Tricorn.iterate(0.3, 0.0);

        assert_eq!(mandelbrot, tricorn);
    }

    #[test]
    fn test_counts_are_deterministic() {
        for &variant in FractalVariant::ALL {
            assert_eq!(variant.iterate(0.3, -0.7), variant.iterate(0.3, -0.7));
        }
    }
}
